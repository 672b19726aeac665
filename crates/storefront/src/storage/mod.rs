//! # Object Storage
//!
//! Image uploads for company logos and product pictures. An upload failure is reported for
//! the image field alone; the company or product form still saves without it.
//!
//! ## Structure
//!
//! - [`store`] - [`ObjectStorage`] trait, [`InMemoryStorage`] and [`upload_image`]
//! - [`error`] - [`StorageError`]

pub mod error;
pub mod store;

pub use error::StorageError;
pub use store::{upload_image, InMemoryStorage, ObjectStorage, COMPANY_LOGOS, PRODUCT_IMAGES};
