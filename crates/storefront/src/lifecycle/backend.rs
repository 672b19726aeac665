use crate::clients::{
    CompanyClient, OrderClient, ProductClient, ProfileClient, RepresentativeClient, RoleClient,
};
use crate::config::{ConfigError, StorefrontConfig};
use crate::render::OrderRenderer;
use crate::storage::InMemoryStorage;
use crate::{
    company_table, order_table, product_table, profile_table, representative_table, role_table,
};
use chrono::FixedOffset;
use std::sync::Arc;
use tracing::{error, info};

/// Every table actor, running, with a client for each.
///
/// # Example
///
/// ```ignore
/// let backend = Backend::start(&StorefrontConfig::default())?;
///
/// let company = backend.companies.register(new_company).await?;
/// let mut storefront = Storefront::open(&company.short_name, &backend).await?;
/// // ... compose and submit ...
/// drop(storefront);
///
/// backend.shutdown().await?;
/// ```
pub struct Backend {
    pub companies: CompanyClient,
    pub products: ProductClient,
    pub orders: OrderClient,
    pub profiles: ProfileClient,
    pub representatives: RepresentativeClient,
    pub roles: RoleClient,
    pub storage: Arc<InMemoryStorage>,
    /// Zone used to stamp order date and time.
    pub offset: FixedOffset,
    pub renderer: OrderRenderer,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Backend {
    /// Spawns the six table actors with their contexts injected. Must be called inside a
    /// Tokio runtime.
    pub fn start(config: &StorefrontConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let offset = config.offset()?;
        let buffer = config.channel_buffer;

        // 1. Create actors
        let (company_actor, companies) = company_table::new(buffer);
        let (product_actor, products) = product_table::new(buffer);
        let (order_actor, orders) = order_table::new(buffer);
        let (profile_actor, profiles) = profile_table::new(buffer);
        let (representative_actor, representatives) = representative_table::new(buffer);
        let (role_actor, roles) = role_table::new(buffer);

        // 2. Start them with their dependencies
        let handles = vec![
            tokio::spawn(company_actor.run(())),
            tokio::spawn(profile_actor.run(())),
            tokio::spawn(role_actor.run(())),
            tokio::spawn(product_actor.run(companies.clone())),
            tokio::spawn(order_actor.run(companies.clone())),
            tokio::spawn(representative_actor.run(profiles.clone())),
        ];

        info!(buffer, utc_offset_hours = config.utc_offset_hours, "Backend started");
        Ok(Self {
            companies,
            products,
            orders,
            profiles,
            representatives,
            roles,
            storage: Arc::new(InMemoryStorage::new(
                config.storage.public_base_url.clone(),
                config.storage.max_upload_bytes,
            )),
            offset,
            renderer: OrderRenderer::new(config.currency_symbol.clone()),
            handles,
        })
    }

    /// Drops the clients and waits for every actor to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down backend...");

        drop(self.companies);
        drop(self.products);
        drop(self.orders);
        drop(self.profiles);
        drop(self.representatives);
        drop(self.roles);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Backend shutdown complete.");
        Ok(())
    }
}
