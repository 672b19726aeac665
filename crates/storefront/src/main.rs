use rust_decimal::Decimal;
use storefront::clients::ProductQuery;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::{setup_tracing, Backend};
use storefront::model::{ContactDetails, NewCompany, NewProduct, SizeOption, UserId};
use storefront::storage::{upload_image, COMPANY_LOGOS};
use storefront::storefront::Storefront;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config);

    info!("Starting storefront demo");
    let backend = Backend::start(&config).map_err(|e| e.to_string())?;

    // Seed a company and its catalog
    let span = tracing::info_span!("seed");
    let company = async {
        let logo_url = match upload_image(
            backend.storage.as_ref(),
            COMPANY_LOGOS,
            "logo.png",
            vec![0x89, 0x50, 0x4e, 0x47],
        )
        .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(error = %e, "Logo upload failed, continuing without it");
                None
            }
        };

        let company = backend
            .companies
            .register(NewCompany {
                name: "Confecções São João".to_string(),
                owner_id: UserId::new(),
                representative_id: None,
                logo_url,
            })
            .await
            .map_err(|e| e.to_string())?;

        for (reference, name, sizes) in [
            ("CM-01", "Camiseta básica", [("P", 18), ("M", 19), ("G", 20)]),
            ("BL-07", "Blusa canelada", [("P", 25), ("M", 25), ("G", 27)]),
        ] {
            backend
                .products
                .create(NewProduct {
                    company_id: company.id,
                    reference: reference.to_string(),
                    name: name.to_string(),
                    image_url: None,
                    sizes: sizes
                        .iter()
                        .map(|(label, price)| SizeOption::new(*label, Decimal::from(*price)))
                        .collect(),
                    quantity_tiers: vec![6, 12, 24],
                    active: true,
                    is_new: reference == "BL-07",
                    out_of_stock: false,
                })
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(company)
    }
    .instrument(span)
    .await?;

    let listed = backend
        .products
        .list(company.id, ProductQuery::default())
        .await
        .map_err(|e| e.to_string())?;
    info!(company = %company.short_name, products = listed.len(), "Catalog ready");

    // A customer visits the storefront
    let mut storefront = Storefront::open(&company.short_name, &backend)
        .await
        .map_err(|e| e.to_string())?;

    let catalog: Vec<_> = storefront.catalog().to_vec();
    for product in &catalog {
        storefront
            .choose(product.id, "M", 12)
            .map_err(|e| e.to_string())?;
    }
    if let Some(first) = catalog.first() {
        storefront
            .choose(first.id, "G", 6)
            .map_err(|e| e.to_string())?;
    }

    let summary = storefront.summary();
    info!(total = %summary.formatted_total, items = summary.items.len(), "Order composed");

    storefront.set_contact(ContactDetails {
        name: "Ana Souza".to_string(),
        phone: "(11) 9 8765-4321".to_string(),
        city: "Campinas".to_string(),
        zip_code: "13010-000".to_string(),
    });
    let order_id = storefront
        .submit(Some("Entregar pela manhã".to_string()))
        .await
        .map_err(|e| e.to_string())?;
    info!(%order_id, redirect = %storefront.success_path(), "Order submitted");
    drop(storefront);

    // Staff review the order
    let order = backend
        .orders
        .find(order_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("order {order_id} not found"))?;
    println!("{}", backend.renderer.print(&order, &company.name));

    backend.shutdown().await?;
    Ok(())
}
