use chrono::{FixedOffset, NaiveDate, NaiveTime, Utc};
use rust_decimal_macros::dec;
use storefront::auth::{AuthError, AuthService, InMemoryAuth};
use storefront::clients::{
    OrderClient, OrderSort, OrderSortColumn, ProductQuery, ProductSortField, SortDirection,
};
use storefront::company_table::CompanyError;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Backend;
use storefront::model::{
    items_total, Company, CompanyId, CompanySettings, ContactDetails, DisplayMode, LineItem,
    Money, NewCompany, NewOrder, NewProduct, NewProfile, OrderId, Product, ProductChanges,
    ProductId, QuantitySelectionMode, Role, SizeLine, SizeOption, UserId,
};
use storefront::order_table::OrderRow;
use storefront::product_table::ProductError;
use storefront::profile_table::ProfileError;
use storefront::render::OrderRenderer;
use storefront::representative_table::RepresentativeError;
use storefront::storefront::{Storefront, StorefrontError};
use storefront::submission::{OrderSubmitter, SubmissionError, SubmissionState};
use table_actor::mock::MockTable;
use table_actor::{StoreError, TableAccess};

fn contact() -> ContactDetails {
    ContactDetails {
        name: "Ana Souza".to_string(),
        phone: "(11) 9 8765-4321".to_string(),
        city: "Campinas".to_string(),
        zip_code: "13010-000".to_string(),
    }
}

async fn register(backend: &Backend, name: &str) -> Company {
    backend
        .companies
        .register(NewCompany {
            name: name.to_string(),
            owner_id: UserId::new(),
            representative_id: None,
            logo_url: None,
        })
        .await
        .expect("Failed to register company")
}

async fn add_product(
    backend: &Backend,
    company: CompanyId,
    reference: &str,
    sizes: &[(&str, Money)],
) -> Product {
    backend
        .products
        .create(NewProduct {
            company_id: company,
            reference: reference.to_string(),
            name: format!("Produto {reference}"),
            image_url: None,
            sizes: sizes
                .iter()
                .map(|(label, price)| SizeOption::new(*label, *price))
                .collect(),
            quantity_tiers: vec![6, 12, 24],
            active: true,
            is_new: false,
            out_of_stock: false,
        })
        .await
        .expect("Failed to create product")
}

/// Full end-to-end flow with all real actors: compose, submit, read back.
#[tokio::test]
async fn test_storefront_order_flow() {
    let backend = Backend::start(&StorefrontConfig::default()).expect("Failed to start backend");
    let company = register(&backend, "Acme Confecções").await;
    assert_eq!(company.short_name, "acme-confeccoes");
    let shirt = add_product(
        &backend,
        company.id,
        "P1",
        &[("M", dec!(5.00)), ("G", dec!(6.00))],
    )
    .await;

    let mut storefront = Storefront::open("acme-confeccoes", &backend)
        .await
        .expect("Failed to open storefront");
    assert_eq!(storefront.catalog().len(), 1);

    // Two sizes of one product
    storefront.choose(shirt.id, "G", 12).unwrap();
    storefront.choose(shirt.id, "M", 6).unwrap();
    let summary = storefront.summary();
    assert_eq!(summary.total, dec!(102.00));
    assert_eq!(summary.formatted_total, "R$ 102,00");
    assert_eq!(summary.line_items.len(), 1);
    assert_eq!(
        summary.line_items[0].size_breakdown,
        vec![
            SizeLine::new("M", dec!(5.00), 6),
            SizeLine::new("G", dec!(6.00), 12),
        ]
    );

    // Deselecting M leaves only G
    storefront.choose(shirt.id, "M", 0).unwrap();
    let summary = storefront.summary();
    assert_eq!(summary.total, dec!(72.00));
    assert_eq!(
        summary.line_items[0].size_breakdown,
        vec![SizeLine::new("G", dec!(6.00), 12)]
    );

    storefront.choose(shirt.id, "M", 6).unwrap();
    storefront.set_contact(contact());
    let order_id = storefront
        .submit(Some("Entregar pela manhã".to_string()))
        .await
        .expect("Failed to submit");

    assert!(storefront.selections().is_empty());
    assert_eq!(storefront.submission_state(), SubmissionState::Succeeded);
    assert_eq!(storefront.success_path(), "/acme-confeccoes/success");
    assert_eq!(storefront.storefront_path(), "/acme-confeccoes");

    let order = backend
        .orders
        .find(order_id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.company_id, company.id);
    assert_eq!(order.total, dec!(102.00));
    assert_eq!(order.total, items_total(&order.items));
    assert_eq!(order.contact.phone, "11987654321");
    assert_eq!(order.notes.as_deref(), Some("Entregar pela manhã"));

    let view = backend.renderer.detail(&order);
    assert!(view.consistent);
    assert_eq!(view.items[0].heading, "P1 - Produto P1");
    let sizes: Vec<&str> = view.items[0].sizes.iter().map(|s| s.size.as_str()).collect();
    assert_eq!(sizes, vec!["M", "G"]);

    let listed = backend
        .orders
        .list_for_company(company.id, OrderSort::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    drop(storefront);
    backend.shutdown().await.expect("Shutdown failed");
}

/// Store failure through a mocked orders table: nothing is lost and a retry succeeds.
#[tokio::test]
async fn test_persistence_failure_keeps_selections_and_contact() {
    let company = Company {
        id: CompanyId::new(),
        name: "Acme".to_string(),
        short_name: "acme".to_string(),
        owner_id: UserId::new(),
        active: true,
        logo_url: None,
        display_mode: DisplayMode::Full,
        quantity_selection_mode: QuantitySelectionMode::Radio,
        representative_id: None,
        created_at: Utc::now(),
    };
    let product = Product {
        id: ProductId::new(),
        company_id: company.id,
        reference: "R1".to_string(),
        name: "Camiseta".to_string(),
        image_url: None,
        sizes: vec![SizeOption::new("M", dec!(5.00))],
        quantity_tiers: vec![6],
        active: true,
        is_new: false,
        out_of_stock: false,
        created_at: Utc::now(),
    };

    let mut orders = MockTable::<OrderRow>::new();
    orders.expect_insert().return_err(StoreError::ActorClosed);
    let stored_id = OrderId::new();
    orders.expect_insert().return_ok(OrderRow {
        id: stored_id,
        company_id: company.id,
        customer_name: "Ana Souza".to_string(),
        customer_phone: "11987654321".to_string(),
        customer_city: "Campinas".to_string(),
        customer_zip_code: "13010-000".to_string(),
        items: vec![],
        total: dec!(30.00),
        notes: None,
        date: "2024-01-31".to_string(),
        time: "10:00:00".to_string(),
        created_at: Utc::now(),
    });

    let submitter = OrderSubmitter::new(
        Some(company.id),
        vec![product.clone()],
        OrderClient::new(orders.client()),
        FixedOffset::west_opt(3 * 3600).unwrap(),
    );
    let mut storefront = Storefront::with_submitter(company, submitter, OrderRenderer::default());
    storefront.choose(product.id, "M", 6).unwrap();
    storefront.set_contact(contact());

    let result = storefront.submit(None).await;
    assert!(matches!(result, Err(SubmissionError::PersistenceFailure(_))));
    assert_eq!(storefront.selections().len(), 1);
    assert_eq!(storefront.contact(), Some(&contact()));
    assert!(matches!(
        storefront.submission_state(),
        SubmissionState::Failed(_)
    ));

    let retried = storefront.submit(None).await.expect("Retry failed");
    assert_eq!(retried, stored_id);
    assert!(storefront.selections().is_empty());
    orders.verify();
}

#[tokio::test]
async fn test_choose_only_accepts_catalog_offers() {
    let backend = Backend::start(&StorefrontConfig::default()).unwrap();
    let company = register(&backend, "Acme").await;
    let shirt = add_product(&backend, company.id, "R1", &[("M", dec!(5.00))]).await;
    let sold_out = add_product(&backend, company.id, "R2", &[("U", dec!(9.00))]).await;
    backend
        .products
        .update(
            sold_out.id,
            ProductChanges {
                out_of_stock: Some(true),
                ..ProductChanges::default()
            },
        )
        .await
        .unwrap();

    let mut storefront = Storefront::open("acme", &backend).await.unwrap();
    let unknown = ProductId::new();
    assert_eq!(
        storefront.choose(unknown, "M", 6),
        Err(StorefrontError::UnknownProduct(unknown))
    );
    assert!(matches!(
        storefront.choose(shirt.id, "XG", 6),
        Err(StorefrontError::UnknownSize { .. })
    ));
    assert!(matches!(
        storefront.choose(shirt.id, "M", 7),
        Err(StorefrontError::InvalidQuantity { quantity: 7, .. })
    ));
    assert_eq!(
        storefront.choose(sold_out.id, "U", 6),
        Err(StorefrontError::Unavailable("R2".to_string()))
    );
    assert!(storefront.choose(sold_out.id, "U", 0).is_ok());
    assert!(storefront.selections().is_empty());

    // An empty selection never reaches the store
    storefront.set_contact(contact());
    assert_eq!(
        storefront.submit(None).await,
        Err(SubmissionError::EmptySelection)
    );

    drop(storefront);
    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_prices_past_the_money_range_never_panic() {
    let backend = Backend::start(&StorefrontConfig::default()).unwrap();
    let company = register(&backend, "Acme").await;
    let rejected = backend
        .products
        .create(NewProduct {
            company_id: company.id,
            reference: "R9".to_string(),
            name: "Casaco".to_string(),
            image_url: None,
            sizes: vec![SizeOption::new("U", Money::MAX / dec!(20))],
            quantity_tiers: vec![12, 24],
            active: true,
            is_new: false,
            out_of_stock: false,
        })
        .await;
    assert!(matches!(rejected, Err(ProductError::Invalid(_))));
    backend.shutdown().await.unwrap();

    // A catalog loaded from elsewhere may still carry such a price.
    let company_id = CompanyId::new();
    let coat = Product {
        id: ProductId::new(),
        company_id,
        reference: "R9".to_string(),
        name: "Casaco".to_string(),
        image_url: None,
        sizes: vec![
            SizeOption::new("U", Money::MAX / dec!(20)),
            SizeOption::new("G", dec!(10.00)),
        ],
        quantity_tiers: vec![12, 24],
        active: true,
        is_new: false,
        out_of_stock: false,
        created_at: Utc::now(),
    };
    let orders = MockTable::<OrderRow>::new();
    let submitter = OrderSubmitter::new(
        Some(company_id),
        vec![coat.clone()],
        OrderClient::new(orders.client()),
        FixedOffset::west_opt(3 * 3600).unwrap(),
    );
    let company = Company {
        id: company_id,
        name: "Acme".to_string(),
        short_name: "acme".to_string(),
        owner_id: UserId::new(),
        active: true,
        logo_url: None,
        display_mode: DisplayMode::Full,
        quantity_selection_mode: QuantitySelectionMode::Radio,
        representative_id: None,
        created_at: Utc::now(),
    };
    let mut storefront = Storefront::with_submitter(company, submitter, OrderRenderer::default());

    storefront.choose(coat.id, "U", 12).unwrap();
    storefront.choose(coat.id, "G", 12).unwrap();
    assert_eq!(
        storefront.choose(coat.id, "U", 24),
        Err(StorefrontError::AmountTooLarge {
            reference: "R9".to_string(),
            quantity: 24,
        })
    );
    assert_eq!(storefront.selections().quantity_of(coat.id, "U"), 12);

    let summary = storefront.summary();
    assert_eq!(summary.total, storefront.selections().total());
    assert_eq!(summary.line_items[0].size_breakdown.len(), 2);
    orders.verify();
}

#[tokio::test]
async fn test_short_names_and_inactive_companies() {
    let backend = Backend::start(&StorefrontConfig::default()).unwrap();
    let first = register(&backend, "Acme").await;
    let second = register(&backend, "ACME").await;
    assert_eq!(first.short_name, "acme");
    assert_eq!(second.short_name, "acme-2");

    assert_eq!(
        backend.companies.set_short_name(second.id, "Acme Store").await,
        Err(CompanyError::InvalidShortName("Acme Store".to_string()))
    );
    assert_eq!(
        backend.companies.set_short_name(second.id, "acme").await,
        Err(CompanyError::ShortNameTaken("acme".to_string()))
    );
    let renamed = backend
        .companies
        .set_short_name(second.id, "acme-atacado")
        .await
        .unwrap();
    assert_eq!(renamed.short_name, "acme-atacado");

    let settings = CompanySettings {
        active: Some(false),
        display_mode: Some(DisplayMode::Compact),
        ..CompanySettings::default()
    };
    let updated = backend
        .companies
        .update_settings(first.id, settings)
        .await
        .unwrap();
    assert!(!updated.active);
    assert_eq!(updated.display_mode, DisplayMode::Compact);

    assert!(matches!(
        Storefront::open("acme", &backend).await,
        Err(StorefrontError::NotFound(_))
    ));
    assert!(Storefront::open("acme-atacado", &backend).await.is_ok());

    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_management_and_listing() {
    let backend = Backend::start(&StorefrontConfig::default()).unwrap();
    let company = register(&backend, "Acme").await;

    let orphan = backend
        .products
        .create(NewProduct {
            company_id: CompanyId::new(),
            reference: "X".to_string(),
            name: "Órfão".to_string(),
            image_url: None,
            sizes: vec![SizeOption::new("U", dec!(1))],
            quantity_tiers: vec![1],
            active: true,
            is_new: false,
            out_of_stock: false,
        })
        .await;
    assert!(matches!(orphan, Err(ProductError::UnknownCompany(_))));

    let calca = add_product(&backend, company.id, "C-10", &[("38", dec!(40))]).await;
    let blusa = add_product(&backend, company.id, "B-20", &[("U", dec!(25))]).await;
    let _ = add_product(&backend, company.id, "A-30", &[("U", dec!(15))]).await;

    backend
        .products
        .update(
            calca.id,
            ProductChanges {
                active: Some(false),
                ..ProductChanges::default()
            },
        )
        .await
        .unwrap();
    backend
        .products
        .update(
            blusa.id,
            ProductChanges {
                is_new: Some(true),
                ..ProductChanges::default()
            },
        )
        .await
        .unwrap();

    let invalid = backend
        .products
        .update(
            blusa.id,
            ProductChanges {
                quantity_tiers: Some(vec![]),
                ..ProductChanges::default()
            },
        )
        .await;
    assert!(matches!(invalid, Err(ProductError::Invalid(_))));

    // The public catalog hides disabled products and puts new ones first
    let catalog = backend.products.catalog(company.id).await.unwrap();
    let references: Vec<&str> = catalog.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(references.len(), 2);
    assert_eq!(references[0], "B-20");

    let by_name = backend
        .products
        .list(
            company.id,
            ProductQuery {
                sort: ProductSortField::Name,
                direction: SortDirection::Desc,
                ..ProductQuery::default()
            },
        )
        .await
        .unwrap();
    let names: Vec<&str> = by_name.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(names, vec!["C-10", "B-20", "A-30"]);

    let searched = backend
        .products
        .list(
            company.id,
            ProductQuery {
                search: Some("b-2".to_string()),
                ..ProductQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].id, blusa.id);

    backend.products.delete(calca.id).await.unwrap();
    assert!(backend.products.find(calca.id).await.unwrap().is_none());
    assert!(matches!(
        backend.products.delete(calca.id).await,
        Err(ProductError::NotFound(_))
    ));

    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_listing_sorts() {
    let backend = Backend::start(&StorefrontConfig::default()).unwrap();
    let company = register(&backend, "Acme").await;

    for (name, quantity, day) in [("Bruno", 6, 3), ("ana", 24, 1), ("Carla", 12, 2)] {
        let line = SizeLine::new("U", dec!(10.00), quantity);
        let total = line.subtotal;
        let order = NewOrder::new(
            company.id,
            ContactDetails {
                name: name.to_string(),
                ..contact()
            },
            vec![LineItem {
                product_id: ProductId::new(),
                reference: "R".to_string(),
                name: "Item".to_string(),
                size_breakdown: vec![line],
            }],
            total,
            None,
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )
        .unwrap();
        backend.orders.insert_order(&order).await.unwrap();
    }

    let customers = |orders: Vec<storefront::model::Order>| -> Vec<String> {
        orders.into_iter().map(|o| o.contact.name).collect()
    };

    let newest_first = backend
        .orders
        .list_for_company(company.id, OrderSort::default())
        .await
        .unwrap();
    assert_eq!(customers(newest_first), vec!["Bruno", "Carla", "ana"]);

    let by_name = backend
        .orders
        .list_for_company(
            company.id,
            OrderSort {
                column: OrderSortColumn::CustomerName,
                direction: SortDirection::Asc,
            },
        )
        .await
        .unwrap();
    assert_eq!(customers(by_name), vec!["ana", "Bruno", "Carla"]);

    let by_total = backend
        .orders
        .list_for_company(
            company.id,
            OrderSort {
                column: OrderSortColumn::Total,
                direction: SortDirection::Desc,
            },
        )
        .await
        .unwrap();
    assert_eq!(by_total[0].total, dec!(240.00));

    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_representatives_and_referrals() {
    let backend = Backend::start(&StorefrontConfig::default()).unwrap();

    let mut profiles = Vec::new();
    for email in ["maria@example.com", "maria.s@example.com"] {
        let profile = backend
            .profiles
            .create(NewProfile {
                id: UserId::new(),
                first_name: "Maria".to_string(),
                last_name: "Silva".to_string(),
                email: email.to_string(),
                phone: "(11) 3456-7890".to_string(),
                representative_id: None,
            })
            .await
            .expect("Failed to create profile");
        profiles.push(profile);
    }
    assert_eq!(profiles[0].phone, "1134567890");

    let duplicate = backend
        .profiles
        .create(NewProfile {
            id: UserId::new(),
            first_name: "Outra".to_string(),
            last_name: String::new(),
            email: "MARIA@example.com".to_string(),
            phone: String::new(),
            representative_id: None,
        })
        .await;
    assert_eq!(
        duplicate,
        Err(ProfileError::EmailTaken("maria@example.com".to_string()))
    );

    let first = backend
        .representatives
        .enroll(&profiles[0], &backend.roles)
        .await
        .unwrap();
    let second = backend
        .representatives
        .enroll(&profiles[1], &backend.roles)
        .await
        .unwrap();
    assert_eq!(first.identifier, "maria-silva");
    assert_eq!(second.identifier, "maria-silva-2");
    assert_eq!(
        backend.roles.roles_for(profiles[0].id).await.unwrap(),
        vec![Role::Representative]
    );
    assert_eq!(
        backend
            .representatives
            .enroll(&profiles[0], &backend.roles)
            .await,
        Err(RepresentativeError::AlreadyRepresentative(profiles[0].id))
    );

    assert_eq!(
        backend
            .representatives
            .update_identifier(second.id, "maria-silva")
            .await,
        Err(RepresentativeError::IdentifierTaken("maria-silva".to_string()))
    );
    let with_key = backend
        .representatives
        .update_pix_key(first.id, Some(" maria@example.com ".to_string()))
        .await
        .unwrap();
    assert_eq!(with_key.pix_key.as_deref(), Some("maria@example.com"));
    let cleared = backend
        .representatives
        .update_pix_key(first.id, Some("  ".to_string()))
        .await
        .unwrap();
    assert_eq!(cleared.pix_key, None);

    let found = backend
        .representatives
        .by_identifier("maria-silva")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.profile_id, profiles[0].id);

    // A company referred by the first representative, owned by the second profile
    let company = backend
        .companies
        .register(NewCompany {
            name: "Loja da Maria".to_string(),
            owner_id: profiles[1].id,
            representative_id: Some(first.id),
            logo_url: None,
        })
        .await
        .unwrap();
    let referred = backend
        .representatives
        .referred_companies(first.id, &backend.companies, &backend.profiles)
        .await
        .unwrap();
    assert_eq!(referred.len(), 1);
    assert_eq!(referred[0].company.id, company.id);
    assert_eq!(
        referred[0].owner.as_ref().map(|p| p.email.as_str()),
        Some("maria.s@example.com")
    );

    backend.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_auth_sessions_carry_roles() {
    let backend = Backend::start(&StorefrontConfig::default()).unwrap();
    let auth = InMemoryAuth::new(backend.roles.clone());

    assert_eq!(
        auth.sign_up("dono@example.com", "123").await,
        Err(AuthError::WeakPassword(6))
    );
    let owner = auth.sign_up("Dono@Example.com", "segredo1").await.unwrap();
    assert!(matches!(
        auth.sign_up("dono@example.com", "segredo2").await,
        Err(AuthError::EmailTaken(_))
    ));

    let grant = backend.roles.grant(owner, Role::Owner).await.unwrap();
    let again = backend.roles.grant(owner, Role::Owner).await.unwrap();
    assert_eq!(grant.id, again.id);

    assert_eq!(
        auth.login("dono@example.com", "errado").await,
        Err(AuthError::InvalidCredentials)
    );
    let session = auth.login("dono@example.com", "segredo1").await.unwrap();
    assert_eq!(session.user_id, owner);
    assert!(session.is_admin());
    assert!(session.require_admin().is_ok());
    assert!(!session.can_manage_users());

    let resolved = auth.current_user(&session.token).await.unwrap();
    assert_eq!(resolved.user_id, owner);

    let token = session.token.clone();
    auth.logout(session).await.unwrap();
    assert_eq!(auth.current_user(&token).await, Err(AuthError::UnknownSession));
    assert_eq!(auth.active_sessions().await, 0);

    // Revoked roles are gone at the next login
    backend.roles.revoke(owner, Role::Owner).await.unwrap();
    let session = auth.login("dono@example.com", "segredo1").await.unwrap();
    assert_eq!(session.require_admin(), Err(AuthError::Forbidden));

    drop(auth);
    backend.shutdown().await.unwrap();
}
