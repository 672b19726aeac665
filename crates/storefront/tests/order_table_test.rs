use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal_macros::dec;
use storefront::clients::{CompanyClient, ProductClient};
use storefront::company_table::CompanyRow;
use storefront::model::{
    CompanyId, ContactDetails, LineItem, NewOrder, NewProduct, ProductId, SizeLine, SizeOption,
    UserId,
};
use storefront::order_table::OrderError;
use storefront::product_table::ProductError;
use table_actor::mock::MockTable;

fn company_row(id: CompanyId) -> CompanyRow {
    CompanyRow {
        id,
        name: "Acme".to_string(),
        short_name: "acme".to_string(),
        owner_id: UserId::new(),
        active: true,
        logo_url: None,
        display_mode: "full".to_string(),
        quantity_selection_mode: "radio".to_string(),
        representative_id: None,
        created_at: Utc::now(),
    }
}

fn new_order(company_id: CompanyId) -> NewOrder {
    let items = vec![LineItem {
        product_id: ProductId::new(),
        reference: "P1".to_string(),
        name: "Camiseta".to_string(),
        size_breakdown: vec![
            SizeLine::new("M", dec!(5.00), 6),
            SizeLine::new("G", dec!(6.00), 12),
        ],
    }];
    NewOrder::new(
        company_id,
        ContactDetails {
            name: "Ana".to_string(),
            phone: "11987654321".to_string(),
            city: "Campinas".to_string(),
            zip_code: "13010-000".to_string(),
        },
        items,
        dec!(102.00),
        None,
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
    )
    .unwrap()
}

/// Real orders actor with a mocked companies table.
/// The order row checks its company through the injected client on insert.
#[tokio::test]
async fn test_order_table_checks_company() {
    let company_id = CompanyId::new();
    let mut companies = MockTable::<CompanyRow>::new();
    companies.expect_get(company_id).return_ok(None);
    companies
        .expect_get(company_id)
        .return_ok(Some(company_row(company_id)));

    let (order_actor, orders) = storefront::order_table::new(8);
    let handle = tokio::spawn(order_actor.run(CompanyClient::new(companies.client())));

    let order = new_order(company_id);
    assert_eq!(
        orders.insert_order(&order).await,
        Err(OrderError::UnknownCompany(company_id))
    );

    let order_id = orders.insert_order(&order).await.expect("Insert failed");
    let stored = orders
        .find(order_id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(stored.items, order.items);
    assert_eq!(stored.total, dec!(102.00));
    assert_eq!(stored.date, order.date);
    assert_eq!(stored.time, order.time);

    companies.verify();
    drop(orders);
    handle.await.unwrap();
}

/// Same check on the products table; a store failure in the lookup surfaces as a store error.
#[tokio::test]
async fn test_product_table_with_failing_company_lookup() {
    let company_id = CompanyId::new();
    let mut companies = MockTable::<CompanyRow>::new();
    companies
        .expect_get(company_id)
        .return_err(table_actor::StoreError::ActorClosed);

    let (product_actor, products): (_, ProductClient) = storefront::product_table::new(8);
    let handle = tokio::spawn(product_actor.run(CompanyClient::new(companies.client())));

    let result = products
        .create(NewProduct {
            company_id,
            reference: "R1".to_string(),
            name: "Camiseta".to_string(),
            image_url: None,
            sizes: vec![SizeOption::new("M", dec!(5.00))],
            quantity_tiers: vec![6],
            active: true,
            is_new: false,
            out_of_stock: false,
        })
        .await;
    assert!(matches!(result, Err(ProductError::Store(_))));

    companies.verify();
    drop(products);
    handle.await.unwrap();
}
