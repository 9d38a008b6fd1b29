use chrono::{Duration, Utc};
use core_types::Property;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::sqlite::SqlitePoolOptions;
use store::{run_migrations, PropertyRepository, StoreError};
use uuid::Uuid;

/// Every pooled connection would get its own `:memory:` database, so the
/// test pool is pinned to a single connection.
async fn memory_repository() -> PropertyRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    run_migrations(&pool).await.expect("migrations");
    PropertyRepository::new(pool)
}

fn cabin(address: &str) -> Property {
    Property {
        id: Uuid::new_v4(),
        address: address.to_string(),
        image_urls: vec!["https://example.com/front.jpg".to_string()],
        description: None,
        created_at: Utc::now(),
        price: dec!(450000),
        down_payment_percent: dec!(20),
        interest_rate: dec!(6.8),
        loan_term_years: 30,
        nightly_rate: dec!(200),
        occupancy_rate: dec!(60),
        property_tax: dec!(5000),
        insurance: dec!(1500),
        management_fee_percent: dec!(25),
        snow_removal: dec!(100),
        hot_tub_maintenance: Decimal::ZERO,
        utilities: dec!(250),
        maintenance: dec!(150),
        hoa: Decimal::ZERO,
        other_expenses: dec!(50),
    }
}

#[tokio::test]
async fn insert_then_get_round_trips_exactly() {
    let repository = memory_repository().await;
    let property = cabin("12 Alpine Way");

    repository.insert_property(&property).await.unwrap();
    let stored = repository.get_property(property.id).await.unwrap();

    // Decimal columns go through text, so the figures must survive unchanged.
    assert_eq!(stored.price, property.price);
    assert_eq!(stored.interest_rate, property.interest_rate);
    assert_eq!(stored.image_urls, property.image_urls);
    assert_eq!(stored.id, property.id);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let repository = memory_repository().await;

    let mut older = cabin("1 Old Mill Rd");
    older.created_at = Utc::now() - Duration::hours(2);
    let newer = cabin("2 New Summit Ct");

    repository.insert_property(&older).await.unwrap();
    repository.insert_property(&newer).await.unwrap();

    let all = repository.get_all_properties().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].address, "2 New Summit Ct");
    assert_eq!(all[1].address, "1 Old Mill Rd");
}

#[tokio::test]
async fn update_replaces_the_record() {
    let repository = memory_repository().await;
    let mut property = cabin("12 Alpine Way");
    repository.insert_property(&property).await.unwrap();

    property.nightly_rate = dec!(225);
    property.description = Some("Slope-side A-frame with a wood stove.".to_string());
    repository.update_property(&property).await.unwrap();

    let stored = repository.get_property(property.id).await.unwrap();
    assert_eq!(stored.nightly_rate, dec!(225));
    assert_eq!(
        stored.description.as_deref(),
        Some("Slope-side A-frame with a wood stove.")
    );
}

#[tokio::test]
async fn delete_removes_the_record() {
    let repository = memory_repository().await;
    let property = cabin("12 Alpine Way");
    repository.insert_property(&property).await.unwrap();

    repository.delete_property(property.id).await.unwrap();

    assert!(matches!(
        repository.get_property(property.id).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn missing_rows_map_to_not_found() {
    let repository = memory_repository().await;

    assert!(matches!(
        repository.get_property(Uuid::new_v4()).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        repository.delete_property(Uuid::new_v4()).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        repository.update_property(&cabin("9 Nowhere Ln")).await,
        Err(StoreError::NotFound)
    ));
}
