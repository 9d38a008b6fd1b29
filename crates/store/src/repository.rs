use crate::StoreError;
use chrono::{DateTime, Utc};
use core_types::Property;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use uuid::Uuid;

/// The `PropertyRepository` provides a high-level, application-specific
/// interface to the property store. It encapsulates all SQL queries and
/// row-mapping logic.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: SqlitePool,
}

impl PropertyRepository {
    /// Creates a new `PropertyRepository` with a shared connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Saves a new property record.
    pub async fn insert_property(&self, property: &Property) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO properties (
                id, address, image_urls, description, created_at,
                price, down_payment_percent, interest_rate, loan_term_years,
                nightly_rate, occupancy_rate,
                property_tax, insurance, management_fee_percent, snow_removal,
                hot_tub_maintenance, utilities, maintenance, hoa, other_expenses
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(property.id.to_string())
        .bind(&property.address)
        .bind(serde_json::to_string(&property.image_urls)?)
        .bind(property.description.as_deref())
        .bind(property.created_at)
        .bind(property.price.to_string())
        .bind(property.down_payment_percent.to_string())
        .bind(property.interest_rate.to_string())
        .bind(i64::from(property.loan_term_years))
        .bind(property.nightly_rate.to_string())
        .bind(property.occupancy_rate.to_string())
        .bind(property.property_tax.to_string())
        .bind(property.insurance.to_string())
        .bind(property.management_fee_percent.to_string())
        .bind(property.snow_removal.to_string())
        .bind(property.hot_tub_maintenance.to_string())
        .bind(property.utilities.to_string())
        .bind(property.maintenance.to_string())
        .bind(property.hoa.to_string())
        .bind(property.other_expenses.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetches the full property list, newest first.
    pub async fn get_all_properties(&self) -> Result<Vec<Property>, StoreError> {
        let rows = sqlx::query("SELECT * FROM properties ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(property_from_row).collect()
    }

    /// Fetches a single property by id.
    pub async fn get_property(&self, id: Uuid) -> Result<Property, StoreError> {
        let row = sqlx::query("SELECT * FROM properties WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)?;

        property_from_row(&row)
    }

    /// Replaces a stored property record wholesale.
    pub async fn update_property(&self, property: &Property) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE properties SET
                address = ?, image_urls = ?, description = ?,
                price = ?, down_payment_percent = ?, interest_rate = ?, loan_term_years = ?,
                nightly_rate = ?, occupancy_rate = ?,
                property_tax = ?, insurance = ?, management_fee_percent = ?, snow_removal = ?,
                hot_tub_maintenance = ?, utilities = ?, maintenance = ?, hoa = ?, other_expenses = ?
            WHERE id = ?
            "#,
        )
        .bind(&property.address)
        .bind(serde_json::to_string(&property.image_urls)?)
        .bind(property.description.as_deref())
        .bind(property.price.to_string())
        .bind(property.down_payment_percent.to_string())
        .bind(property.interest_rate.to_string())
        .bind(i64::from(property.loan_term_years))
        .bind(property.nightly_rate.to_string())
        .bind(property.occupancy_rate.to_string())
        .bind(property.property_tax.to_string())
        .bind(property.insurance.to_string())
        .bind(property.management_fee_percent.to_string())
        .bind(property.snow_removal.to_string())
        .bind(property.hot_tub_maintenance.to_string())
        .bind(property.utilities.to_string())
        .bind(property.maintenance.to_string())
        .bind(property.hoa.to_string())
        .bind(property.other_expenses.to_string())
        .bind(property.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Deletes a property record.
    pub async fn delete_property(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Maps one `properties` row back into a `Property`.
///
/// Money columns are canonical decimal text (SQLite has no decimal type);
/// a row that fails to parse surfaces as `Corrupt` rather than a panic.
fn property_from_row(row: &SqliteRow) -> Result<Property, StoreError> {
    let id: String = row.get("id");
    let image_urls: String = row.get("image_urls");
    let loan_term_years: i64 = row.get("loan_term_years");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(Property {
        id: Uuid::parse_str(&id)
            .map_err(|e| StoreError::Corrupt(format!("column id: {e}")))?,
        address: row.get("address"),
        image_urls: serde_json::from_str(&image_urls)?,
        description: row.get("description"),
        created_at,
        price: decimal_column(row, "price")?,
        down_payment_percent: decimal_column(row, "down_payment_percent")?,
        interest_rate: decimal_column(row, "interest_rate")?,
        loan_term_years: u32::try_from(loan_term_years)
            .map_err(|e| StoreError::Corrupt(format!("column loan_term_years: {e}")))?,
        nightly_rate: decimal_column(row, "nightly_rate")?,
        occupancy_rate: decimal_column(row, "occupancy_rate")?,
        property_tax: decimal_column(row, "property_tax")?,
        insurance: decimal_column(row, "insurance")?,
        management_fee_percent: decimal_column(row, "management_fee_percent")?,
        snow_removal: decimal_column(row, "snow_removal")?,
        hot_tub_maintenance: decimal_column(row, "hot_tub_maintenance")?,
        utilities: decimal_column(row, "utilities")?,
        maintenance: decimal_column(row, "maintenance")?,
        hoa: decimal_column(row, "hoa")?,
        other_expenses: decimal_column(row, "other_expenses")?,
    })
}

fn decimal_column(row: &SqliteRow, column: &'static str) -> Result<Decimal, StoreError> {
    let raw: String = row.get(column);
    Decimal::from_str(&raw).map_err(|e| StoreError::Corrupt(format!("column {column}: {e}")))
}
