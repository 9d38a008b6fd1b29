use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A short-term-rental property together with the investor's assumptions.
///
/// This struct is the single input to the metrics engine and the record
/// persisted in the property store. It is serialized as camelCase JSON for
/// the browser UI, so field names on the wire match the frontend's schema.
///
/// Annual figures (`property_tax`, `insurance`) and monthly figures (every
/// other recurring cost) are deliberately mixed here because that is how the
/// numbers are quoted in the real world; normalizing them to a common unit
/// is the engine's job, not the record's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier for the record. Generated when the client omits it.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Street address, used for display and as the subject of AI-generated copy.
    pub address: String,
    /// Gallery image references (URLs or data URIs). Never read by the engine.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// AI-generated marketing copy, saved back onto the record once produced.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    // --- Acquisition ---
    /// The purchase price.
    pub price: Decimal,
    /// Down payment as a percentage of the purchase price, expected in [0, 100].
    pub down_payment_percent: Decimal,
    /// Annual interest rate of the loan, as a percentage (e.g. 6.8).
    pub interest_rate: Decimal,
    /// Loan term in years. A term of zero leaves the amortization undefined.
    pub loan_term_years: u32,

    // --- Income ---
    /// Advertised nightly rate.
    pub nightly_rate: Decimal,
    /// Percentage of nights booked over a full year, expected in [0, 100].
    /// Treated as a long-run average; no seasonality is modeled.
    pub occupancy_rate: Decimal,

    // --- Recurring costs ---
    /// Property tax, quoted ANNUALLY.
    pub property_tax: Decimal,
    /// Insurance premium, quoted ANNUALLY.
    pub insurance: Decimal,
    /// Management fee as a percentage of gross monthly revenue (not profit).
    pub management_fee_percent: Decimal,
    /// Monthly snow removal cost.
    pub snow_removal: Decimal,
    /// Monthly hot tub servicing cost. Defaults to zero when absent, so the
    /// contract is visible in the type rather than handled ad hoc by callers.
    #[serde(default)]
    pub hot_tub_maintenance: Decimal,
    /// Monthly utilities.
    pub utilities: Decimal,
    /// Monthly maintenance reserve.
    pub maintenance: Decimal,
    /// Monthly HOA dues.
    pub hoa: Decimal,
    /// Any other monthly expenses.
    pub other_expenses: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing_json() -> &'static str {
        r#"{
            "address": "12 Alpine Way, Breckenridge, CO",
            "price": "450000",
            "downPaymentPercent": "20",
            "interestRate": "6.8",
            "loanTermYears": 30,
            "nightlyRate": "200",
            "occupancyRate": "60",
            "propertyTax": "5000",
            "insurance": "1500",
            "managementFeePercent": "25",
            "snowRemoval": "100",
            "utilities": "250",
            "maintenance": "150",
            "hoa": "0",
            "otherExpenses": "50"
        }"#
    }

    #[test]
    fn absent_hot_tub_maintenance_defaults_to_zero() {
        let property: Property = serde_json::from_str(listing_json()).unwrap();
        assert_eq!(property.hot_tub_maintenance, Decimal::ZERO);
    }

    #[test]
    fn absent_id_and_images_are_defaulted() {
        let a: Property = serde_json::from_str(listing_json()).unwrap();
        let b: Property = serde_json::from_str(listing_json()).unwrap();
        // Each deserialization without an id mints a fresh one.
        assert_ne!(a.id, b.id);
        assert!(a.image_urls.is_empty());
        assert_eq!(a.description, None);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let property: Property = serde_json::from_str(listing_json()).unwrap();
        assert_eq!(property.down_payment_percent, dec!(20));
        assert_eq!(property.loan_term_years, 30);

        let round_trip = serde_json::to_string(&property).unwrap();
        assert!(round_trip.contains("\"downPaymentPercent\""));
        assert!(round_trip.contains("\"hotTubMaintenance\""));
        assert!(round_trip.contains("\"nightlyRate\""));
        assert!(!round_trip.contains("\"nightly_rate\""));
    }
}
