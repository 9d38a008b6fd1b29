use analytics::MetricsEngine;
use chrono::Utc;
use core_types::Property;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Cent-precision amounts up to $10M.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Percentages in [0, 100] with two decimal places.
fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|bps| Decimal::new(bps, 2))
}

fn arb_property() -> impl Strategy<Value = Property> {
    (
        (money(), percent(), percent(), 1u32..=40u32),
        (money(), percent()),
        (money(), money(), percent()),
        (money(), money(), money(), money(), money(), money()),
    )
        .prop_map(
            |(
                (price, down_payment_percent, interest_rate, loan_term_years),
                (nightly_rate, occupancy_rate),
                (property_tax, insurance, management_fee_percent),
                (snow_removal, hot_tub_maintenance, utilities, maintenance, hoa, other_expenses),
            )| Property {
                id: Uuid::nil(),
                address: String::new(),
                image_urls: Vec::new(),
                description: None,
                created_at: Utc::now(),
                price,
                down_payment_percent,
                interest_rate,
                loan_term_years,
                nightly_rate,
                occupancy_rate,
                property_tax,
                insurance,
                management_fee_percent,
                snow_removal,
                hot_tub_maintenance,
                utilities,
                maintenance,
                hoa,
                other_expenses,
            },
        )
}

proptest! {
    /// For any fixed input, repeated calls yield identical results.
    #[test]
    fn calculation_is_deterministic(property in arb_property()) {
        let engine = MetricsEngine::new();
        prop_assert_eq!(engine.calculate(&property), engine.calculate(&property));
    }

    /// Adding the mortgage and operating expenses back onto the cash flow
    /// reconstructs gross income, up to the last digits of decimal rescaling.
    #[test]
    fn cash_flow_netting_identity(property in arb_property()) {
        let result = MetricsEngine::new().calculate(&property);
        let mortgage = result.monthly_mortgage.expect("a term of >= 1 year always amortizes");
        let cash_flow = result.cash_flow.expect("defined whenever the mortgage is");

        let reconstructed = cash_flow + mortgage + result.monthly_expenses;
        let diff = (reconstructed - result.monthly_income).abs();
        prop_assert!(diff < dec!(0.0000001), "residual {} too large", diff);
    }

    /// The engine never panics, and non-negative assumptions never produce
    /// negative income or expenses.
    #[test]
    fn calculation_is_total(property in arb_property()) {
        let result = MetricsEngine::new().calculate(&property);
        prop_assert!(result.monthly_income >= Decimal::ZERO);
        prop_assert!(result.monthly_expenses >= Decimal::ZERO);
    }
}
