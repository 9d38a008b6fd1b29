use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived investment metrics for a single property.
///
/// This struct is the final output of the `MetricsEngine` and serves as the
/// data transfer object for analysis results throughout the entire system.
/// It is a value object: recomputed from a `Property` on every read, never
/// stored, never mutated after construction.
///
/// `monthly_expenses` covers operating costs only. The mortgage payment is
/// netted exclusively inside `cash_flow`, so for any input where the
/// mortgage is defined: `cash_flow + monthly_mortgage + monthly_expenses ==
/// monthly_income`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    // I. Financing
    pub monthly_mortgage: Option<Decimal>, // Option<> because a 0-year term has no amortization schedule
    pub total_investment: Decimal,

    // II. Operations
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,

    // III. Profitability
    pub cash_flow: Option<Decimal>, // Option<> whenever the mortgage is undefined
    pub cash_on_cash_return: Option<Decimal>, // percent; Some(0) when total_investment <= 0
    pub cap_rate: Option<Decimal>, // percent; Option<> because price can be 0
}

impl CalculationResult {
    /// Creates a new, zeroed-out CalculationResult.
    /// This is useful as a default or starting point before calculations.
    pub fn new() -> Self {
        Self {
            monthly_mortgage: None,
            total_investment: Decimal::ZERO,
            monthly_income: Decimal::ZERO,
            monthly_expenses: Decimal::ZERO,
            cash_flow: None,
            cash_on_cash_return: None,
            cap_rate: None,
        }
    }
}

impl Default for CalculationResult {
    fn default() -> Self {
        Self::new()
    }
}
