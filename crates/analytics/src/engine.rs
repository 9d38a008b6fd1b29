use crate::report::CalculationResult;
use core_types::Property;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Flat closing-cost assumption applied to the purchase price (3%).
/// This is a deliberate heuristic, not a configurable knob.
const CLOSING_COST_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// A stateless calculator for deriving investment metrics from a property's
/// purchase, financing, and rental assumptions.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating investment metrics.
    ///
    /// # Arguments
    ///
    /// * `property` - The property record holding the investor's assumptions.
    ///
    /// # Returns
    ///
    /// A fully populated `CalculationResult`. The call is deterministic and
    /// never fails: metrics that are undefined for the given input (e.g. the
    /// mortgage payment of a zero-year loan, or the cap rate of a zero-price
    /// deal) are `None` in the result rather than an error.
    pub fn calculate(&self, property: &Property) -> CalculationResult {
        let mut result = CalculationResult::new();

        let down_payment = self.calculate_financing(property, &mut result);
        self.calculate_operations(property, &mut result);
        self.calculate_profitability(property, down_payment, &mut result);

        result
    }

    /// Calculates the mortgage payment. Returns the down payment, which the
    /// profitability step needs for the total-investment figure.
    fn calculate_financing(
        &self,
        property: &Property,
        result: &mut CalculationResult,
    ) -> Decimal {
        let hundred = Decimal::from(100);

        let down_payment = property.price * property.down_payment_percent / hundred;
        let loan_amount = property.price - down_payment;
        let monthly_rate = property.interest_rate / hundred / Decimal::from(12);
        let number_of_payments = u64::from(property.loan_term_years) * 12;

        result.monthly_mortgage = if number_of_payments == 0 {
            // A zero-year term has no amortization schedule.
            None
        } else if monthly_rate > Decimal::ZERO {
            annuity_payment(loan_amount, monthly_rate, number_of_payments)
        } else {
            // Zero-interest loans amortize straight-line. This branch is not
            // an optimization: the annuity formula has a removable
            // singularity at rate 0.
            Some(loan_amount / Decimal::from(number_of_payments))
        };

        down_payment
    }

    /// Calculates gross monthly income and monthly operating expenses.
    fn calculate_operations(&self, property: &Property, result: &mut CalculationResult) {
        let hundred = Decimal::from(100);
        let twelve = Decimal::from(12);

        // Expected annual revenue at the given occupancy, spread evenly
        // across twelve months. Occupancy is a long-run average rate, not a
        // monthly calendar; no seasonality is modeled.
        result.monthly_income = property.nightly_rate
            * Decimal::from(365)
            * (property.occupancy_rate / hundred)
            / twelve;

        // The management fee is levied on gross revenue, not profit.
        let management_fee = result.monthly_income * property.management_fee_percent / hundred;

        // Tax and insurance are quoted annually; every other cost term is
        // already monthly. Normalize to monthly before summing.
        let monthly_tax = property.property_tax / twelve;
        let monthly_insurance = property.insurance / twelve;

        // Operating costs only: debt service is netted in cash_flow, never here.
        result.monthly_expenses = management_fee
            + monthly_tax
            + monthly_insurance
            + property.snow_removal
            + property.hot_tub_maintenance
            + property.utilities
            + property.maintenance
            + property.hoa
            + property.other_expenses;
    }

    /// Calculates cash flow, cash-on-cash return, and cap rate.
    fn calculate_profitability(
        &self,
        property: &Property,
        down_payment: Decimal,
        result: &mut CalculationResult,
    ) {
        let hundred = Decimal::from(100);
        let twelve = Decimal::from(12);
        let operating_margin = result.monthly_income - result.monthly_expenses;

        result.cash_flow = result
            .monthly_mortgage
            .map(|mortgage| operating_margin - mortgage);

        let closing_costs = property.price * CLOSING_COST_RATE;
        let total_investment = down_payment + closing_costs;
        result.total_investment = total_investment;

        result.cash_on_cash_return = result.cash_flow.map(|cash_flow| {
            if total_investment > Decimal::ZERO {
                cash_flow * twelve / total_investment * hundred
            } else {
                // Nothing invested means the ratio has no denominator;
                // report 0 rather than an undefined value.
                Decimal::ZERO
            }
        });

        // NOI excludes debt service by definition.
        let annual_noi = operating_margin * twelve;
        result.cap_rate = if property.price > Decimal::ZERO {
            Some(annual_noi / property.price * hundred)
        } else {
            None
        };
    }
}

/// Payment for a fixed-rate loan: `L * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// The growth factor is computed with a checked power; a rate/term pair large
/// enough to overflow `Decimal` leaves the payment undefined instead of
/// panicking.
fn annuity_payment(loan_amount: Decimal, monthly_rate: Decimal, payments: u64) -> Option<Decimal> {
    let growth = (Decimal::ONE + monthly_rate).checked_powu(payments)?;
    let numerator = loan_amount.checked_mul(monthly_rate)?.checked_mul(growth)?;
    Some(numerator / (growth - Decimal::ONE))
}
