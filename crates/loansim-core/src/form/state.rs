use serde::{Deserialize, Serialize};

use crate::types::{Bounds, FormFieldValue, Money};

/// The whole form as a plain value object. A numeric input and its paired
/// range slider are projections of a single field here, so the pair-equality
/// invariant holds by construction.
///
/// Invariant after every mutation: `collateral_value` sits inside
/// `collateral_bounds`, and `loan_amount` inside
/// `[loan_bounds.min, min(loan_bounds.max, 0.8 × collateral_value)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub collateral_id: String,
    pub collateral_value: Money,
    pub collateral_bounds: Bounds,
    pub loan_amount: Money,
    pub loan_bounds: Bounds,
    pub installments: u32,
    pub installment_options: Vec<u32>,
}

impl FormState {
    /// Extract the current values in the reference field order. Each
    /// value/range pair emits the same numeric string for both members.
    pub fn to_field_values(&self) -> Vec<FormFieldValue> {
        let collateral_value = self.collateral_value.normalize().to_string();
        let loan_amount = self.loan_amount.normalize().to_string();
        vec![
            FormFieldValue::new("installments", self.installments.to_string()),
            FormFieldValue::new("collateral", self.collateral_id.clone()),
            FormFieldValue::new("collateral-value", collateral_value.clone()),
            FormFieldValue::new("collateral-value-range", collateral_value),
            FormFieldValue::new("loan-amount", loan_amount.clone()),
            FormFieldValue::new("loan-amount-range", loan_amount),
        ]
    }
}
