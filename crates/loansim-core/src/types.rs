use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// One extracted form field, in extraction order. Values are the raw strings
/// the inputs hold; coercion to numbers is always explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldValue {
    pub field: String,
    pub value: String,
}

impl FormFieldValue {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result of one payment recalculation. Computed fresh on every trigger,
/// never cached; rounding happens only at the formatting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub total_payable: Money,
    pub monthly_payment: Money,
    /// Effective monthly interest rate, already expressed in percent.
    pub monthly_interest_rate: Decimal,
}

/// Inclusive numeric bounds for one input pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Money,
    pub max: Money,
}

impl Bounds {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: Money) -> Money {
        value.max(self.min).min(self.max)
    }
}
