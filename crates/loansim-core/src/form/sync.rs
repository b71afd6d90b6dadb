use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::LoanSimError;
use crate::types::Money;
use crate::LoanSimResult;

use super::state::FormState;

/// The loan amount may never exceed this share of the collateral value.
pub const LTV_CEILING_RATIO: Decimal = dec!(0.8);

/// The ceiling the loan amount is allowed to reach right now. Derived from
/// the current collateral value at call time, never cached.
pub fn loan_ceiling(state: &FormState) -> Money {
    (state.collateral_value * LTV_CEILING_RATIO).min(state.loan_bounds.max)
}

/// Clamp and store a new collateral value, then enforce the cross-pair
/// dependency: a shrunken collateral drags the loan amount down to exactly
/// its new 80% ceiling. The dependency only runs in this direction; loan
/// amount changes never touch the collateral value.
pub fn set_collateral_value(state: &mut FormState, raw: &str) -> LoanSimResult<Money> {
    let value = state.collateral_bounds.clamp(coerce("collateral-value", raw)?);
    state.collateral_value = value;

    let ceiling = value * LTV_CEILING_RATIO;
    if state.loan_amount > ceiling {
        state.loan_amount = ceiling;
    }
    Ok(value)
}

/// Clamp and store a new loan amount against the current ceiling.
pub fn set_loan_amount(state: &mut FormState, raw: &str) -> LoanSimResult<Money> {
    let requested = coerce("loan-amount", raw)?;
    let value = requested.max(state.loan_bounds.min).min(loan_ceiling(state));
    state.loan_amount = value;
    Ok(value)
}

/// Select an installment term. Only terms offered by the active profile are
/// accepted.
pub fn set_installments(state: &mut FormState, raw: &str) -> LoanSimResult<u32> {
    let n: u32 = raw.trim().parse().map_err(|_| LoanSimError::NonNumeric {
        field: "installments".into(),
        raw: raw.to_string(),
    })?;
    if !state.installment_options.contains(&n) {
        return Err(LoanSimError::InvalidInput {
            field: "installments".into(),
            reason: format!("{n} is not offered for collateral '{}'", state.collateral_id),
        });
    }
    state.installments = n;
    Ok(n)
}

/// Raw inputs arrive as strings; comparison and clamping always happen on
/// numbers, never on the raw text.
fn coerce(field: &str, raw: &str) -> LoanSimResult<Money> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| LoanSimError::NonNumeric {
            field: field.to_string(),
            raw: raw.to_string(),
        })
}
