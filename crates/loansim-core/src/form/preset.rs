use crate::catalog::{CollateralCatalog, CollateralProfile};
use crate::error::LoanSimError;
use crate::types::Bounds;
use crate::LoanSimResult;

use super::state::FormState;

/// Full reset from a collateral profile: bounds, defaults and installment
/// options all come from the catalog, and every prior user edit is
/// discarded. Runs at startup with the catalog's first entry and again on
/// each collateral-type change.
pub fn apply_preset(catalog: &CollateralCatalog, id: &str) -> LoanSimResult<FormState> {
    from_profile(catalog.get(id)?)
}

pub fn from_profile(profile: &CollateralProfile) -> LoanSimResult<FormState> {
    let installments = *profile
        .installment_options
        .first()
        .ok_or_else(|| LoanSimError::InvalidInput {
            field: format!("catalog.{}", profile.id),
            reason: "installment options must not be empty".into(),
        })?;

    Ok(FormState {
        collateral_id: profile.id.clone(),
        collateral_value: profile.min_collateral,
        collateral_bounds: Bounds::new(profile.min_collateral, profile.max_collateral),
        loan_amount: profile.min_loan_amount,
        loan_bounds: Bounds::new(profile.min_loan_amount, profile.max_loan_amount),
        installments,
        installment_options: profile.installment_options.clone(),
    })
}
