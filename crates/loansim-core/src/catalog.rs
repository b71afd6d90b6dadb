use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanSimError;
use crate::types::Money;
use crate::LoanSimResult;

/// Static description of one collateral type: the loan and collateral value
/// ranges plus the installment terms offered for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollateralProfile {
    pub id: String,
    pub name: String,
    pub min_loan_amount: Money,
    pub max_loan_amount: Money,
    pub installment_options: Vec<u32>,
    pub min_collateral: Money,
    pub max_collateral: Money,
}

/// Ordered, immutable set of collateral profiles. Passed explicitly into the
/// orchestrator; there is no process-wide catalog. Deserialization runs the
/// same validation as [`CollateralCatalog::new`], so every catalog in
/// circulation is non-empty with well-formed profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogRepr")]
pub struct CollateralCatalog {
    profiles: Vec<CollateralProfile>,
}

#[derive(Deserialize)]
struct CatalogRepr {
    profiles: Vec<CollateralProfile>,
}

impl TryFrom<CatalogRepr> for CollateralCatalog {
    type Error = LoanSimError;

    fn try_from(repr: CatalogRepr) -> LoanSimResult<Self> {
        Self::new(repr.profiles)
    }
}

impl CollateralCatalog {
    pub fn new(profiles: Vec<CollateralProfile>) -> LoanSimResult<Self> {
        if profiles.is_empty() {
            return Err(LoanSimError::InvalidInput {
                field: "catalog".into(),
                reason: "at least one collateral profile is required".into(),
            });
        }
        for profile in &profiles {
            validate_profile(profile)?;
        }
        Ok(Self { profiles })
    }

    /// The two reference profiles the simulator ships with.
    pub fn standard() -> Self {
        Self {
            profiles: vec![
                CollateralProfile {
                    id: "vehicle".into(),
                    name: "Vehicle".into(),
                    min_loan_amount: dec!(3000),
                    max_loan_amount: dec!(1000000),
                    installment_options: vec![24, 36, 48],
                    min_collateral: dec!(5000),
                    max_collateral: dec!(3000000),
                },
                CollateralProfile {
                    id: "home".into(),
                    name: "Home".into(),
                    min_loan_amount: dec!(30000),
                    max_loan_amount: dec!(4500000),
                    installment_options: vec![120, 180, 240],
                    min_collateral: dec!(50000),
                    max_collateral: dec!(100000000),
                },
            ],
        }
    }

    pub fn get(&self, id: &str) -> LoanSimResult<&CollateralProfile> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| LoanSimError::UnknownCollateral(id.to_string()))
    }

    /// The startup default: the first profile in catalog order.
    pub fn first(&self) -> &CollateralProfile {
        &self.profiles[0]
    }

    pub fn profiles(&self) -> &[CollateralProfile] {
        &self.profiles
    }
}

fn validate_profile(profile: &CollateralProfile) -> LoanSimResult<()> {
    let invalid = |reason: &str| LoanSimError::InvalidInput {
        field: format!("catalog.{}", profile.id),
        reason: reason.into(),
    };

    if profile.installment_options.is_empty() {
        return Err(invalid("installment options must not be empty"));
    }
    if profile.installment_options.iter().any(|&n| n == 0) {
        return Err(invalid("installment options must be positive"));
    }
    if profile.min_loan_amount <= Decimal::ZERO || profile.min_collateral <= Decimal::ZERO {
        return Err(invalid("minimum amounts must be positive"));
    }
    if profile.min_loan_amount > profile.max_loan_amount {
        return Err(invalid("loan amount range is inverted"));
    }
    if profile.min_collateral > profile.max_collateral {
        return Err(invalid("collateral value range is inverted"));
    }
    Ok(())
}
