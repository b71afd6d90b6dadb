use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::CollateralCatalog;
use crate::currency::format_currency;
use crate::error::LoanSimError;
use crate::payment;
use crate::report;
use crate::types::{FormFieldValue, PaymentQuote};
use crate::LoanSimResult;

use super::{preset, state::FormState, sync};

/// One discrete user action. A numeric input and its paired slider map to
/// distinct events but run the same update, so when both fire in the same
/// tick the last writer wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum FormEvent {
    CollateralValue { raw: String },
    CollateralValueSlider { raw: String },
    LoanAmount { raw: String },
    LoanAmountSlider { raw: String },
    Installments { raw: String },
    CollateralType { id: String },
}

/// Display strings for the three result fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDisplay {
    /// Monthly payment, with currency symbol.
    pub quota: String,
    pub total: String,
    pub rate: String,
}

/// Drives the form. Every event is applied synchronously and followed by a
/// full recomputation of the payment quote, so the orchestrator is always
/// observable in the Idle state with a quote that matches the current field
/// values.
#[derive(Debug, Clone)]
pub struct FormOrchestrator {
    catalog: CollateralCatalog,
    state: FormState,
    quote: PaymentQuote,
}

impl FormOrchestrator {
    /// Start on the catalog's first profile with the initial quote computed.
    pub fn new(catalog: CollateralCatalog) -> LoanSimResult<Self> {
        let state = preset::from_profile(catalog.first())?;
        let quote = payment::calculate_from_fields(&state.to_field_values())?;
        Ok(Self {
            catalog,
            state,
            quote,
        })
    }

    pub fn handle(&mut self, event: FormEvent) -> LoanSimResult<&PaymentQuote> {
        match event {
            FormEvent::CollateralValue { raw } | FormEvent::CollateralValueSlider { raw } => {
                sync::set_collateral_value(&mut self.state, &raw)?;
            }
            FormEvent::LoanAmount { raw } | FormEvent::LoanAmountSlider { raw } => {
                sync::set_loan_amount(&mut self.state, &raw)?;
            }
            FormEvent::Installments { raw } => {
                sync::set_installments(&mut self.state, &raw)?;
            }
            FormEvent::CollateralType { id } => {
                self.state = preset::apply_preset(&self.catalog, &id)?;
            }
        }
        self.quote = payment::calculate_from_fields(&self.state.to_field_values())?;
        Ok(&self.quote)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn quote(&self) -> &PaymentQuote {
        &self.quote
    }

    pub fn display(&self) -> QuoteDisplay {
        QuoteDisplay {
            quota: format_currency(self.quote.monthly_payment, true),
            total: format_currency(self.quote.total_payable, true),
            rate: format!("{} %", self.quote.monthly_interest_rate.normalize()),
        }
    }

    /// Serialize the current form for submission: every field value plus the
    /// displayed total. Returns the report text; presentation is up to the
    /// caller.
    pub fn submit(&self) -> LoanSimResult<String> {
        if self.state.installments == 0 {
            return Err(LoanSimError::InvalidInput {
                field: "installments".into(),
                reason: "an installment term must be selected".into(),
            });
        }
        if self.state.loan_amount <= Decimal::ZERO {
            return Err(LoanSimError::InvalidInput {
                field: "loan-amount".into(),
                reason: "must be a positive amount".into(),
            });
        }

        let mut values = self.state.to_field_values();
        values.push(FormFieldValue::new(
            "TOTAL",
            format_currency(self.quote.total_payable, true),
        ));
        Ok(report::to_string_form_values(&values))
    }
}
