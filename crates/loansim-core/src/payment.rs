use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanSimError;
use crate::types::{FormFieldValue, Money, PaymentQuote};
use crate::LoanSimResult;

/// Fixed transaction fee on the financed amount (6.38%).
pub const FEE_RATE: Decimal = dec!(0.0638);

/// Fixed interest component (2.34%).
pub const INTEREST_RATE: Decimal = dec!(0.0234);

const HUNDRED: Decimal = dec!(100);
const THOUSAND: Decimal = dec!(1000);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    /// Number of monthly installments.
    pub installments: u32,
    pub loan_amount: Money,
}

/// Simple-interest payment quote.
///
/// `total_payable = (fee + interest + installments/1000 + 1) × loan_amount`,
/// split evenly across the installments. No rounding is applied here; the
/// arithmetic is exact in `Decimal`.
pub fn calculate_payments(input: &PaymentInput) -> LoanSimResult<PaymentQuote> {
    if input.installments == 0 {
        return Err(LoanSimError::InvalidInput {
            field: "installments".into(),
            reason: "must be a positive number of months".into(),
        });
    }
    if input.loan_amount <= Decimal::ZERO {
        return Err(LoanSimError::InvalidInput {
            field: "loan-amount".into(),
            reason: "must be a positive amount".into(),
        });
    }

    let installments = Decimal::from(input.installments);
    let installment_factor = installments / THOUSAND;

    let total_payable =
        (FEE_RATE + INTEREST_RATE + installment_factor + Decimal::ONE) * input.loan_amount;
    let monthly_payment = total_payable / installments;
    let monthly_interest_rate = total_payable * HUNDRED / input.loan_amount;

    Ok(PaymentQuote {
        total_payable,
        monthly_payment,
        monthly_interest_rate,
    })
}

/// Compute a quote from extracted form values. Looks up the `installments`
/// and `loan-amount` fields by name and coerces their raw strings.
pub fn calculate_from_fields(values: &[FormFieldValue]) -> LoanSimResult<PaymentQuote> {
    let installments = lookup(values, "installments")?;
    let loan_amount = lookup(values, "loan-amount")?;

    let installments: u32 =
        installments
            .trim()
            .parse()
            .map_err(|_| LoanSimError::NonNumeric {
                field: "installments".into(),
                raw: installments.to_string(),
            })?;
    let loan_amount: Money =
        loan_amount
            .trim()
            .parse()
            .map_err(|_| LoanSimError::NonNumeric {
                field: "loan-amount".into(),
                raw: loan_amount.to_string(),
            })?;

    calculate_payments(&PaymentInput {
        installments,
        loan_amount,
    })
}

fn lookup<'a>(values: &'a [FormFieldValue], field: &str) -> LoanSimResult<&'a str> {
    values
        .iter()
        .find(|v| v.field == field)
        .map(|v| v.value.as_str())
        .ok_or_else(|| LoanSimError::MissingField(field.to_string()))
}
