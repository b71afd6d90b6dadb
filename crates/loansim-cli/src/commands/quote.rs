use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loansim_core::payment::{calculate_payments, PaymentInput};

/// Arguments for a raw payment quote
#[derive(Args)]
pub struct QuoteArgs {
    /// Number of monthly installments
    #[arg(long)]
    pub installments: u32,

    /// Loan amount
    #[arg(long)]
    pub loan_amount: Decimal,
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote = calculate_payments(&PaymentInput {
        installments: args.installments,
        loan_amount: args.loan_amount,
    })?;
    Ok(serde_json::to_value(&quote)?)
}
