use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use loansim_core::catalog::{CollateralCatalog, CollateralProfile};
use loansim_core::form::{FormEvent, FormOrchestrator};
use loansim_core::report;
use loansim_core::types::FormFieldValue;

use crate::input;

/// Arguments for the full form simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Collateral type id (e.g. vehicle, home)
    #[arg(long)]
    pub collateral: String,

    /// Collateral value; clamped to the profile bounds
    #[arg(long)]
    pub collateral_value: Option<Decimal>,

    /// Loan amount; clamped to the profile minimum and the 80% ceiling
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Installment count; must be one of the profile's offered terms
    #[arg(long)]
    pub installments: Option<u32>,

    /// Path to a JSON catalog file (array of profiles); defaults to the
    /// built-in catalog
    #[arg(long)]
    pub catalog: Option<String>,

    /// Also print the submission report
    #[arg(long)]
    pub submit: bool,
}

/// Arguments for listing collateral profiles
#[derive(Args)]
pub struct PresetsArgs {
    /// Path to a JSON catalog file (array of profiles)
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for rendering the submission report
#[derive(Args)]
pub struct ReportArgs {
    /// Path to a JSON file holding an array of {field, value} pairs
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut form = FormOrchestrator::new(catalog)?;
    form.handle(FormEvent::CollateralType {
        id: args.collateral,
    })?;

    // Collateral value first: the loan ceiling depends on it.
    if let Some(value) = args.collateral_value {
        form.handle(FormEvent::CollateralValue {
            raw: value.to_string(),
        })?;
    }
    if let Some(amount) = args.loan_amount {
        form.handle(FormEvent::LoanAmount {
            raw: amount.to_string(),
        })?;
    }
    if let Some(n) = args.installments {
        form.handle(FormEvent::Installments { raw: n.to_string() })?;
    }

    let mut value = json!({
        "state": form.state(),
        "quote": form.quote(),
        "display": form.display(),
    });
    if args.submit {
        value["report"] = Value::String(form.submit()?);
    }
    Ok(value)
}

pub fn run_presets(args: PresetsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    Ok(serde_json::to_value(catalog.profiles())?)
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let values: Vec<FormFieldValue> = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(values) = input::read_stdin_json()? {
        values
    } else {
        return Err("provide --input or pipe a JSON array of {field, value} pairs".into());
    };

    Ok(json!({ "report": report::to_string_form_values(&values) }))
}

fn load_catalog(path: Option<&str>) -> Result<CollateralCatalog, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let profiles: Vec<CollateralProfile> = input::read_json(path)?;
            Ok(CollateralCatalog::new(profiles)?)
        }
        None => Ok(CollateralCatalog::standard()),
    }
}
