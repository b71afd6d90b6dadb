use clap::Args;
use serde_json::{json, Value};

use loansim_core::help::{HelpClient, HelpEndpoints, DEFAULT_ANSWER_URL, DEFAULT_QUESTION_URL};

/// Arguments for the help-text fetch
#[derive(Args)]
pub struct HelpArgs {
    /// Question snippet endpoint
    #[arg(long, default_value = DEFAULT_QUESTION_URL)]
    pub question_url: String,

    /// Answer snippet endpoint
    #[arg(long, default_value = DEFAULT_ANSWER_URL)]
    pub answer_url: String,
}

pub fn run_help_text(args: HelpArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let client = HelpClient::new(HelpEndpoints {
        question_url: args.question_url,
        answer_url: args.answer_url,
    });

    let runtime = tokio::runtime::Runtime::new()?;
    let text = runtime.block_on(client.fetch())?;
    Ok(json!({ "text": text }))
}
