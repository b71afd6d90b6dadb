use std::future::Future;

use serde::Deserialize;

use crate::LoanSimResult;

pub const DEFAULT_QUESTION_URL: &str = "https://api.loansim.example/help/question";
pub const DEFAULT_ANSWER_URL: &str = "https://api.loansim.example/help/answer";

/// One remote help snippet; both endpoints return `{ "text": string }`.
#[derive(Debug, Clone, Deserialize)]
pub struct HelpSnippet {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct HelpEndpoints {
    pub question_url: String,
    pub answer_url: String,
}

impl Default for HelpEndpoints {
    fn default() -> Self {
        Self {
            question_url: DEFAULT_QUESTION_URL.into(),
            answer_url: DEFAULT_ANSWER_URL.into(),
        }
    }
}

/// Fetches the question and answer snippets for the help affordance.
#[derive(Debug, Clone, Default)]
pub struct HelpClient {
    http: reqwest::Client,
    endpoints: HelpEndpoints,
}

impl HelpClient {
    pub fn new(endpoints: HelpEndpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Issue both GETs concurrently and join the two texts with a newline.
    /// Either failure fails the whole operation; there is no partial result,
    /// no retry and no cancellation.
    pub async fn fetch(&self) -> LoanSimResult<String> {
        join_help(
            self.snippet(&self.endpoints.question_url),
            self.snippet(&self.endpoints.answer_url),
        )
        .await
    }

    async fn snippet(&self, url: &str) -> LoanSimResult<HelpSnippet> {
        tracing::debug!(url, "fetching help snippet");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<HelpSnippet>().await?)
    }
}

/// Both-must-succeed join of the two snippet fetches. Generic over the
/// futures so the semantics are testable without a network.
pub async fn join_help<Q, A>(question: Q, answer: A) -> LoanSimResult<String>
where
    Q: Future<Output = LoanSimResult<HelpSnippet>>,
    A: Future<Output = LoanSimResult<HelpSnippet>>,
{
    let (question, answer) = tokio::try_join!(question, answer)?;
    Ok(format!("{}\n{}", question.text, answer.text))
}
