use loansim_core::help::{join_help, HelpSnippet};
use loansim_core::{LoanSimError, LoanSimResult};

fn ok(text: &str) -> LoanSimResult<HelpSnippet> {
    Ok(HelpSnippet { text: text.into() })
}

fn failed() -> LoanSimResult<HelpSnippet> {
    Err(LoanSimError::MissingField("text".into()))
}

#[tokio::test]
async fn test_join_help_joins_both_texts_with_newline() {
    let combined = join_help(async { ok("What is a secured loan?") }, async {
        ok("A loan backed by an asset.")
    })
    .await
    .unwrap();

    assert_eq!(combined, "What is a secured loan?\nA loan backed by an asset.");
}

#[tokio::test]
async fn test_join_help_rejects_when_question_fails() {
    let err = join_help(async { failed() }, async { ok("answer") })
        .await
        .unwrap_err();
    assert!(matches!(err, LoanSimError::MissingField(_)));
}

#[tokio::test]
async fn test_join_help_rejects_when_answer_fails() {
    let err = join_help(async { ok("question") }, async { failed() })
        .await
        .unwrap_err();
    assert!(matches!(err, LoanSimError::MissingField(_)));
}
