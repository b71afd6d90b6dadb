use loansim_core::report::{send, to_string_form_values};
use loansim_core::types::FormFieldValue;
use loansim_core::LoanSimError;

#[test]
fn test_report_reference_vector() {
    let values = vec![
        FormFieldValue::new("installments", "24"),
        FormFieldValue::new("loan-amount", "3000"),
        FormFieldValue::new("Total", "3,333.6"),
    ];

    assert_eq!(
        to_string_form_values(&values),
        "OUTPUT\ninstallments --> 24\nloan-amount --> 3000\nTotal --> 3,333.6"
    );
}

#[test]
fn test_report_with_no_values_is_just_the_header() {
    assert_eq!(to_string_form_values(&[]), "OUTPUT\n");
}

#[tokio::test]
async fn test_send_returns_the_report() {
    let values = vec![FormFieldValue::new("installments", "12")];
    let result = send(Some(values)).await.unwrap();
    assert_eq!(result, "OUTPUT\ninstallments --> 12");
}

#[tokio::test]
async fn test_send_rejects_missing_payload() {
    let err = send(None).await.unwrap_err();
    assert!(matches!(err, LoanSimError::InvalidInput { ref field, .. } if field == "values"));
}
