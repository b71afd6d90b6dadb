use loansim_core::payment::{calculate_from_fields, calculate_payments, PaymentInput};
use loansim_core::types::FormFieldValue;
use loansim_core::LoanSimError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Payment calculator tests
// ===========================================================================

#[test]
fn test_reference_quote_24_months_3000() {
    let quote = calculate_payments(&PaymentInput {
        installments: 24,
        loan_amount: dec!(3000),
    })
    .unwrap();

    // (0.0638 + 0.0234 + 24/1000 + 1) × 3000 = 1.1112 × 3000
    assert_eq!(quote.total_payable, dec!(3333.6));
    assert_eq!(quote.monthly_payment, dec!(138.9));
    assert_eq!(quote.monthly_interest_rate, dec!(111.12));
}

#[test]
fn test_monthly_payment_times_installments_equals_total() {
    let cases = [
        (24u32, dec!(3000)),
        (36, dec!(10000)),
        (48, dec!(1000000)),
        (120, dec!(30000)),
        (240, dec!(4500000)),
        (180, dec!(123456.78)),
    ];

    for (installments, loan_amount) in cases {
        let quote = calculate_payments(&PaymentInput {
            installments,
            loan_amount,
        })
        .unwrap();
        assert_eq!(
            quote.monthly_payment * Decimal::from(installments),
            quote.total_payable,
            "proportionality broken for {installments} × {loan_amount}",
        );
    }
}

#[test]
fn test_zero_installments_rejected() {
    let err = calculate_payments(&PaymentInput {
        installments: 0,
        loan_amount: dec!(3000),
    })
    .unwrap_err();
    assert!(matches!(
        err,
        LoanSimError::InvalidInput { ref field, .. } if field == "installments"
    ));
}

#[test]
fn test_zero_or_negative_loan_amount_rejected() {
    for amount in [dec!(0), dec!(-500)] {
        let err = calculate_payments(&PaymentInput {
            installments: 24,
            loan_amount: amount,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            LoanSimError::InvalidInput { ref field, .. } if field == "loan-amount"
        ));
    }
}

#[test]
fn test_calculate_from_fields() {
    let values = vec![
        FormFieldValue::new("installments", "24"),
        FormFieldValue::new("loan-amount", "3000"),
    ];
    let quote = calculate_from_fields(&values).unwrap();
    assert_eq!(quote.total_payable, dec!(3333.6));
}

#[test]
fn test_calculate_from_fields_missing_field() {
    let values = vec![FormFieldValue::new("installments", "24")];
    let err = calculate_from_fields(&values).unwrap_err();
    assert!(matches!(err, LoanSimError::MissingField(ref f) if f == "loan-amount"));
}

#[test]
fn test_calculate_from_fields_non_numeric() {
    let values = vec![
        FormFieldValue::new("installments", "twenty-four"),
        FormFieldValue::new("loan-amount", "3000"),
    ];
    let err = calculate_from_fields(&values).unwrap_err();
    assert!(matches!(
        err,
        LoanSimError::NonNumeric { ref field, ref raw } if field == "installments" && raw == "twenty-four"
    ));
}
