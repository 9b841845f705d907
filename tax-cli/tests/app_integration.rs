//! Integration tests that drive the CLI glue with an on-disk bracket file.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_cli::app::{self, DeductionOverrides};
use tax_core::{OrganizationType, Position, TaxRecord};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("flat_schedule.csv")
}

#[test]
fn test_estimate_with_fixture_schedule() {
    let schedule = app::load_schedule(Some(fixture_path().as_path()), &DeductionOverrides::default())
        .expect("fixture schedule should load");
    let record = TaxRecord::new(
        dec!(50000),
        Position::Regular,
        OrganizationType::Private,
        false,
    );

    let summary = app::estimate("Pema", &record, &schedule).unwrap();

    // 0.25 × 40000 − 0.05 × 50000
    assert_eq!(summary.result.gross_tax, dec!(10000));
    assert_eq!(summary.result.net_tax, dec!(7500));
    assert_eq!(summary.to_string(), "Pema has to pay $7500.00 in taxes.");
}

#[test]
fn test_fixture_schedule_keeps_overrides() {
    let overrides = DeductionOverrides {
        dependent_deduction: Some(dec!(250)),
        ..Default::default()
    };

    let schedule = app::load_schedule(Some(fixture_path().as_path()), &overrides).unwrap();

    assert_eq!(schedule.deductions().dependent_deduction, dec!(250));
    assert_eq!(schedule.brackets().len(), 2);
}

#[test]
fn test_missing_schedule_file_is_reported() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/missing.csv");

    let err = app::load_schedule(Some(path.as_path()), &DeductionOverrides::default()).unwrap_err();

    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn test_reference_examples() {
    let schedule = app::load_schedule(None, &DeductionOverrides::default()).unwrap();
    let dorji = TaxRecord::new(
        dec!(600000),
        Position::Regular,
        OrganizationType::Corporate,
        true,
    );
    let kinley = TaxRecord::new(
        dec!(400000),
        Position::Contract,
        OrganizationType::Government,
        false,
    );

    let first = app::estimate("Dorji", &dorji, &schedule).unwrap();
    let second = app::estimate("Kinley", &kinley, &schedule).unwrap();

    assert_eq!(first.to_string(), "Dorji has to pay $57500.00 in taxes.");
    assert_eq!(second.to_string(), "Kinley has to pay $60000.00 in taxes.");
}

#[test]
fn test_refund_is_shown_as_negative() {
    let schedule = app::load_schedule(None, &DeductionOverrides::default()).unwrap();
    let record = TaxRecord::new(
        dec!(0),
        Position::Regular,
        OrganizationType::Government,
        true,
    );

    let summary = app::estimate("Sonam", &record, &schedule).unwrap();

    assert!(summary.result.is_refund());
    assert_eq!(summary.to_string(), "Sonam has to pay $-500.00 in taxes.");
}
