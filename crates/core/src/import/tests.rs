//! Extraction tests over in-memory worksheets and the xlsx fixture.

use std::path::{Path, PathBuf};

use calamine::{Data, Range};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_shared::{AccountCode, CellRef, SheetConfig};

use super::error::ImportError;
use super::extractor::StatementExtractor;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/statement.xlsx")
}

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

/// A sheet in the default layout: name at A1, date at A6, rows from row 8.
fn statement_sheet(ledger_rows: &[(Data, [Data; 4])]) -> Range<Data> {
    let mut range = Range::new((0, 0), (8, 4));
    range.set_value((0, 0), text("North Bank"));
    range.set_value((5, 0), Data::Float(44197.0));
    range.set_value((7, 0), text("Account"));
    for (offset, (code, amounts)) in ledger_rows.iter().enumerate() {
        let row = 8 + u32::try_from(offset).unwrap();
        range.set_value((row, 0), code.clone());
        for (col, amount) in (1u32..).zip(amounts.iter()) {
            range.set_value((row, col), amount.clone());
        }
    }
    range
}

fn amounts(values: [f64; 4]) -> [Data; 4] {
    values.map(Data::Float)
}

#[test]
fn test_extracts_header_and_ledger_rows() {
    let range = statement_sheet(&[
        (text("1001"), amounts([100.0, 0.0, 20.0, 5.0])),
        (text("1002"), amounts([0.0, 40.5, 1.0, 2.0])),
    ]);

    let statement = StatementExtractor::default().extract_range(&range).unwrap();

    assert_eq!(statement.header().source_name, "North Bank");
    assert_eq!(
        statement.header().statement_date,
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
    );
    assert_eq!(
        statement.account_ids().collect::<Vec<_>>(),
        vec![AccountCode::new(1001), AccountCode::new(1002)]
    );
    assert_eq!(
        statement.row_data().collect::<Vec<_>>(),
        vec![
            [dec!(100), dec!(0), dec!(20), dec!(5)],
            [dec!(0), dec!(40.5), dec!(1), dec!(2)],
        ]
    );
}

#[test]
fn test_skips_rows_not_matching_account_pattern() {
    let range = statement_sheet(&[
        (text("Class 1"), [Data::Empty, Data::Empty, Data::Empty, Data::Empty]),
        (text("1001"), amounts([1.0, 0.0, 0.0, 0.0])),
        (text("10011"), amounts([9.0, 9.0, 9.0, 9.0])),
        (text("101"), amounts([9.0, 9.0, 9.0, 9.0])),
        (Data::Empty, amounts([9.0, 9.0, 9.0, 9.0])),
        (text("2001"), amounts([2.0, 0.0, 0.0, 0.0])),
        (text("Total"), [text("n/a"), text("n/a"), text("n/a"), text("n/a")]),
    ]);

    let statement = StatementExtractor::default().extract_range(&range).unwrap();

    let ids: Vec<u32> = statement.account_ids().map(AccountCode::value).collect();
    assert_eq!(ids, vec![1001, 2001]);
    assert_eq!(statement.row_data().count(), statement.account_ids().count());
}

#[test]
fn test_rows_above_first_ledger_row_are_ignored() {
    let mut range = statement_sheet(&[(text("2001"), amounts([5.0, 0.0, 0.0, 0.0]))]);
    range.set_value((7, 0), text("1234"));

    let statement = StatementExtractor::default().extract_range(&range).unwrap();
    assert_eq!(statement.len(), 1);
    assert_eq!(statement.rows()[0].account_code, AccountCode::new(2001));
}

#[test]
fn test_short_rows_read_missing_amounts_as_zero() {
    let mut range = statement_sheet(&[(text("1001"), amounts([1.0, 0.0, 0.0, 0.0]))]);
    range.set_value((9, 0), text("1002"));
    range.set_value((9, 1), Data::Float(3.0));

    let statement = StatementExtractor::default().extract_range(&range).unwrap();
    assert_eq!(
        statement.rows()[1].amounts(),
        [dec!(3), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO]
    );
}

#[test]
fn test_custom_layout() {
    let mut range = Range::new((0, 0), (3, 4));
    range.set_value((0, 1), text("South Bank"));
    range.set_value((1, 1), text("2022-06-30"));
    range.set_value((2, 0), text("4410"));
    range.set_value((2, 1), Data::Int(7));

    let layout = SheetConfig {
        source_name_cell: CellRef::new(0, 1),
        statement_date_cell: CellRef::new(1, 1),
        first_ledger_row: 2,
    };
    let statement = StatementExtractor::new(layout).extract_range(&range).unwrap();

    assert_eq!(statement.header().source_name, "South Bank");
    assert_eq!(
        statement.header().statement_date,
        NaiveDate::from_ymd_opt(2022, 6, 30).unwrap()
    );
    assert_eq!(statement.rows()[0].opening_active, dec!(7));
}

#[test]
fn test_missing_source_name_is_malformed() {
    let mut range = statement_sheet(&[(text("1001"), amounts([1.0, 0.0, 0.0, 0.0]))]);
    range.set_value((0, 0), Data::Empty);

    let err = StatementExtractor::default().extract_range(&range).unwrap_err();
    assert!(matches!(err, ImportError::MissingHeader { cell } if cell == CellRef::new(0, 0)));
}

#[test]
fn test_undecodable_date_is_malformed() {
    let mut range = statement_sheet(&[(text("1001"), amounts([1.0, 0.0, 0.0, 0.0]))]);
    range.set_value((5, 0), text("first of January"));

    let err = StatementExtractor::default().extract_range(&range).unwrap_err();
    assert!(matches!(err, ImportError::InvalidDate { .. }));
}

#[test]
fn test_bad_amount_fails_whole_extraction() {
    let range = statement_sheet(&[
        (text("1001"), amounts([1.0, 0.0, 0.0, 0.0])),
        (text("1002"), [Data::Float(1.0), text("oops"), Data::Empty, Data::Empty]),
    ]);

    let err = StatementExtractor::default().extract_range(&range).unwrap_err();
    match err {
        ImportError::InvalidAmount { cell, value } => {
            assert_eq!(cell, CellRef::new(9, 2));
            assert_eq!(value, "oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_no_ledger_rows_is_malformed() {
    let range = statement_sheet(&[(text("Total"), amounts([1.0, 0.0, 0.0, 0.0]))]);

    let err = StatementExtractor::default().extract_range(&range).unwrap_err();
    assert!(matches!(err, ImportError::NoLedgerRows { first_row: 8 }));
}

#[test]
fn test_empty_sheet_is_malformed() {
    let range: Range<Data> = Range::empty();

    let err = StatementExtractor::default().extract_range(&range).unwrap_err();
    assert!(matches!(err, ImportError::MissingHeader { .. }));
}

#[test]
fn test_garbage_bytes_are_not_a_workbook() {
    let err = StatementExtractor::default()
        .extract_bytes(b"definitely not a spreadsheet")
        .unwrap_err();
    assert!(matches!(err, ImportError::Workbook(_)));
}

#[test]
fn test_extracts_fixture_file() {
    let statement = StatementExtractor::default()
        .extract_path(&fixture_path())
        .unwrap();

    assert_eq!(statement.header().source_name, "Test Bank");
    assert_eq!(
        statement.header().statement_date,
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
    );

    let ids: Vec<u32> = statement.account_ids().map(AccountCode::value).collect();
    assert_eq!(ids, vec![1001, 1002, 2001, 3001]);
    assert_eq!(
        statement.row_data().collect::<Vec<_>>(),
        vec![
            [dec!(100), dec!(0), dec!(20), dec!(5)],
            [dec!(50.25), dec!(0), dec!(10), dec!(0)],
            [dec!(0), dec!(300), dec!(40), dec!(10)],
            [dec!(0), dec!(0), dec!(1), dec!(1)],
        ]
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let bytes = std::fs::read(fixture_path()).unwrap();
    let extractor = StatementExtractor::default();

    let first = extractor.extract_bytes(&bytes).unwrap();
    let second = extractor.extract_bytes(&bytes).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.account_ids().collect::<Vec<_>>(),
        second.account_ids().collect::<Vec<_>>()
    );
    assert_eq!(
        first.row_data().collect::<Vec<_>>(),
        second.row_data().collect::<Vec<_>>()
    );
}
