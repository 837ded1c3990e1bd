use salary_charts::DataError;
use salary_charts::models::{CompanySize, Dimension};
use salary_charts::stats::company_size_counts;
use salary_charts::storage::{self, load_records, load_records_from_reader};
use std::fs;

const HEADER: &str = "work_year,experience_level,employment_type,job_title,salary,salary_currency,salary_in_usd,employee_residence,remote_ratio,company_location,company_size";

#[test]
fn loads_needed_columns_and_ignores_the_rest() {
    let csv = format!(
        "{HEADER}\n\
         2023,SE,FT,Principal Data Scientist,80000,EUR,85847,ES,100,ES,L\n\
         2023,MI,CT,ML Engineer,30000,USD,30000,US,100,US,S\n"
    );
    let rows = load_records_from_reader(csv.as_bytes(), "inline").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].work_year, Some(2023.0));
    assert_eq!(rows[0].experience_level, "SE");
    assert_eq!(rows[0].company_size(), Some(CompanySize::Large));
    assert_eq!(rows[0].salary_in_usd, Some(85847.0));
    assert_eq!(rows[1].remote_ratio, Some(100.0));
}

#[test]
fn empty_numeric_cells_are_missing_values() {
    let csv = "work_year,experience_level,company_size,salary_in_usd,remote_ratio\n\
               2021,EN,M,,50\n\
               ,EX,L,120000,\n";
    let rows = load_records_from_reader(csv.as_bytes(), "inline").unwrap();
    assert_eq!(rows[0].salary_in_usd, None);
    assert_eq!(rows[1].work_year, None);
    assert_eq!(rows[1].remote_ratio, None);
}

#[test]
fn non_numeric_text_is_malformed() {
    let csv = "work_year,experience_level,company_size,salary_in_usd,remote_ratio\n\
               2021,EN,M,lots,50\n";
    let err = load_records_from_reader(csv.as_bytes(), "inline").unwrap_err();
    assert!(matches!(err, DataError::Malformed { .. }));
    assert!(err.to_string().starts_with("data unavailable"));
}

#[test]
fn missing_categorical_column_is_rejected() {
    let csv = "work_year,experience_level,salary_in_usd,remote_ratio\n2021,EN,1,50\n";
    let err = load_records_from_reader(csv.as_bytes(), "inline").unwrap_err();
    assert!(matches!(err, DataError::MissingColumn { column: "company_size", .. }));
}

#[test]
fn missing_numeric_column_is_rejected() {
    let csv = "work_year,experience_level,company_size,remote_ratio\n\
               2021,EN,M,50\n\
               2022,SE,L,0\n";
    let err = load_records_from_reader(csv.as_bytes(), "inline").unwrap_err();
    assert!(matches!(err, DataError::MissingColumn { column: "salary_in_usd", .. }));
    assert!(err.to_string().starts_with("data unavailable"));

    let only_categories = "experience_level,company_size\nEN,M\n";
    let err = load_records_from_reader(only_categories.as_bytes(), "inline").unwrap_err();
    assert!(matches!(err, DataError::MissingColumn { column: "work_year", .. }));
}

#[test]
fn empty_input_has_no_columns() {
    let err = load_records_from_reader("".as_bytes(), "inline").unwrap_err();
    assert!(matches!(err, DataError::MissingColumn { .. }));
}

#[test]
fn years_parse_like_the_other_numeric_columns() {
    let csv = "work_year,experience_level,company_size,salary_in_usd,remote_ratio\n\
               2022.0,EN,M,50000,50\n";
    let rows = load_records_from_reader(csv.as_bytes(), "inline").unwrap();
    assert_eq!(rows[0].work_year, Some(2022.0));
}

#[test]
fn infinite_cells_load_but_count_as_missing() {
    let csv = "work_year,experience_level,company_size,salary_in_usd,remote_ratio\n\
               2021,EN,M,inf,50\n";
    let rows = load_records_from_reader(csv.as_bytes(), "inline").unwrap();
    assert_eq!(rows[0].value(Dimension::SalaryInUsd), None);
    assert_eq!(rows[0].value(Dimension::RemoteRatio), Some(50.0));
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DataError::Unreadable { .. }));
}

#[test]
fn summaries_round_out_to_csv_and_json() {
    let csv = "work_year,experience_level,company_size,salary_in_usd,remote_ratio\n\
               2021,EN,M,10,50\n\
               2021,EN,S,10,50\n\
               2021,EN,M,10,50\n";
    let rows = load_records_from_reader(csv.as_bytes(), "inline").unwrap();
    let counts = company_size_counts(&rows);

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("sizes.csv");
    let json_path = dir.path().join("sizes.json");
    storage::save_summary_csv(&counts, &csv_path).unwrap();
    storage::save_summary_json(&counts, &json_path).unwrap();

    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_txt.lines().count(), 1 + counts.len());
    assert!(csv_txt.lines().nth(1).unwrap().starts_with("M,Medium,2"));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["key"], "M");
    assert_eq!(arr[1]["name"], "Small");
    assert_eq!(arr[0]["value"].as_f64(), Some(2.0));
}
