use crate::error::DataError;
use crate::models::{Category, Record};
use crate::stats::GroupSummary;
use anyhow::Result;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Load all salary records from a headered CSV file.
///
/// Columns beyond the ones `Record` needs are ignored. Any read or parse error
/// aborts the load; nothing partial is returned.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DataError::Unreadable {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    let records = load_records_from_reader(file, &path.display().to_string())?;
    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Same as [`load_records`] for an arbitrary reader; `origin` names the source in errors.
pub fn load_records_from_reader<R: Read>(reader: R, origin: &str) -> Result<Vec<Record>, DataError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = rdr.headers().map_err(|source| DataError::Malformed {
        origin: origin.to_string(),
        source,
    })?;
    // absent Option fields would otherwise deserialize as None
    if let Some(column) = Record::REQUIRED_COLUMNS
        .into_iter()
        .find(|c| !headers.iter().any(|h| h == *c))
    {
        return Err(DataError::MissingColumn {
            origin: origin.to_string(),
            column,
        });
    }
    let mut out = Vec::new();
    for row in rdr.deserialize::<Record>() {
        let rec = row.map_err(|source| DataError::Malformed {
            origin: origin.to_string(),
            source,
        })?;
        out.push(rec);
    }
    Ok(out)
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    key: &'a str,
    name: &'a str,
    value: f64,
}

fn summary_rows<K: Category>(summary: &GroupSummary<K>) -> Vec<SummaryRow<'static>> {
    summary
        .iter()
        .map(|g| SummaryRow {
            key: g.key.code(),
            name: g.key.display_name(),
            value: g.value,
        })
        .collect()
}

/// Save a group summary as CSV with header `key,name,value`.
pub fn save_summary_csv<K: Category, P: AsRef<Path>>(summary: &GroupSummary<K>, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    for row in summary_rows(summary) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a group summary as a pretty JSON array of `{key, name, value}` objects.
pub fn save_summary_json<K: Category, P: AsRef<Path>>(summary: &GroupSummary<K>, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&summary_rows(summary))?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
