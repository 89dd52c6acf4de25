//! Parse expense CSV exports into rows ready to append to a trip ledger.
//!
//! Expected columns: description,amount,paid_by,category[,date]
//! A header row is skipped when present; unparseable rows are dropped.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use wayfare_core::participant_label;

/// One parsed expense row, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRow {
    pub description: String,
    pub amount: f64,
    pub paid_by: String,
    pub category: String,
    pub recorded_on: Option<NaiveDate>,
}

/// Normalize the paid_by column: a bare participant index ("2") becomes the
/// synthetic label; anything else is kept verbatim.
fn normalize_payer(raw: &str) -> String {
    match raw.trim().parse::<u32>() {
        Ok(i) if i >= 1 => participant_label(i),
        _ => raw.trim().to_string(),
    }
}

pub fn parse_expense_csv(path: impl AsRef<Path>) -> Result<Vec<ImportedRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let description = record.get(0).unwrap_or("").trim().to_string();
        if description.is_empty() || description.eq_ignore_ascii_case("description") {
            continue;
        }

        // Rows without a numeric amount are skipped, not errors.
        let amount: f64 = match record.get(1).unwrap_or("").trim().parse() {
            Ok(a) if a >= 0.0 => a,
            _ => continue,
        };

        let paid_by = normalize_payer(record.get(2).unwrap_or(""));
        let category = record.get(3).unwrap_or("misc").trim().to_string();
        let recorded_on = record
            .get(4)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());

        rows.push(ImportedRow {
            description,
            amount,
            paid_by,
            category: if category.is_empty() {
                "misc".to_string()
            } else {
                category
            },
            recorded_on,
        });
    }

    Ok(rows)
}
