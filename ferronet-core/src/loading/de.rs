use std::io::Read;

use log::warn;
use serde::Deserialize;

/// Deserialize every row of a CSV table, skipping rows that fail to parse.
/// Returns the parsed rows and the number of skipped ones.
pub(super) fn deserialize_records<T, R>(reader: R, table: &str) -> (Vec<T>, usize)
where
    T: for<'de> serde::Deserialize<'de>,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;
    for (row, result) in reader.deserialize().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                // Header is line 1
                warn!("Skipping {table} row {}: {e}", row + 2);
                skipped += 1;
            }
        }
    }
    (records, skipped)
}

/// `1`, `true`, `yes` (any case) are true; empty and anything else is false
pub(super) fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    ))
}
