use crate::errors::{AppError, AppResult};

/// The only accepted header row, in order.
pub const EXPECTED_COLUMNS: [&str; 8] = [
    "Type",
    "Start",
    "End",
    "Duration",
    "Start Condition",
    "Start Location",
    "End Condition",
    "Notes",
];

/// Fails with `SchemaMismatch` unless `columns` equals `EXPECTED_COLUMNS`
/// exactly: same names, same order, same count. No trimming, no case folding.
pub fn validate_columns<I, S>(columns: I) -> AppResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let found: Vec<String> = columns
        .into_iter()
        .map(|c| c.as_ref().to_string())
        .collect();

    if found.iter().map(String::as_str).eq(EXPECTED_COLUMNS) {
        Ok(())
    } else {
        Err(AppError::SchemaMismatch { found })
    }
}
