//! Serialization of the generated JavaScript data module.
//!
//! The front end imports the output file directly, so the records are
//! emitted as object literals with bare keys rather than strict JSON.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::draws::{BigLottoRecord, Draw, SuperLottoRecord};

/// Field names emitted without quotes in the generated module.
const BARE_KEYS: [&str; 5] = ["date", "main", "special", "zone1", "zone2"];

/// Renders the complete module text: a header comment with the generation
/// timestamp and record counts, then one exported array per game.
pub fn render(
    big: &[Draw],
    super_draws: &[Draw],
    generated_at: DateTime<Local>,
) -> Result<String, serde_json::Error> {
    let big_records: Vec<BigLottoRecord> = big.iter().map(Into::into).collect();
    let super_records: Vec<SuperLottoRecord> = super_draws.iter().map(Into::into).collect();

    let content = format!(
        "// Auto-generated by lottodraws\n\
         // Last Updated: {}\n\
         // Big Lotto: {} draws, Super Lotto: {} draws\n\
         \n\
         export const BIG_LOTTO_DRAWS = {};\n\
         \n\
         export const SUPER_LOTTO_DRAWS = {};\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        big.len(),
        super_draws.len(),
        serde_json::to_string_pretty(&big_records)?,
        serde_json::to_string_pretty(&super_records)?,
    );

    Ok(unquote_keys(&content))
}

/// Serializes both collections and overwrites the module at `path`.
///
/// Refuses to write when either game came back empty, so a degraded run
/// never clobbers a good data file; returns whether the file was written.
pub fn write_module(
    path: &Path,
    big: &[Draw],
    super_draws: &[Draw],
    generated_at: DateTime<Local>,
) -> io::Result<bool> {
    if big.is_empty() || super_draws.is_empty() {
        tracing::warn!(
            "Insufficient data to update ({} big, {} super), leaving {} untouched",
            big.len(),
            super_draws.len(),
            path.display()
        );
        return Ok(false);
    }

    let content = render(big, super_draws, generated_at)?;
    fs::write(path, content)?;
    tracing::info!("Updated {}", path.display());
    Ok(true)
}

/// Strips quotes from the known record keys, turning strict JSON into the
/// object-literal syntax the consuming module expects.
fn unquote_keys(text: &str) -> String {
    BARE_KEYS.iter().fold(text.to_string(), |acc, key| {
        acc.replace(&format!("\"{}\":", key), &format!("{}:", key))
    })
}
