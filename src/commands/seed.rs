//! Seed command - Prints the demo records.

use crate::errors::{AppError, AppResult};
use crate::infra::seed_records;

/// Execute the seed command
pub async fn execute() -> AppResult<()> {
    let json = serde_json::to_string_pretty(&seed_records())
        .map_err(|e| AppError::internal(format!("Failed to encode seed records: {}", e)))?;
    println!("{}", json);
    Ok(())
}
