use std::{fs, path::PathBuf};

use super::types::Args;
use crate::storage::SeedData;

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if neither a database nor a seed file was given,
    /// or if a reset was asked for without a database
    pub fn validate(&self) -> Result<(), String> {
        let has_db = self
            .db_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if !has_db && self.seed_json.is_none() {
            return Err("Either --db-name or --seed-json is required".to_string());
        }
        if self.db_reset && !has_db {
            return Err("--db-reset only applies with --db-name".to_string());
        }
        if self.bind.trim().is_empty() {
            return Err("Bind address must not be empty".to_string());
        }
        Ok(())
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable, is not valid json, or does
/// not describe a consistent set of courses, tournaments and scores
pub fn check_readable_seed_json(file: &str) -> Result<SeedData, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    SeedData::from_path(&path).map_err(|e| format!("The json file '{file}' is not valid: {e}"))
}
