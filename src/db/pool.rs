//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One `DbPool` is constructed per invocation and passed explicitly to the
//! logic layer; nothing holds a process-global handle.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
