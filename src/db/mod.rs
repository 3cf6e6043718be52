use crate::error::StoreError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub mod kv;

pub use kv::SqliteStore;

mod embedded {
    refinery::embed_migrations!("migrations");
}

pub fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\vocab-typing")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/vocab-typing")
    }
}

pub fn init_db(db_path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut conn = Connection::open(db_path)?;
    run_migrations(&mut conn)?;
    Ok(conn)
}

pub fn run_migrations(conn: &mut Connection) -> Result<(), StoreError> {
    embedded::migrations::runner().run(conn)?;
    Ok(())
}
