//! # Record Store
//!
//! Holds the two raw lead collections the dashboard is built from: leads sourced
//! from school lists (`leads_schools`) and leads exported from the sales navigator
//! (`leads_salesnav`). Both are keyed by `uid`.
//!
//! The store is loaded once at startup, either from the built-in demonstration
//! dataset (`demo`) or from an existing SQLite database (`sqlite`), and is never
//! mutated afterwards. `main.rs` wraps it in `web::Data` so every handler reads
//! the same snapshot without locking.

mod collection;
mod demo;
mod sqlite;

pub use collection::{Collection, Keyed};

use crate::config::Config;
use common::model::lead::{SalesNavLead, SchoolLead};
use log::{info, warn};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the store at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database file not found: {0}")]
    NotFound(PathBuf),

    #[error("loader task failed: {0}")]
    Join(String),
}

/// Immutable snapshot of both lead collections.
#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    schools: Collection<SchoolLead>,
    salesnav: Collection<SalesNavLead>,
}

impl LeadStore {
    /// Builds a store from raw records, in the order given.
    ///
    /// Records without a `uid` cannot be joined and are skipped. A repeated `uid`
    /// within one source replaces the earlier record.
    pub fn from_records<S, N>(schools: S, salesnav: N) -> Self
    where
        S: IntoIterator<Item = SchoolLead>,
        N: IntoIterator<Item = SalesNavLead>,
    {
        LeadStore {
            schools: collect_source("leads_schools", schools),
            salesnav: collect_source("leads_salesnav", salesnav),
        }
    }

    pub fn schools(&self) -> &Collection<SchoolLead> {
        &self.schools
    }

    pub fn salesnav(&self) -> &Collection<SalesNavLead> {
        &self.salesnav
    }

    /// Loads the store described by `config`.
    ///
    /// With a database path the SQLite file is read on a blocking thread; without
    /// one the demonstration dataset is used.
    pub async fn load(config: &Config) -> Result<LeadStore, StoreError> {
        let store = match config.database.clone() {
            Some(path) => {
                info!("Loading leads from {}", path.display());
                tokio::task::spawn_blocking(move || LeadStore::open_sqlite(&path))
                    .await
                    .map_err(|e| StoreError::Join(e.to_string()))??
            }
            None => {
                info!("No database configured, using the demonstration dataset");
                LeadStore::demo()
            }
        };

        if store.schools.is_empty() && store.salesnav.is_empty() {
            warn!("Both lead sources are empty, every query will return no leads");
        } else {
            info!(
                "Loaded {} school leads and {} sales navigator leads",
                store.schools.len(),
                store.salesnav.len()
            );
        }
        Ok(store)
    }
}

fn collect_source<T: Keyed>(source: &str, records: impl IntoIterator<Item = T>) -> Collection<T> {
    let mut collection = Collection::new();
    for record in records {
        if record.uid().is_empty() {
            warn!("Skipping {} record without uid", source);
            continue;
        }
        if collection.insert(record) {
            warn!("Duplicate uid in {}, keeping the later record", source);
        }
    }
    collection
}
