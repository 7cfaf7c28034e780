//! Loads both lead collections from an existing SQLite database.
//!
//! The database is expected to carry the `leads_schools` and `leads_salesnav`
//! tables produced by the lead scrapers. Rows are read in `rowid` order so the
//! merged view lists leads in the order they were ingested. The connection is
//! opened read-only; this service never writes to the database.

use super::{LeadStore, StoreError};
use common::model::lead::{Enrichment, LeadProfile, SalesNavLead, SchoolLead};
use log::warn;
use rusqlite::{Connection, OpenFlags, Row};
use std::path::Path;

const PROFILE_COLUMNS: &str = "user_name, title, linkedin_profile_url, linkedin_image_url, \
     location, req_school, req_country, timestamp, slug";

fn read_profile(row: &Row<'_>) -> rusqlite::Result<LeadProfile> {
    Ok(LeadProfile {
        user_name: row.get(1)?,
        title: row.get(2)?,
        linkedin_profile_url: row.get(3)?,
        linkedin_image_url: row.get(4)?,
        location: row.get(5)?,
        req_school: row.get(6)?,
        req_country: row.get(7)?,
        timestamp: row.get(8)?,
        slug: row.get(9)?,
    })
}

fn read_schools(conn: &Connection) -> Result<Vec<SchoolLead>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT uid, {} FROM leads_schools ORDER BY rowid",
        PROFILE_COLUMNS
    ))?;

    let rows = stmt.query_map([], |row| {
        let uid: Option<String> = row.get(0)?;
        Ok(match uid {
            Some(uid) => Some(SchoolLead {
                uid,
                profile: read_profile(row)?,
            }),
            None => None,
        })
    })?;

    let mut leads = Vec::new();
    for row in rows {
        match row? {
            Some(lead) => leads.push(lead),
            None => warn!("Skipping leads_schools row with NULL uid"),
        }
    }
    Ok(leads)
}

fn read_salesnav(conn: &Connection) -> Result<Vec<SalesNavLead>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT uid, {}, about, headline, skills, experience FROM leads_salesnav ORDER BY rowid",
        PROFILE_COLUMNS
    ))?;

    let rows = stmt.query_map([], |row| {
        let uid: Option<String> = row.get(0)?;
        Ok(match uid {
            Some(uid) => Some(SalesNavLead {
                uid,
                profile: read_profile(row)?,
                enrichment: Enrichment {
                    about: row.get(10)?,
                    headline: row.get(11)?,
                    skills: row.get(12)?,
                    experience: row.get(13)?,
                },
            }),
            None => None,
        })
    })?;

    let mut leads = Vec::new();
    for row in rows {
        match row? {
            Some(lead) => leads.push(lead),
            None => warn!("Skipping leads_salesnav row with NULL uid"),
        }
    }
    Ok(leads)
}

impl LeadStore {
    /// Reads every row of `leads_schools` and `leads_salesnav` from the database at `path`.
    pub fn open_sqlite(path: &Path) -> Result<LeadStore, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let schools = read_schools(&conn)?;
        let salesnav = read_salesnav(&conn)?;
        Ok(LeadStore::from_records(schools, salesnav))
    }
}
