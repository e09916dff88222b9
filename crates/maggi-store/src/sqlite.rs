//! rusqlite-backed store

use std::path::Path;

use maggi_core::{Detail, DetailType, Error, Profile, Result, ResultExt};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::repository::{DetailStore, ProfileStore};
use crate::schema::{CREATE_TABLES, SCHEMA_VERSION};

/// File name of the database inside the maggi home directory
pub const DATABASE_FILENAME: &str = "maggi.db";

fn store_err(err: rusqlite::Error) -> Error {
    Error::store(err.to_string())
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }
        debug!("Opening database at {}", path.display());
        let conn = Connection::open(path).map_err(store_err)?;
        let mut store = Self { conn };
        store.bootstrap()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(store_err)?;
        let mut store = Self { conn };
        store.bootstrap()?;
        Ok(store)
    }

    fn bootstrap(&mut self) -> Result<()> {
        self.conn
            .execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(store_err)?;

        let version: u32 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(store_err)?;
        if version > SCHEMA_VERSION {
            return Err(Error::store(format!(
                "database schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            )));
        }

        self.conn.execute_batch(CREATE_TABLES).map_err(store_err)?;
        self.conn
            .execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION))
            .map_err(store_err)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    fn map_detail(row: &Row<'_>) -> rusqlite::Result<Detail> {
        let kind: String = row.get(3)?;
        let kind = kind.parse::<DetailType>().map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::other(err.to_string())),
            )
        })?;
        Ok(Detail {
            id: row.get(0)?,
            key: row.get(1)?,
            value: row.get(2)?,
            kind,
            profile_id: row.get(4)?,
        })
    }
}

impl ProfileStore for SqliteStore {
    fn profiles(&self) -> Result<Vec<Profile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM profiles ORDER BY id ASC")
            .map_err(store_err)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Profile {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(store_err)?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(store_err)
    }

    fn add_profile(&mut self, name: &str) -> Result<Profile> {
        self.conn
            .execute("INSERT INTO profiles (name) VALUES (?1)", params![name])
            .map_err(store_err)?;
        let profile = Profile::new(self.conn.last_insert_rowid(), name);
        info!("Added profile {} ({})", profile.name, profile.id);
        Ok(profile)
    }

    fn update_profile(&mut self, profile: &Profile, name: &str) -> Result<Profile> {
        let changed = self
            .conn
            .execute(
                "UPDATE profiles SET name = ?1 WHERE id = ?2",
                params![name, profile.id],
            )
            .map_err(store_err)?;
        if changed == 0 {
            return Err(Error::not_found("profile", profile.id));
        }
        info!("Renamed profile {} to {}", profile.name, name);
        Ok(Profile::new(profile.id, name))
    }

    fn delete_profile(&mut self, profile: &Profile) -> Result<()> {
        let tx = self.conn.transaction().map_err(store_err)?;

        let details = tx
            .execute(
                "DELETE FROM details WHERE profile_id = ?1",
                params![profile.id],
            )
            .map_err(store_err)?;
        let changed = tx
            .execute("DELETE FROM profiles WHERE id = ?1", params![profile.id])
            .map_err(store_err)?;
        if changed == 0 {
            // Dropping the transaction rolls back the detail delete.
            return Err(Error::not_found("profile", profile.id));
        }

        tx.commit().map_err(store_err)?;
        info!(
            "Deleted profile {} and {} attached details",
            profile.name, details
        );
        Ok(())
    }
}

impl DetailStore for SqliteStore {
    fn details(&self, profile_id: i64) -> Result<Vec<Detail>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT id, key, value, type, profile_id
                FROM details
                WHERE profile_id = ?1
                ORDER BY id ASC
                ",
            )
            .map_err(store_err)?;

        let rows = stmt
            .query_map(params![profile_id], Self::map_detail)
            .map_err(store_err)?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(store_err)
    }

    fn add_detail(
        &mut self,
        key: &str,
        value: &str,
        kind: DetailType,
        profile_id: i64,
    ) -> Result<Detail> {
        self.conn
            .execute(
                "INSERT INTO details (key, value, type, profile_id) VALUES (?1, ?2, ?3, ?4)",
                params![key, value, kind.as_str(), profile_id],
            )
            .map_err(store_err)?;
        let detail = Detail::new(self.conn.last_insert_rowid(), key, value, kind, profile_id);
        info!("Added {} {} to profile {}", kind, key, profile_id);
        Ok(detail)
    }

    fn update_detail(&mut self, detail: &Detail, key: &str, value: &str) -> Result<Detail> {
        let changed = self
            .conn
            .execute(
                "UPDATE details SET key = ?1, value = ?2 WHERE id = ?3",
                params![key, value, detail.id],
            )
            .map_err(store_err)?;
        if changed == 0 {
            return Err(Error::not_found("detail", detail.id));
        }
        Ok(Detail {
            key: key.to_string(),
            value: value.to_string(),
            ..detail.clone()
        })
    }

    fn delete_detail(&mut self, detail: &Detail) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM details WHERE id = ?1", params![detail.id])
            .map_err(store_err)?;
        if changed == 0 {
            return Err(Error::not_found("detail", detail.id));
        }
        Ok(())
    }

    fn details_for_profile(&self, name: &str) -> Result<Vec<Detail>> {
        let profile_id: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM profiles WHERE name = ?1 ORDER BY id ASC LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(store_err)?;

        match profile_id {
            Some(id) => self.details(id),
            None => {
                debug!("No profile named {:?}", name);
                Ok(Vec::new())
            }
        }
    }
}
