//! In-memory store for tests
//!
//! Behaves like [`SqliteStore`](crate::SqliteStore) without touching disk,
//! and can be told to fail the next call so callers can exercise their
//! error paths.

use std::cell::RefCell;

use maggi_core::{Detail, DetailType, Error, Profile, Result};

use crate::repository::{DetailStore, ProfileStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Vec<Profile>,
    details: Vec<Detail>,
    next_id: i64,
    fail_next: RefCell<Option<String>>,
    /// Number of mutating calls received, successful or not
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store call return `Error::Store(message)`
    pub fn fail_next(&mut self, message: impl Into<String>) {
        *self.fail_next.get_mut() = Some(message.into());
    }

    fn check(&self) -> Result<()> {
        match self.fail_next.borrow_mut().take() {
            Some(message) => Err(Error::store(message)),
            None => Ok(()),
        }
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl ProfileStore for MemoryStore {
    fn profiles(&self) -> Result<Vec<Profile>> {
        self.check()?;
        Ok(self.profiles.clone())
    }

    fn add_profile(&mut self, name: &str) -> Result<Profile> {
        self.writes += 1;
        self.check()?;
        let profile = Profile::new(self.next_id(), name);
        self.profiles.push(profile.clone());
        Ok(profile)
    }

    fn update_profile(&mut self, profile: &Profile, name: &str) -> Result<Profile> {
        self.writes += 1;
        self.check()?;
        let existing = self
            .profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(|| Error::not_found("profile", profile.id))?;
        existing.name = name.to_string();
        Ok(existing.clone())
    }

    fn delete_profile(&mut self, profile: &Profile) -> Result<()> {
        self.writes += 1;
        self.check()?;
        if !self.profiles.iter().any(|p| p.id == profile.id) {
            return Err(Error::not_found("profile", profile.id));
        }
        self.details.retain(|d| d.profile_id != profile.id);
        self.profiles.retain(|p| p.id != profile.id);
        Ok(())
    }
}

impl DetailStore for MemoryStore {
    fn details(&self, profile_id: i64) -> Result<Vec<Detail>> {
        self.check()?;
        Ok(self
            .details
            .iter()
            .filter(|d| d.profile_id == profile_id)
            .cloned()
            .collect())
    }

    fn add_detail(
        &mut self,
        key: &str,
        value: &str,
        kind: DetailType,
        profile_id: i64,
    ) -> Result<Detail> {
        self.writes += 1;
        self.check()?;
        if !self.profiles.iter().any(|p| p.id == profile_id) {
            return Err(Error::not_found("profile", profile_id));
        }
        let detail = Detail::new(self.next_id(), key, value, kind, profile_id);
        self.details.push(detail.clone());
        Ok(detail)
    }

    fn update_detail(&mut self, detail: &Detail, key: &str, value: &str) -> Result<Detail> {
        self.writes += 1;
        self.check()?;
        let existing = self
            .details
            .iter_mut()
            .find(|d| d.id == detail.id)
            .ok_or_else(|| Error::not_found("detail", detail.id))?;
        existing.key = key.to_string();
        existing.value = value.to_string();
        Ok(existing.clone())
    }

    fn delete_detail(&mut self, detail: &Detail) -> Result<()> {
        self.writes += 1;
        self.check()?;
        let before = self.details.len();
        self.details.retain(|d| d.id != detail.id);
        if self.details.len() == before {
            return Err(Error::not_found("detail", detail.id));
        }
        Ok(())
    }

    fn details_for_profile(&self, name: &str) -> Result<Vec<Detail>> {
        match self.profiles.iter().find(|p| p.name == name) {
            Some(profile) => self.details(profile.id),
            None => Ok(Vec::new()),
        }
    }
}
