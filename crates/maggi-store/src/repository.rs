//! Store traits consumed by the workflows and the CLI

use maggi_core::{Detail, DetailType, Profile, Result};

/// CRUD over profiles
pub trait ProfileStore {
    /// All profiles in insertion order
    fn profiles(&self) -> Result<Vec<Profile>>;

    fn add_profile(&mut self, name: &str) -> Result<Profile>;

    fn update_profile(&mut self, profile: &Profile, name: &str) -> Result<Profile>;

    /// Delete the profile and every detail it owns, atomically
    fn delete_profile(&mut self, profile: &Profile) -> Result<()>;
}

/// CRUD over the details of one profile
pub trait DetailStore {
    /// All details of `profile_id` in insertion order
    fn details(&self, profile_id: i64) -> Result<Vec<Detail>>;

    fn add_detail(
        &mut self,
        key: &str,
        value: &str,
        kind: DetailType,
        profile_id: i64,
    ) -> Result<Detail>;

    /// Change key and value; id, type and owning profile are preserved
    fn update_detail(&mut self, detail: &Detail, key: &str, value: &str) -> Result<Detail>;

    fn delete_detail(&mut self, detail: &Detail) -> Result<()>;

    /// Details of the profile called `name`; empty when no such profile exists
    fn details_for_profile(&self, name: &str) -> Result<Vec<Detail>>;
}

/// Everything the application needs from persistence
pub trait Store: ProfileStore + DetailStore + Send {}

impl<T> Store for T where T: ProfileStore + DetailStore + Send {}
