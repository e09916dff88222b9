//! Table definitions

/// Bumped whenever the DDL below changes
pub(crate) const SCHEMA_VERSION: u32 = 1;

pub(crate) const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS profiles (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_profiles_name ON profiles(name);

CREATE TABLE IF NOT EXISTS details (
    id         INTEGER PRIMARY KEY,
    key        TEXT NOT NULL,
    value      TEXT NOT NULL,
    type       TEXT NOT NULL CHECK(type IN ('alias', 'env')),
    profile_id INTEGER NOT NULL REFERENCES profiles(id)
);
CREATE INDEX IF NOT EXISTS idx_details_profile_id ON details(profile_id);
CREATE INDEX IF NOT EXISTS idx_details_type ON details(type);
";
