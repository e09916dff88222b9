//! Profile and detail domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named group of aliases and environment variables, e.g. "dev"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
}

impl Profile {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Which shell construct a [`Detail`] turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailType {
    Alias,
    #[default]
    Env,
}

impl DetailType {
    /// Value stored in the `type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailType::Alias => "alias",
            DetailType::Env => "env",
        }
    }

    /// Capitalized label for menus ("Update Alias")
    pub fn label(&self) -> &'static str {
        match self {
            DetailType::Alias => "Alias",
            DetailType::Env => "Env",
        }
    }
}

impl fmt::Display for DetailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alias" => Ok(DetailType::Alias),
            "env" => Ok(DetailType::Env),
            other => Err(Error::store(format!("unknown detail type '{}'", other))),
        }
    }
}

/// A single alias or environment variable owned by one profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detail {
    pub id: i64,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: DetailType,
    pub profile_id: i64,
}

impl Detail {
    pub fn new(
        id: i64,
        key: impl Into<String>,
        value: impl Into<String>,
        kind: DetailType,
        profile_id: i64,
    ) -> Self {
        Self {
            id,
            key: key.into(),
            value: value.into(),
            kind,
            profile_id,
        }
    }

    /// The `eval`-able statement for this detail, including the trailing `;`
    pub fn statement(&self) -> String {
        match self.kind {
            DetailType::Alias => format!("alias {}={};", self.key, self.value),
            DetailType::Env => format!("export {}={};", self.key, self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_type_round_trips_through_str() {
        for kind in [DetailType::Alias, DetailType::Env] {
            assert_eq!(kind.as_str().parse::<DetailType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_detail_type_rejects_unknown() {
        let err = "function".parse::<DetailType>().unwrap_err();
        assert!(err.to_string().contains("function"));
    }

    #[test]
    fn test_statement_format() {
        let alias = Detail::new(1, "ll", "ls -la", DetailType::Alias, 1);
        assert_eq!(alias.statement(), "alias ll=ls -la;");

        let env = Detail::new(2, "EDITOR", "vim", DetailType::Env, 1);
        assert_eq!(env.statement(), "export EDITOR=vim;");
    }
}
