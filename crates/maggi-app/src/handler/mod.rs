//! Handler module - TEA update function and workflow transitions
//!
//! Organized into submodules:
//! - `update`: Main update() function, page router and issue page
//! - `profile`: Profile workflow transitions
//! - `detail`: Detail workflow transitions

pub(crate) mod detail;
pub(crate) mod profile;
pub(crate) mod update;


use maggi_core::{Detail, DetailType, Profile};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Store commands the event loop runs off the update path.
///
/// Every command carries the epoch of the workflow visit that issued it,
/// echoed back in the result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    LoadProfiles {
        epoch: u64,
    },

    AddProfile {
        epoch: u64,
        name: String,
    },

    UpdateProfile {
        epoch: u64,
        profile: Profile,
        name: String,
    },

    /// Cascades to the profile's details
    DeleteProfile {
        epoch: u64,
        profile: Profile,
    },

    LoadDetails {
        epoch: u64,
        profile_id: i64,
    },

    AddDetail {
        epoch: u64,
        key: String,
        value: String,
        kind: DetailType,
        profile_id: i64,
    },

    UpdateDetail {
        epoch: u64,
        detail: Detail,
        key: String,
        value: String,
    },

    DeleteDetail {
        epoch: u64,
        detail: Detail,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
