//! Message types for the application (TEA pattern)

use maggi_core::{Detail, Profile};

use crate::input_key::InputKey;
use crate::issue::Issue;

/// Page handoff requested by a workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTransition {
    /// Show the profile list (startup and leaving the detail page)
    Profiles,
    /// Open the detail page for a profile
    Details(Profile),
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal resized (also delivered once at startup)
    Resize { width: u16, height: u16 },

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Router Messages
    // ─────────────────────────────────────────────────────────
    /// Switch pages and enter the target workflow
    Navigate(PageTransition),

    /// Replace the screen with the issue page
    ShowIssue(Issue),

    // ─────────────────────────────────────────────────────────
    // Profile Workflow Messages
    // ─────────────────────────────────────────────────────────
    /// Entry message of the profile page
    ProfileStart,

    ProfilesLoaded { epoch: u64, profiles: Vec<Profile> },

    /// A profile was added or renamed
    ProfileSaved { epoch: u64, profile: Profile },

    ProfileDeleted { epoch: u64, profile: Profile },

    // ─────────────────────────────────────────────────────────
    // Detail Workflow Messages
    // ─────────────────────────────────────────────────────────
    /// Entry message of the detail page, carrying the opened profile
    DetailStart { profile: Profile },

    DetailsLoaded { epoch: u64, details: Vec<Detail> },

    /// A detail was added or updated
    DetailSaved { epoch: u64, detail: Detail },

    DetailDeleted { epoch: u64, detail: Detail },
}
