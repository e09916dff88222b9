//! Action handlers: UpdateAction dispatch and background store calls
//!
//! Store calls are synchronous, so each action runs on the blocking pool and
//! posts its outcome back to the message channel. Failures surface as
//! [`Message::ShowIssue`].

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use maggi_core::{Error, Result};
use maggi_store::{DetailStore, ProfileStore, Store};

use crate::handler::UpdateAction;
use crate::issue::Issue;
use crate::message::Message;

/// Store handle shared between the engine and background tasks
pub type SharedStore = Arc<Mutex<dyn Store>>;

/// Wrap a concrete store for use by the engine
pub fn share_store<S: Store + 'static>(store: S) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, store: SharedStore) {
    tokio::spawn(async move {
        let message = match tokio::task::spawn_blocking(move || execute(action, &store)).await {
            Ok(message) => message,
            Err(e) => {
                error!("Store task failed: {}", e);
                Message::ShowIssue(Issue::from_error(
                    "Background task failed",
                    &Error::internal(e.to_string()),
                ))
            }
        };

        if msg_tx.send(message).await.is_err() {
            warn!("Message channel closed, dropping store result");
        }
    });
}

fn lock(store: &SharedStore) -> MutexGuard<'_, dyn Store + 'static> {
    // Poisoned only if an earlier store call panicked
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run one action against the store and turn the outcome into a message
pub fn execute(action: UpdateAction, store: &SharedStore) -> Message {
    debug!("Executing {:?}", action);
    let mut store = lock(store);

    match action {
        UpdateAction::LoadProfiles { epoch } => report(
            "Failed to load profiles",
            store
                .profiles()
                .map(|profiles| Message::ProfilesLoaded { epoch, profiles }),
        ),

        UpdateAction::AddProfile { epoch, name } => report(
            "Failed to add profile",
            store
                .add_profile(&name)
                .map(|profile| Message::ProfileSaved { epoch, profile }),
        ),

        UpdateAction::UpdateProfile {
            epoch,
            profile,
            name,
        } => report(
            "Failed to update profile",
            store
                .update_profile(&profile, &name)
                .map(|profile| Message::ProfileSaved { epoch, profile }),
        ),

        UpdateAction::DeleteProfile { epoch, profile } => report(
            "Failed to delete profile",
            store
                .delete_profile(&profile)
                .map(|()| Message::ProfileDeleted { epoch, profile }),
        ),

        UpdateAction::LoadDetails { epoch, profile_id } => report(
            "Failed to load details",
            store
                .details(profile_id)
                .map(|details| Message::DetailsLoaded { epoch, details }),
        ),

        UpdateAction::AddDetail {
            epoch,
            key,
            value,
            kind,
            profile_id,
        } => report(
            "Failed to add detail",
            store
                .add_detail(&key, &value, kind, profile_id)
                .map(|detail| Message::DetailSaved { epoch, detail }),
        ),

        UpdateAction::UpdateDetail {
            epoch,
            detail,
            key,
            value,
        } => report(
            "Failed to update detail",
            store
                .update_detail(&detail, &key, &value)
                .map(|detail| Message::DetailSaved { epoch, detail }),
        ),

        UpdateAction::DeleteDetail { epoch, detail } => report(
            "Failed to delete detail",
            store
                .delete_detail(&detail)
                .map(|()| Message::DetailDeleted { epoch, detail }),
        ),
    }
}

fn report(context: &str, result: Result<Message>) -> Message {
    result.unwrap_or_else(|e| {
        error!("{}: {}", context, e);
        Message::ShowIssue(Issue::from_error(context, &e))
    })
}
