//! Engine - owns the application state, message channel, and store
//!
//! Frontends feed input messages in, drain pending store results, and render
//! from `engine.state`.

use tokio::sync::mpsc;
use tracing::info;

use crate::actions::SharedStore;
use crate::config::Settings;
use crate::message::{Message, PageTransition};
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Orchestration engine for maggi.
///
/// Encapsulates everything a frontend needs:
/// - TEA state management
/// - Message channel shared with background store tasks
/// - The store handle
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, store tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    store: SharedStore,

    /// Loaded settings
    pub settings: Settings,
}

impl Engine {
    /// Create the engine and spawn the signal handler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings, store: SharedStore, debug: bool) -> Self {
        let state = AppState::new(&settings, debug);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            store,
            settings,
        }
    }

    /// Enter the first page
    pub fn start(&mut self) {
        info!("Starting on the profile page");
        self.process_message(Message::Navigate(PageTransition::Profiles));
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.store);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// before each render.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from background tasks or signals
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
