//! Main TUI runner - entry point and event loop

use maggi_app::config::Settings;
use maggi_app::{Engine, Message, SharedStore};
use maggi_core::prelude::*;

use crate::theme::Theme;
use crate::{event, render, terminal};

/// Run the interactive profile manager until the user quits
pub async fn run(settings: Settings, store: SharedStore, debug: bool) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let theme = Theme::from_settings(&settings.theme);
    let max_width = settings.ui.max_width;

    let mut term = ratatui::init();
    let mut engine = Engine::new(settings, store, debug);

    // Size the pages before the first list is built
    match term.size() {
        Ok(size) => engine.process_message(Message::Resize {
            width: size.width,
            height: size.height,
        }),
        Err(e) => warn!("Could not read terminal size: {}", e),
    }

    engine.start();
    let result = run_loop(&mut term, &mut engine, &theme, max_width);

    ratatui::restore();
    info!("TUI closed");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    theme: &Theme,
    max_width: u16,
) -> Result<()> {
    while !engine.should_quit() {
        // Store results and signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state, theme, max_width))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
