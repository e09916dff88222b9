//! maggi - profile-scoped shell aliases and environment variables
//!
//! Binary entry point. The workflow engine, store and terminal UI live in
//! the workspace crates.

use std::path::Path;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use maggi_app::actions::share_store;
use maggi_app::config::{self, Settings};
use maggi_core::{detect_session, generate, maggi_home};
use maggi_store::{DetailStore, ProfileStore, SqliteStore};
use tracing::{info, warn};

/// Manage shell aliases and env vars per profile
#[derive(Parser, Debug)]
#[command(name = "maggi", version)]
#[command(about = "Profile-scoped shell aliases and environment variables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive profile manager
    Ui {
        /// Show diagnostic detail on the error page
        #[arg(long)]
        debug: bool,
    },
    /// List stored profiles
    Profiles {
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// Print the alias/export statements for a profile, ready for `eval`
    Generate {
        /// Profile to generate; defaults to the default plus session profile
        #[arg(long)]
        profile: Option<String>,
        /// Profile emitted before the session profile
        #[arg(long = "default", value_name = "NAME")]
        default_profile: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    maggi_core::logging::init()?;

    let home = maggi_home();
    config::init_config_dir(&home)?;
    let settings = config::load_settings(&home);
    let store = open_store(&settings, &home)?;

    match cli.command {
        Command::Ui { debug } => {
            maggi_tui::run(settings, share_store(store), debug).await?;
        }
        Command::Profiles { json } => print_profiles(&store, json)?,
        Command::Generate {
            profile,
            default_profile,
        } => {
            let output = match profile {
                Some(name) => generate_for(&store, &name)?,
                None => {
                    let default_profile = default_profile
                        .or_else(|| settings.generate.default_profile.clone())
                        .filter(|name| !name.is_empty());
                    generate_for_session(&store, default_profile.as_deref())?
                }
            };
            print!("{}", output);
        }
    }

    Ok(())
}

fn open_store(settings: &Settings, home: &Path) -> Result<SqliteStore> {
    let path = config::database_path(settings, home);
    info!("Opening database at {}", path.display());
    Ok(SqliteStore::open(&path)?)
}

fn print_profiles(store: &SqliteStore, json: bool) -> Result<()> {
    let profiles = store.profiles()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
    } else {
        for profile in &profiles {
            println!("{}", profile.name);
        }
    }
    Ok(())
}

/// Statements for one profile; unknown names produce nothing
fn generate_for(store: &SqliteStore, name: &str) -> Result<String> {
    let details = store.details_for_profile(name)?;
    Ok(generate(&details))
}

/// Default profile first, then whatever the terminal session is named after
fn generate_for_session(store: &SqliteStore, default_profile: Option<&str>) -> Result<String> {
    let mut output = match default_profile {
        Some(name) => generate_for(store, name)?,
        None => String::new(),
    };

    match detect_session() {
        Ok(Some(session)) => output.push_str(&generate_for(store, &session)?),
        Ok(None) => {}
        Err(e) => warn!("Session discovery failed, emitting default profile only: {}", e),
    }

    Ok(output)
}
