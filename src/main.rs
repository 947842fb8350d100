//! Skrymi terminal client
//!
//! Browses the casino offers, follows the live call queue and drives the admin panel
//! of a Skrymi backend.

mod api;
mod app;
mod auth;
mod cli;
mod config;
mod errors;
mod models;
mod sync;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::BackendClient;
use app::{Action, App};
use cli::Command;
use config::Config;
use models::CallList;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Skrymi client");
    tracing::info!("Backend URL: {}", config.backend_url);

    let client = BackendClient::new(&config)?;
    let mut app = App::start(client).await;

    run(&mut app).await?;

    app.shutdown().await;
    tracing::info!("Bye");

    Ok(())
}

/// Feed typed commands and call list pushes through the dispatcher until quit.
async fn run(app: &mut App) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut updates = Some(app.call_updates());

    println!("{}", app::render(app.state()));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            list = next_snapshot(&mut updates) => {
                app.dispatch(Action::CallsSnapshot(list)).await;
                if app.state().view == app::View::Calls {
                    println!("{}", app::render(app.state()));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match cli::route(&line, app.state()) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        println!("{}", cli::HELP);
                        continue;
                    }
                    Ok(Command::Actions(actions)) => {
                        for action in actions {
                            app.dispatch(action).await;
                        }
                    }
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                }

                println!("{}", app::render(app.state()));
            }
        }
    }

    Ok(())
}

/// Next published call list; pends forever once the view stopped publishing.
async fn next_snapshot(updates: &mut Option<watch::Receiver<CallList>>) -> CallList {
    if let Some(receiver) = updates {
        if receiver.changed().await.is_ok() {
            return receiver.borrow_and_update().clone();
        }
    }
    *updates = None;
    std::future::pending().await
}
