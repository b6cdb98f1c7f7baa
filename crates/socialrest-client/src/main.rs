//! socialrest CLI
//!
//! - `list`: catalogued actions with method, path, and availability
//! - `run <action>...`: run actions in order against one in-memory session
//! - `demo`: login, every action, logout

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use socialrest_client::actions::{demo_tour, Action, ActionContext};
use socialrest_client::app_state::AppState;
use socialrest_client::config::{self, ClientConfig};
use socialrest_client::view::{auth_status_line, ViewState};
use socialrest_core::error::Result;

#[derive(Debug, Parser)]
#[command(name = "socialrest", about = "Drive the mocked social-network REST API")]
struct Cli {
    /// Config file (YAML). Built-in defaults apply when the default file is absent.
    #[arg(long, short, default_value = config::DEFAULT_PATH)]
    config: String,

    /// Override client.base_url.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List catalogued actions.
    List,
    /// Run actions in order against one session.
    Run {
        #[arg(required = true)]
        actions: Vec<String>,
        /// Run actions even when unavailable in the current login state.
        #[arg(long)]
        force: bool,
    },
    /// Log in, run every action, log out.
    Demo,
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "socialrest failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(url) = cli.base_url {
        cfg.client.base_url = url;
        cfg.validate()?;
    }

    match cli.command {
        Command::List => {
            list(&cfg);
            Ok(())
        }
        Command::Run { actions, force } => {
            let actions = actions
                .iter()
                .map(|s| s.parse::<Action>())
                .collect::<Result<Vec<_>>>()?;
            let app = AppState::new(cfg)?;
            run_actions(&app, &actions, force).await;
            Ok(())
        }
        Command::Demo => {
            let app = AppState::new(cfg)?;
            run_actions(&app, &demo_tour(), false).await;
            Ok(())
        }
    }
}

fn list(cfg: &ClientConfig) {
    let cx = ActionContext::new(&cfg.credentials, &cfg.fixtures);
    for a in Action::ALL {
        let d = a.request(&cx);
        let mark = if a.is_available(false) { "" } else { "  (requires login)" };
        println!("{:<16} {:<6} {}{}", a.name(), d.method(), d.path(), mark);
    }
}

async fn run_actions(app: &AppState, actions: &[Action], force: bool) {
    let mut view = ViewState::new();
    println!("{}", auth_status_line(app.is_logged_in()));

    for &action in actions {
        if !force && !action.is_available(app.is_logged_in()) {
            println!("-- {} skipped: not available while {}", action.name(), login_word(app));
            continue;
        }

        println!("-- {}", action.name());
        view.begin();
        let outcome = app.run_action(action).await;
        view.finish(outcome);

        println!("{}", view.render());
        println!("{}", auth_status_line(app.is_logged_in()));
    }
}

fn login_word(app: &AppState) -> &'static str {
    if app.is_logged_in() {
        "logged in"
    } else {
        "logged out"
    }
}
