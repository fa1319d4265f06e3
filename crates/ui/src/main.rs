//! `timerlog` -- terminal front-end for the countdown timer.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                 | Description          |
//! |-----------------------|----------|-------------------------|----------------------|
//! | `TIMERLOG_SERVER_URL` | no       | `http://localhost:3000` | timerlog API server  |

use std::io::Write;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timerlog_ui::client::TimerLogClient;
use timerlog_ui::countdown::DEFAULT_MINUTES;
use timerlog_ui::display::{format_clock, render_log_table};
use timerlog_ui::page::TimerPage;

#[derive(Parser)]
#[command(
    name = "timerlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Countdown timer that records every run",
    long_about = None
)]
struct Cli {
    /// Base URL of the timerlog API server
    #[arg(
        global = true,
        long,
        env = "TIMERLOG_SERVER_URL",
        default_value = "http://localhost:3000"
    )]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a countdown and record its start. Ctrl-C pauses and exits.
    Run {
        /// Countdown length in minutes
        #[arg(short, long, default_value_t = DEFAULT_MINUTES)]
        minutes: u32,

        /// Optional label stored with the run (max 80 characters)
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Print the most recent runs
    Logs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timerlog_ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = TimerLogClient::new(cli.server);

    match cli.command {
        Command::Run { minutes, label } => run(client, minutes, label).await,
        Command::Logs => {
            let mut page = TimerPage::new(client, DEFAULT_MINUTES);
            let loading = page.subscribe_loading();
            tokio::join!(page.load(), announce_loading(loading));
            print!("{}", render_log_table(page.logs(), page.loading_logs()));
            Ok(())
        }
    }
}

async fn run(client: TimerLogClient, minutes: u32, label: Option<String>) -> anyhow::Result<()> {
    let mut page = TimerPage::new(client, minutes);
    let loading = page.subscribe_loading();
    tokio::join!(page.load(), announce_loading(loading));

    let mut updates = page.subscribe();
    if !page.start(label.as_deref()).await {
        bail!("minutes must be greater than 0");
    }
    println!("{}", render_log_table(page.logs(), page.loading_logs()));

    let mut stdout = std::io::stdout();
    loop {
        let countdown = *updates.borrow_and_update();
        print!("\r{}", format_clock(countdown.remaining_seconds()));
        stdout.flush()?;

        if !countdown.running() {
            println!("\nTime is up.");
            break;
        }

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                page.pause();
                println!("\nPaused at {}.", format_clock(page.countdown().remaining_seconds()));
                break;
            }
        }
    }

    let loading = page.subscribe_loading();
    tokio::join!(page.refresh_logs(), announce_loading(loading));
    print!("{}", render_log_table(page.logs(), page.loading_logs()));
    Ok(())
}

/// Print the loading placeholder once a fetch starts.
async fn announce_loading(mut loading: watch::Receiver<bool>) {
    if loading.changed().await.is_ok() && *loading.borrow_and_update() {
        eprintln!("{}", render_log_table(&[], true));
    }
}
