//! Counter CLI
//!
//! Drive a `counter-app` headlessly: seed it, click its controls, drain the
//! task queue and print what it renders.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use counter_app::prelude::*;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "counter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bounded counter widget", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Click the controls and print the resulting state
    Run {
        /// Actions to apply in order (`-` or `+`)
        #[arg(allow_hyphen_values = true)]
        actions: Vec<Action>,

        /// TOML file with initial count/min/max
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, allow_negative_numbers = true)]
        count: Option<i32>,

        #[arg(long, allow_negative_numbers = true)]
        min: Option<i32>,

        #[arg(long, allow_negative_numbers = true)]
        max: Option<i32>,

        /// Use the dark color scheme
        #[arg(long)]
        dark: bool,

        /// Animation frames to run after the last action (60 per second)
        #[arg(long, default_value = "0")]
        frames: u32,

        /// Print the rendered HTML
        #[arg(long)]
        html: bool,
    },

    /// Print the editor schema as JSON
    Schema,

    /// Print the token-based style sheet
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            actions,
            config,
            count,
            min,
            max,
            dark,
            frames,
            html,
        } => {
            let mut config = match config {
                Some(path) => CounterConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => CounterConfig::default(),
            };
            config.count = count.unwrap_or(config.count);
            config.min = min.unwrap_or(config.min);
            config.max = max.unwrap_or(config.max);

            cmd_run(&config, &actions, dark, frames, html)
        }
        Commands::Schema => cmd_schema(),
        Commands::Styles => {
            print!("{}", counter_app::styles());
            Ok(())
        }
    }
}

/// Final widget state after a run
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunSummary {
    count: i32,
    min: i32,
    max: i32,
    celebrations: u32,
    popped: bool,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "count={} min={} max={} celebrations={} popped={}",
            self.count, self.min, self.max, self.celebrations, self.popped
        )
    }
}

/// Mount the widget, apply `actions` and animate for `frames`
///
/// Every update cycle, including the first, is followed by draining the task
/// queue so deferred continuations land before the next step.
fn run_counter(app: &mut CounterApp, actions: &[Action], frames: u32) -> RunSummary {
    app.perform_update();
    app.tasks().run_until_idle();

    for &action in actions {
        if app.click(action) {
            info!("{} -> {}", action.label(), app.count());
        } else {
            info!("{} ignored at {}", action.label(), app.count());
        }
        app.perform_update();
        app.tasks().run_until_idle();
    }

    for _ in 0..frames {
        app.tick(1.0 / 60.0);
    }
    app.perform_update();

    let popped = app.confetti().lock().unwrap().is_popped();
    RunSummary {
        count: app.count(),
        min: app.min(),
        max: app.max(),
        celebrations: app.celebrations(),
        popped,
    }
}

fn cmd_run(
    config: &CounterConfig,
    actions: &[Action],
    dark: bool,
    frames: u32,
    html: bool,
) -> Result<()> {
    if dark {
        ThemeState::set_color_scheme(ColorScheme::Dark);
    }

    let mut app = CounterApp::from_config(config);
    let summary = run_counter(&mut app, actions, frames);
    println!("{}", summary);

    if html {
        println!("{}", app.to_html());
    }

    Ok(())
}

fn cmd_schema() -> Result<()> {
    let schema = CounterApp::hax_properties().context("building editor schema")?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
