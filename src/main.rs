use anyhow::{Context, Result};
use calcpad::calculator::{ButtonRegistry, Calculator};
use calcpad::config::Config;
use calcpad::replay::{ReplayEvent, replay};
use calcpad::script::parse_script;
use calcpad::ui::{KEYPAD_COLUMNS, render_display, render_keypad};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Press calculator buttons from the command line.
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
struct Args {
    /// Buttons to press, e.g. `12 + 3 x 4 =`
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    script: Vec<String>,

    /// Path to the config file (defaults to <config dir>/calcpad/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Print the display after every press
    #[arg(long)]
    steps: bool,

    /// Render the keypad under the display
    #[arg(long)]
    keypad: bool,

    /// Replay presses this many milliseconds apart, firing highlight timers
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn describe(event: &ReplayEvent, calc: &Calculator) -> String {
    let highlight = calc.state().last_click.as_deref().unwrap_or("-");
    match event {
        ReplayEvent::Pressed { label, elapsed } => format!(
            "{:>6}ms  press {:<2}  display {}  highlight {}",
            elapsed.as_millis(),
            label,
            calc.state().value,
            highlight
        ),
        ReplayEvent::HighlightCleared { elapsed } => format!(
            "{:>6}ms  clear     display {}  highlight {}",
            elapsed.as_millis(),
            calc.state().value,
            highlight
        ),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let labels = parse_script(&args.script.join(" ")).context("Invalid button script")?;
    tracing::debug!(presses = labels.len(), "script parsed");

    let mut calc = Calculator::new(ButtonRegistry::new(config.highlight_timeout()));

    if let Some(interval_ms) = args.interval_ms {
        replay(
            &mut calc,
            &labels,
            Duration::from_millis(interval_ms),
            |event, calc| println!("{}", describe(event, calc)),
        )
        .await;
    } else {
        for label in &labels {
            calc.press_label(label);
            if args.steps {
                println!("{label:<2} {}", calc.state().value);
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calc.snapshot())?);
        return Ok(());
    }

    let width = config.keypad_width;
    let display_width = KEYPAD_COLUMNS * width + (KEYPAD_COLUMNS - 1);
    println!("{}", render_display(calc.state(), display_width));

    if args.keypad {
        println!("{}", render_keypad(calc.registry(), calc.state(), width));
    }

    Ok(())
}
