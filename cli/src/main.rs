use clap::Parser;
use economy::{
    AudioEvent, EconomyConfig, EconomyEvents, PlayerId, Treasury, FRAMES_PER_SECOND,
};
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::path::PathBuf;
use warchest_storage::SaveStore;

#[derive(Parser)]
#[command(name = "warchest")]
#[command(about = "Deterministic skirmish economy driver")]
struct Cli {
    /// Path to skirmish configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Logic frames to simulate (30 per simulation second)
    #[arg(long, default_value_t = 5_400)]
    frames: u64,

    /// Directory holding save slots
    #[arg(long, value_name = "DIR", default_value = "saves")]
    save_dir: PathBuf,

    /// Resume the treasury from this slot instead of the configured cash
    #[arg(long, value_name = "SLOT")]
    load_slot: Option<String>,

    /// Save the final treasury into this slot
    #[arg(long, value_name = "SLOT")]
    save_slot: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Config {
    #[serde(default)]
    economy: EconomyConfig,
}

fn load_config(path: &PathBuf) -> economy::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| economy::EconomyError::ConfigParse(e.to_string()))
}

/// Forwards treasury side effects to the log and keeps counters for the
/// end-of-run report.
#[derive(Default)]
struct ConsoleEvents {
    sounds: u64,
    income_events: u64,
}

impl EconomyEvents for ConsoleEvents {
    fn money_sound(&mut self, event: &AudioEvent) {
        self.sounds += 1;
        log::debug!(
            "audio {} for player {} at volume {:.2}",
            event.cue,
            event.player.0,
            event.volume
        );
    }

    fn income_recorded(&mut self, player: PlayerId) {
        self.income_events += 1;
        log::trace!("income recorded for player {}", player.0);
    }
}

/// Fixed skirmish script: a supply convoy docks every five seconds, a build
/// order lands every twenty. Everything is keyed to the frame counter, so
/// the same frame count always produces the same treasury.
fn run_skirmish(treasury: &mut Treasury, frames: u64, events: &mut ConsoleEvents) {
    for frame in 0..frames {
        treasury.update_income_window(frame);

        if frame > 0 && frame % (5 * FRAMES_PER_SECOND) == 0 {
            treasury.deposit(300, true, events);
        }

        if frame > 0 && frame % (20 * FRAMES_PER_SECOND) == 0 {
            let paid = treasury.withdraw(800, true, events);
            if paid < 800 {
                log::warn!("build order short-paid: {} of 800", paid);
            }
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load config: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let store = if cli.load_slot.is_some() || cli.save_slot.is_some() {
        match SaveStore::open(&cli.save_dir) {
            Ok(store) => Some(store),
            Err(e) => {
                eprintln!("Could not open save directory: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let mut treasury = Treasury::new(PlayerId(0));
    config.economy.init_treasury(&mut treasury);

    if let (Some(slot), Some(store)) = (&cli.load_slot, &store) {
        let loaded = store
            .load_treasury(slot)
            .map_err(|e| e.to_string())
            .and_then(|snapshot| treasury.restore(&snapshot).map_err(|e| e.to_string()));
        match loaded {
            Ok(()) => println!("{} resumed from slot '{}'", "✓".green(), slot),
            Err(e) => {
                eprintln!("Could not load slot '{}': {}", slot, e);
                std::process::exit(1);
            }
        }
    }

    println!("{}", "Warchest skirmish".cyan().bold());
    println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
    println!(
        "{}: {} frames ({} s)",
        "Script".yellow().bold(),
        cli.frames,
        cli.frames / FRAMES_PER_SECOND
    );

    let mut events = ConsoleEvents::default();
    run_skirmish(&mut treasury, cli.frames, &mut events);

    println!(
        "{}: {}",
        "Balance".yellow().bold(),
        treasury.balance().to_string().green()
    );
    println!(
        "{}: {}",
        "Cash per minute".yellow().bold(),
        treasury.cash_per_minute().to_string().green()
    );
    println!(
        "{}: {} income events, {} sounds",
        "Side effects".yellow().bold(),
        events.income_events,
        events.sounds
    );

    if let (Some(slot), Some(store)) = (&cli.save_slot, &store) {
        match store.save_treasury(slot, &treasury.snapshot()) {
            Ok(()) => println!("{} saved to slot '{}'", "✓".green(), slot),
            Err(e) => {
                eprintln!("Could not save slot '{}': {}", slot, e);
                std::process::exit(1);
            }
        }
    }
}
