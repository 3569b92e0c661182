mod config;
mod session;
mod ui;

use clap::Parser;

use common::engine::SessionRng;
use common::logger::init_logger;

use config::get_config_manager;
use session::{SessionSettings, run_session};

#[derive(Parser)]
#[command(
    name = "tictactoe_client",
    about = "Play Tic-Tac-Toe against an optimal computer opponent"
)]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Seed for the session RNG (random bot moves, random first player)
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress diagnostic log lines
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logger(Some("client".to_string()), !args.quiet);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = config_manager.get_config()?;
    // Persist so the first run leaves an editable config file behind.
    config_manager.set_config(&config)?;

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    common::log!("Session seed: {}", rng.seed());

    let settings = SessionSettings {
        bot_type: config.bot_type.into(),
        first_player_mode: config.first_player.into(),
        show_index_map: config.show_index_map,
    };

    run_session(&settings, &mut rng);

    Ok(())
}
