use std::io;

use clap::Parser;
use kibitz::chess::game::Game;
use kibitz::Frontend;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Chess board that highlights where pieces can go, driven by `hover <square>`
/// and `click <square>` commands on stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Config {
    /// Verbosity of the logs written to stderr.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Initial position: `startpos` or a piece placement in FEN notation.
    #[arg(long)]
    position: Option<String>,

    /// Do not print the board after every event.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    TermLogger::init(
        config.log_level,
        ConfigBuilder::new()
            .set_time_level(LevelFilter::Off)
            .set_thread_level(LevelFilter::Off)
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    log::info!("kibitz {}", kibitz::version());
    log::info!("{}", kibitz::build_info());
    log::debug!("{config:?}");

    let game = Game::try_from(config.position.as_deref().unwrap_or("startpos"))?;

    let mut frontend =
        Frontend::new(game, io::stdin().lock(), io::stdout().lock()).quiet(config.quiet);
    frontend.run()
}
