use std::process::ExitCode;

use clap::Parser;
use go_rules::Game;
use go_term::{Args, Session, TermError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_term=info,go_rules=warn".into()),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), TermError> {
    let config = args.game_config()?;
    let game = Game::new(config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock()).with_json(args.json);
    session.run()?;
    Ok(())
}
