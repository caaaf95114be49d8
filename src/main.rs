use std::process::ExitCode;

use clap::Parser;
use moment::constants as C;
use moment::{Cli, Command, Context, LinePrompt};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> moment::Result<()> {
    let mut ctx = Context::new(cli.config.as_deref(), cli.workspace.as_deref(), cli.json)?;

    match cli.command {
        Command::Create => cmd::daily::create(&mut ctx, &mut LinePrompt::stdio()),
        Command::View => cmd::daily::view(&mut ctx, &mut LinePrompt::stdio()),
        Command::Todo(todo_cmd) => cmd::todo::run(&ctx, &mut LinePrompt::stdio(), todo_cmd),
        Command::Config { action } => cmd::config::run(&mut ctx, action),
    }
}

/// Log to stderr; MOMENT_LOG overrides the -v level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(C::ENV_LOG).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

mod cmd {
    pub mod config;
    pub mod daily;
    pub mod todo;
}
