//! CLI entry point - the composition root.
//!
//! Logging goes to stderr so stdout stays machine-readable for `call`,
//! `decode` and `available --json`.

use std::io;

use clap::{CommandFactory, Parser};

use membridge_cli::logging::env_filter;
use membridge_cli::presentation::exit_code_for;
use membridge_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .init();
}

fn fail(err: &CliError) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads MEMBRIDGE_* fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        if let Err(e) = Cli::command().print_help() {
            fail(&CliError::from(e));
        }
        return Ok(());
    };

    let mut stdout = io::stdout();

    // Decoding needs no probe, so it runs before bootstrap
    if let Commands::Decode { method, response } = command {
        if let Err(e) = handlers::decode::execute(&mut stdout, method, response) {
            fail(&e);
        }
        return Ok(());
    }

    let ctx = match bootstrap(CliConfig::from_cli(&cli)) {
        Ok(ctx) => ctx,
        Err(e) => fail(&e),
    };

    let outcome = match command {
        Commands::Call {
            method,
            arguments,
            encoding,
        } => handlers::call::execute(
            &mut stdout,
            &ctx,
            method,
            arguments.as_deref(),
            (*encoding).into(),
        )
        .await
        .map(|()| 0),
        Commands::Available { json } => handlers::available::execute(&mut stdout, &ctx, *json)
            .await
            .map(|result| exit_code_for(&result)),
        Commands::Capabilities => {
            handlers::capabilities::execute(&ctx);
            Ok(0)
        }
        Commands::Decode { .. } => Ok(0),
    };

    match outcome {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => fail(&e),
    }
}
