mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("PICKER_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Adapt { input, search } => {
            let ctx = CliContext::load(cli, input).await?;
            handlers::adapt::handle(&ctx, search)?;
        }
        Commands::Page(args) => {
            let ctx = CliContext::load(cli, &args.input).await?;
            handlers::page::handle(&ctx, args)?;
        }
        Commands::Replay { input, events } => {
            let ctx = CliContext::load(cli, input).await?;
            handlers::replay::handle(&ctx, events).await?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "picker",
                &mut std::io::stdout(),
            );
        }
    }
    Ok(())
}
