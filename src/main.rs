use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    cocofy::logging::init().context("init logging")?;

    let cli = cocofy::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        cocofy::cli::Command::Convert(args) => {
            cocofy::convert::run(args).context("convert")?;
        }
        cocofy::cli::Command::Publish(args) => {
            cocofy::publish::run(args).await.context("publish")?;
        }
    }

    Ok(())
}
