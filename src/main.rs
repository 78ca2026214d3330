use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use staff_roster::utils::logger;
use staff_roster::{run_session, AppConfig, CliConfig, Company, LocalStorage, StdConsole};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting staff-roster");

    if let Err(e) = run(cli) {
        tracing::error!("fatal: {:#}", e);
        eprintln!("{} {:#}", "error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: CliConfig) -> anyhow::Result<()> {
    let config = AppConfig::resolve(cli).context("could not resolve configuration")?;
    tracing::debug!(?config, "configuration resolved");

    let storage = LocalStorage::new(".");
    let mut company = Company::load(&storage, &config.data_file)
        .with_context(|| format!("could not load {}", config.data_file))?;

    let mut console = StdConsole::new();
    run_session(&mut company, &mut console, &config.cancel_token)?;

    // Normal shutdown is the one write of the session.
    company
        .save(&storage, &config.data_file)
        .with_context(|| format!("could not save {}", config.data_file))?;
    println!("Saved {}.", config.data_file);

    Ok(())
}
