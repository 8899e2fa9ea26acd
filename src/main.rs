mod bruteforce;
mod classifier;
mod cli;
mod constants;
mod error;
mod error_detection;
mod http_client;
mod interactive;
mod models;
mod output;
mod wordlist;

use anyhow::{Context, Result};
use bruteforce::BruteforceEngine;
use classifier::{Heuristics, ResponseClassifier};
use cli::Cli;
use http_client::{HttpClient, SessionConfig};
use output::OutputFormatter;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = <Cli as clap::Parser>::parse();

    let target = match &cli.url {
        Some(url) => url.clone(),
        None => interactive::prompt_target(constants::DEFAULT_TARGET_URL)?,
    };

    let classifier = ResponseClassifier::new(Heuristics {
        success_selector: cli.success_selector.clone(),
        error_selector: cli.error_selector.clone(),
        session_marker: cli.session_marker.clone(),
        welcome_marker: cli.welcome_marker.clone(),
        image_heuristic: !cli.no_image_heuristic,
        welcome_heuristic: !cli.no_welcome_heuristic,
    })
    .context("Invalid response classifier settings")?;

    let users = wordlist::load_wordlist(&cli.users).context("Failed to load usernames")?;
    let passwords = wordlist::load_wordlist(&cli.passwords).context("Failed to load passwords")?;

    let session = SessionConfig {
        target: target.clone(),
        cookies: cli.session_cookies(),
        submit_field: cli.submit_field.clone(),
        submit_value: cli.submit_value.clone(),
        timeout: cli.timeout.map(Duration::from_secs),
        verbose: cli.verbose,
    };
    let client = HttpClient::new(&session).context("Failed to set up HTTP session")?;

    OutputFormatter::print_header(&target, users.len(), passwords.len());

    let engine = BruteforceEngine::new(&client, &classifier, cli.stop_on_success);
    let results = engine.bruteforce(&target, &users, &passwords);

    println!("{}", OutputFormatter::format(&results, &cli.output));

    if results.outcome.is_aborted() {
        std::process::exit(constants::EXIT_ABORTED);
    }
    Ok(())
}
