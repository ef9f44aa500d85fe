use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use vault_keys::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let max_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(max_level)
        .init();

    let mut vault = match &args.input_path {
        Some(input_path) => vault_keys::read_vault(input_path).with_context(|| {
            format!(
                "Failed to read vault from given file({}).",
                input_path.display()
            )
        })?,
        None => vault_keys::read_vault_from(io::stdin().lock(), "standard input")
            .context("Failed to read vault from standard input.")?,
    };

    if args.split_entrance {
        vault = vault
            .split_entrance()
            .context("Failed to split entrance of given vault.")?;
    }

    let min_steps_n = vault_keys::min_collect_steps_n(&vault)?;
    info!(
        "The shortest path to collect keys {} with {} collector(s) has {} steps.",
        vault.all_keys(),
        vault.entrance_n(),
        min_steps_n
    );
    println!("{}", min_steps_n);

    Ok(())
}
