//! Thin command-line front end. Keys come from `--key`, `MODALPHA_KEY` or a
//! JSON config file; engine errors are printed exactly as the engine reports them.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use modalpha::config::load_cipher;
use modalpha::session::{read_cipher, run_session};
use modalpha::Cipher;

#[derive(Debug, Parser)]
#[command(name = "modalpha", version, about = "Modified-alphabet cipher over the Russian alphabet")]
struct Cli {
    /// Keyword made of Russian letters
    #[arg(long, global = true, env = "MODALPHA_KEY", hide_env_values = true)]
    key: Option<String>,

    /// JSON file describing where the keyword comes from
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypt open text
    Encrypt {
        text: String,
        /// Print a JSON report instead of the bare result
        #[arg(long)]
        json: bool,
    },
    /// Decrypt cipher text
    Decrypt {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the key fingerprint
    Fingerprint,
    /// Interactive console session
    Interactive,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransformReport<'a> {
    operation: &'a str,
    input: &'a str,
    output: &'a str,
    key_fingerprint: String,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("MODALPHA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn resolve_cipher(cli: &Cli) -> Result<Option<Cipher>> {
    if let Some(keyword) = &cli.key {
        let cipher = Cipher::new(keyword)?;
        info!(fingerprint = %cipher.fingerprint(), "cipher ready");
        return Ok(Some(cipher));
    }
    if let Some(path) = &cli.config {
        return Ok(Some(load_cipher(path)?));
    }
    Ok(None)
}

fn require_cipher(cli: &Cli) -> Result<Cipher> {
    match resolve_cipher(cli)? {
        Some(cipher) => Ok(cipher),
        None => bail!("no key supplied; use --key, MODALPHA_KEY or --config"),
    }
}

/// Renders a transform result: the bare output, or a JSON report.
fn render_transform(
    cipher: &Cipher,
    operation: &str,
    input: &str,
    output: &str,
    json: bool,
) -> Result<String> {
    if !json {
        return Ok(output.to_string());
    }
    let report = TransformReport {
        operation,
        input,
        output,
        key_fingerprint: cipher.fingerprint(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Encrypt { text, json } => {
            let cipher = require_cipher(&cli)?;
            let encrypted = cipher.encrypt(text)?;
            println!("{}", render_transform(&cipher, "encrypt", text, &encrypted, *json)?);
            Ok(())
        }
        Commands::Decrypt { text, json } => {
            let cipher = require_cipher(&cli)?;
            let decrypted = cipher.decrypt(text)?;
            println!("{}", render_transform(&cipher, "decrypt", text, &decrypted, *json)?);
            Ok(())
        }
        Commands::Fingerprint => {
            let cipher = require_cipher(&cli)?;
            println!("{}", cipher.fingerprint());
            Ok(())
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout().lock();
            let cipher = match resolve_cipher(&cli)? {
                Some(cipher) => cipher,
                None => match read_cipher(&mut input, &mut output)? {
                    Some(cipher) => cipher,
                    None => return Ok(()),
                },
            };
            let summary = run_session(&cipher, &mut input, &mut output)?;
            info!(
                completed = summary.completed,
                rejected = summary.rejected,
                "session finished"
            );
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
