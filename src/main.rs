//! `teamodes` binary entry point.
//!
//! Startup sequence:
//! 1. Parse the command line.
//! 2. Load and validate [`config::Config`] from environment variables.
//! 3. Initialise logging.
//! 4. Resolve key and IV, then run the subcommand.

mod cli;
mod config;
mod telemetry;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use cli::{Cli, Command, ModeArg, Secrets};
use teamodes::demo::{self, OutputPaths};
use teamodes::{params, Iv, Key, Mode};

fn resolve_key(secrets: &Secrets, cfg: &config::Config) -> Result<Key> {
    let text = match secrets.key.as_ref().or(cfg.key.as_ref()) {
        Some(text) => text.as_str(),
        None => {
            warn!("no key given, using the well-known demo key");
            params::DEFAULT_KEY
        }
    };
    params::parse_key(text).context("invalid key")
}

fn resolve_iv(secrets: &Secrets, cfg: &config::Config) -> Result<Iv> {
    let text = match secrets.iv.as_ref().or(cfg.iv.as_ref()) {
        Some(text) => text.as_str(),
        None => {
            warn!("no IV given, using the well-known demo IV");
            params::DEFAULT_IV
        }
    };
    params::parse_iv(text).context("invalid IV")
}

fn resolve_mode(mode: ModeArg, secrets: &Secrets, cfg: &config::Config) -> Result<Mode> {
    Ok(match mode {
        ModeArg::Ecb => Mode::Ecb,
        ModeArg::Cbc => Mode::Cbc(resolve_iv(secrets, cfg)?),
    })
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

fn run(command: Command, cfg: &config::Config) -> Result<()> {
    match command {
        Command::Demo { input, out_dir, secrets } => {
            let key = resolve_key(&secrets, cfg)?;
            let iv = resolve_iv(&secrets, cfg)?;
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            demo::run_files(&input, &OutputPaths::in_dir(&out_dir), &key, &iv)?;
            info!(out_dir = %out_dir.display(), "demo complete");
        }
        Command::Encrypt { input, output, mode, secrets } => {
            let key = resolve_key(&secrets, cfg)?;
            let mode = resolve_mode(mode, &secrets, cfg)?;
            let plaintext = read(&input)?;
            write(&output, &mode.encrypt_bytes(&key, &plaintext))?;
            // Padding is silent, so this is the only record of the length.
            info!(%mode, length = plaintext.len(), "encrypted; pass --length {} to decrypt", plaintext.len());
        }
        Command::Decrypt { input, output, mode, length, secrets } => {
            let key = resolve_key(&secrets, cfg)?;
            let mode = resolve_mode(mode, &secrets, cfg)?;
            let ciphertext = read(&input)?;
            let length = length.unwrap_or(ciphertext.len());
            write(&output, &mode.decrypt_bytes(&key, &ciphertext, length)?)?;
            info!(%mode, length, "decrypted");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = config::Config::from_env().map_err(|e| {
        eprintln!("ERROR: teamodes configuration invalid: {e:#}");
        e
    })?;

    telemetry::init(&cfg.log_level, cfg.log_json)?;

    run(cli.command, &cfg)
}
