//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "teamodes", version, about = "TEA in ECB and CBC mode over raw byte files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Key and IV flags shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct Secrets {
    /// Key as four comma-separated hex words, e.g.
    /// 0x12345678,0x12345678,0x99AABBCC,0x99AABBCC
    #[arg(long, short)]
    pub key: Option<String>,

    /// CBC IV as two comma-separated hex words, e.g. 0x11111111,0x22222222
    #[arg(long)]
    pub iv: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encrypt and decrypt INPUT under both ECB and CBC, writing all four
    /// results into OUT_DIR
    Demo {
        input: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        #[command(flatten)]
        secrets: Secrets,
    },
    /// Encrypt INPUT into OUTPUT, zero-padded to whole blocks
    Encrypt {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum)]
        mode: ModeArg,
        #[command(flatten)]
        secrets: Secrets,
    },
    /// Decrypt INPUT into OUTPUT, truncated to LENGTH bytes
    Decrypt {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum)]
        mode: ModeArg,
        /// Plaintext length before padding; defaults to the ciphertext length
        #[arg(long)]
        length: Option<usize>,
        #[command(flatten)]
        secrets: Secrets,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Ecb,
    Cbc,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_decrypt() {
        let cli = Cli::try_parse_from([
            "teamodes", "decrypt", "in.bin", "out.raw", "--mode", "cbc", "--length", "35", "--iv", "1,2",
        ])
        .unwrap();
        match cli.command {
            Command::Decrypt { mode, length, secrets, .. } => {
                assert_eq!(mode, ModeArg::Cbc);
                assert_eq!(length, Some(35));
                assert_eq!(secrets.iv.as_deref(), Some("1,2"));
                assert!(secrets.key.is_none());
            }
            other => panic!("parsed as {:?}", other),
        }
    }

    #[test]
    fn mode_is_required() {
        assert!(Cli::try_parse_from(["teamodes", "encrypt", "a", "b"]).is_err());
    }
}
