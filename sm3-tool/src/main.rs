#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::expect_used, clippy::unwrap_used))]

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::debug;

use sm3::{HmacContext, Output};

/// SM3 cryptographic hash (GM/T 0004-2012) of strings and files.
#[derive(Debug, Parser)]
#[command(name = "sm3-tool", version)]
#[command(group(ArgGroup::new("input").required(true).multiple(true).args(["string", "file"])))]
#[command(after_help = "Examples:\n  sm3-tool -s \"abc\"\n  sm3-tool -f test.txt\n  sm3-tool -k secret -s \"abc\"")]
struct Args {
    /// Hash the UTF-8 bytes of STRING
    #[arg(short = 's', long = "string", value_name = "STRING")]
    string: Option<String>,

    /// Hash the contents of FILE
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Compute HMAC-SM3 with KEY instead of a plain digest
    #[arg(short = 'k', long = "hmac-key", value_name = "KEY")]
    hmac_key: Option<String>,

    /// Decode --hmac-key as hex
    #[arg(long, requires = "hmac_key")]
    hex_key: bool,
}

enum Mode {
    Plain,
    Hmac(HmacContext),
}

impl Mode {
    fn from_args(args: &Args) -> Result<Mode> {
        let key = match &args.hmac_key {
            None => return Ok(Mode::Plain),
            Some(key) if args.hex_key => hex::decode(key).context("--hmac-key is not valid hex")?,
            Some(key) => key.as_bytes().to_vec(),
        };
        debug!(key_len = key.len(), "hmac mode");
        Ok(Mode::Hmac(HmacContext::new(&key)?))
    }

    fn label(&self) -> &'static str {
        match self {
            Mode::Plain => "SM3",
            Mode::Hmac(_) => "HMAC-SM3",
        }
    }

    fn digest(&self, message: &[u8]) -> Result<Output, sm3::Error> {
        match self {
            Mode::Plain => sm3::hash_bytes(message),
            Mode::Hmac(ctx) => ctx.authenticate(message),
        }
    }
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();
    let mode = Mode::from_args(&args)?;

    if let Some(string) = &args.string {
        let digest = mode
            .digest(string.as_bytes())
            .context("failed to hash string input")?;
        println!("{} (string) = {}", mode.label(), hex::encode(digest));
    }

    if let Some(path) = &args.file {
        let digest = match &mode {
            Mode::Plain => sm3::hash_file(path),
            Mode::Hmac(_) => sm3::read_file(path).and_then(|contents| mode.digest(&contents)),
        }
        .with_context(|| format!("failed to hash file {}", path.display()))?;
        println!(
            "{} (file {}) = {}",
            mode.label(),
            path.display(),
            hex::encode(digest)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn requires_an_input() {
        assert!(Args::try_parse_from(["sm3-tool"]).is_err());
        assert!(Args::try_parse_from(["sm3-tool", "-k", "key"]).is_err());
    }

    #[test]
    fn accepts_string_and_file_together() {
        let args = Args::try_parse_from(["sm3-tool", "-s", "abc", "-f", "x.bin"]).unwrap();
        assert_eq!(args.string.as_deref(), Some("abc"));
        assert_eq!(args.file, Some(PathBuf::from("x.bin")));
    }

    #[test]
    fn hex_key_requires_key() {
        assert!(Args::try_parse_from(["sm3-tool", "-s", "abc", "--hex-key"]).is_err());
    }

    #[test]
    fn hex_key_is_decoded() {
        let args =
            Args::try_parse_from(["sm3-tool", "-s", "abc", "-k", "4a656665", "--hex-key"]).unwrap();
        let mode = Mode::from_args(&args).unwrap();
        assert_eq!(mode.label(), "HMAC-SM3");
        assert_eq!(
            mode.digest(b"abc").unwrap(),
            sm3::hmac(b"Jefe", b"abc").unwrap()
        );
    }

    #[test]
    fn invalid_hex_key_is_rejected() {
        let args = Args::try_parse_from(["sm3-tool", "-s", "abc", "-k", "zz", "--hex-key"]).unwrap();
        assert!(Mode::from_args(&args).is_err());
    }
}
