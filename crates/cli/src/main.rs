use clap::{Parser, Subcommand};
use shortuid::{from_short, is_conforming, matches, to_short, ShortUidError, Uuid};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "shortuid")]
#[command(about = "Convert between UUIDs and 12-character short UIDs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a UUID as a short UID
    Encode {
        /// UUID in hyphenated or simple form
        uuid: String,
        /// Fail unless the UUID has the 0x80 marker byte and zero tail
        #[arg(long)]
        strict: bool,
    },
    /// Decode a short UID into a UUID
    Decode {
        /// 12-character short UID
        #[arg(allow_hyphen_values = true)]
        short: String,
    },
    /// Check whether a string is a well-formed short UID
    Check {
        /// Candidate short UID
        #[arg(allow_hyphen_values = true)]
        short: String,
    },
}

/// What a successful command prints, and whether it reports success.
///
/// `check` prints its verdict either way, so an invalid candidate is not an error.
#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    output: String,
    success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

fn run(command: Commands) -> anyhow::Result<Outcome> {
    match command {
        Commands::Encode { uuid, strict } => {
            let uuid = Uuid::parse_str(&uuid)
                .map_err(|e| anyhow::anyhow!("invalid UUID '{}': {}", uuid, e))?;
            if strict && !is_conforming(uuid) {
                return Err(ShortUidError::NonConforming { uuid }.into());
            }
            Ok(Outcome::ok(to_short(uuid)))
        }
        Commands::Decode { short } => Ok(Outcome::ok(from_short(&short)?.hyphenated().to_string())),
        Commands::Check { short } => {
            let success = matches(&short);
            Ok(Outcome {
                output: if success { "valid" } else { "invalid" }.into(),
                success,
            })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(Outcome { output, success }) => {
            println!("{}", output);
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> anyhow::Result<Outcome> {
        let cli = Cli::try_parse_from(std::iter::once("shortuid").chain(args.iter().copied()))?;
        run(cli.command)
    }

    #[test]
    fn test_encode() {
        let out = run_args(&["encode", "90b39068-b85e-4ecd-8000-000000000000"]).unwrap();
        assert_eq!(out, Outcome::ok("kLOQaLheTs2A"));
    }

    #[test]
    fn test_encode_strict_rejects_non_conforming() {
        let uuid = "550e8400-e29b-41d4-a716-446655440000";

        assert!(run_args(&["encode", uuid]).is_ok());
        let err = run_args(&["encode", "--strict", uuid]).unwrap_err();
        assert!(err.downcast_ref::<ShortUidError>().is_some());
    }

    #[test]
    fn test_encode_rejects_garbage() {
        assert!(run_args(&["encode", "not-a-uuid"]).is_err());
    }

    #[test]
    fn test_decode() {
        let out = run_args(&["decode", "9We21-KDSkeA"]).unwrap();
        assert_eq!(out, Outcome::ok("f567b6d7-e283-4a47-8000-000000000000"));
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        let err = run_args(&["decode", "9We21-KDSke"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShortUidError>(),
            Some(ShortUidError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_check() {
        assert_eq!(run_args(&["check", "------------"]).unwrap(), Outcome::ok("valid"));
    }

    #[test]
    fn test_check_prints_invalid_and_fails() {
        for candidate in ["89fwkfnd=abc", "9We21-KDSke"] {
            assert_eq!(
                run_args(&["check", candidate]).unwrap(),
                Outcome {
                    output: "invalid".into(),
                    success: false,
                }
            );
        }
    }
}
