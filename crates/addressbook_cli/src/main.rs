//! CLI probe for the address book core.
//!
//! # Responsibility
//! - Check single field values through the core field parser.
//! - Print the sample roster for quick local sanity checks.
//!
//! Command dispatch for real address book editing lives elsewhere; this
//! binary only exercises core wiring.

use addressbook_core::testutil::typical_address_book;
use addressbook_core::{
    core_version, default_log_level, init_logging, parse_date, parse_duration, parse_email,
    parse_event, parse_index, parse_name, parse_phone, parse_tag, parse_time, ping, LogLevel,
    ParseError,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "addressbook", version, about = "Address book core probe")]
struct Cli {
    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core health and version.
    Ping,
    /// Parse one field value and print its normalized form.
    Check {
        #[arg(value_enum)]
        field: Field,
        value: String,
    },
    /// Print the sample contacts as JSON lines.
    Sample {
        /// Only print contacts with this whole word in their name.
        #[arg(long)]
        keyword: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Field {
    Index,
    Name,
    Phone,
    Email,
    Tag,
    Date,
    Time,
    Duration,
    Event,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Why: validate `--log-level` even when logging stays off, so a typo is
    // reported instead of silently ignored.
    let level = resolve_log_level(cli.log_level.as_deref())?;
    if let Some(log_dir) = &cli.log_dir {
        init_logging(level, log_dir).context("logging setup failed")?;
    }

    match cli.command {
        Command::Ping => {
            println!("addressbook_core ping={}", ping());
            println!("addressbook_core version={}", core_version());
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { field, value } => match check_field(field, &value) {
            Ok(normalized) => {
                println!("{normalized}");
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("{err}");
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Sample { keyword } => {
            let book = typical_address_book();
            let persons: Vec<_> = match keyword.as_deref() {
                Some(keyword) => book.find_by_name_keyword(keyword),
                None => book.persons().iter().collect(),
            };
            info!(
                "event=sample_print module=cli status=ok count={}",
                persons.len()
            );
            for person in persons {
                println!("{}", serde_json::to_string(person)?);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_log_level(raw: Option<&str>) -> Result<LogLevel> {
    match raw {
        Some(raw) => Ok(raw.parse::<LogLevel>()?),
        None => Ok(default_log_level()),
    }
}

fn check_field(field: Field, value: &str) -> Result<String, ParseError> {
    let normalized = match field {
        Field::Index => parse_index(value)?.to_string(),
        Field::Name => parse_name(value)?.to_string(),
        Field::Phone => parse_phone(value)?.to_string(),
        Field::Email => parse_email(value)?.to_string(),
        Field::Tag => parse_tag(value)?.to_string(),
        Field::Date => parse_date(value)?.format("%Y-%m-%d").to_string(),
        Field::Time => parse_time(value)?.format("%H:%M").to_string(),
        Field::Duration => format_duration(parse_duration(value)?),
        Field::Event => parse_event(value)?.to_string(),
    };
    Ok(normalized)
}

fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    match total_minutes % 60 {
        0 => format!("{}h", total_minutes / 60),
        minutes => format!("{}h{}m", total_minutes / 60, minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::{check_field, format_duration, resolve_log_level, run, Cli, Field};
    use addressbook_core::{default_log_level, LogLevel, ParseError};
    use clap::{CommandFactory, Parser};
    use std::time::Duration;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_is_validated_without_log_dir() {
        assert_eq!(resolve_log_level(None).unwrap(), default_log_level());
        assert_eq!(resolve_log_level(Some("WARN")).unwrap(), LogLevel::Warn);

        let cli = Cli::try_parse_from(["addressbook", "--log-level", "verbose", "ping"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("unsupported log level"), "{err}");
    }

    #[test]
    fn check_field_prints_normalized_values() {
        assert_eq!(check_field(Field::Phone, " 9876 5432 ").unwrap(), "98765432");
        assert_eq!(check_field(Field::Duration, "1h90m").unwrap(), "2h30m");
        assert_eq!(check_field(Field::Duration, "2h0m").unwrap(), "2h");
        assert_eq!(check_field(Field::Time, "07:05:59").unwrap(), "07:05");
        assert_eq!(check_field(Field::Index, " 3 ").unwrap(), "3");
    }

    #[test]
    fn check_field_surfaces_parse_errors() {
        assert_eq!(
            check_field(Field::Date, "2024-02-30").unwrap_err(),
            ParseError::InvalidDate
        );
    }

    #[test]
    fn format_duration_drops_zero_minutes() {
        assert_eq!(format_duration(Duration::from_secs(45 * 60)), "0h45m");
        assert_eq!(format_duration(Duration::from_secs(3 * 3600)), "3h");
    }
}
