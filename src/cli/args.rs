//! Command-line argument definitions for the exoplanet portal
//!
//! This module defines the CLI interface using the clap derive API. Each
//! `upload` invocation is one file selection on the data portal.

use crate::app::models::FileKind;
use crate::app::services::display::GroupId;
use crate::config::PortalConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for the exoplanet data portal
#[derive(Debug, Clone, Parser)]
#[command(
    name = "portal",
    version,
    about = "Preview your own planetary data and explore the Kepler sample planet",
    long_about = "Bring your own observations: pick a local CSV or .dat file to preview its first \
                  rows and run it through the (simulated) upload, or open the planet detail card \
                  for the bundled Kepler sample planet or any KOI snapshot file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Select a file, preview it and run the simulated upload
    Upload(UploadArgs),
    /// Show the detail card of the bundled sample planet
    Sample(CardArgs),
    /// Show the detail card of the first planet in a snapshot file
    Inspect(InspectArgs),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Upload target type
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileTypeArg {
    Csv,
    Dat,
}

impl From<FileTypeArg> for FileKind {
    fn from(arg: FileTypeArg) -> Self {
        match arg {
            FileTypeArg::Csv => FileKind::Csv,
            FileTypeArg::Dat => FileKind::Dat,
        }
    }
}

/// Field groups to show on a planet card
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    Transit,
    Planetary,
    Stellar,
    All,
}

impl GroupArg {
    pub fn groups(self) -> Vec<GroupId> {
        match self {
            GroupArg::Transit => vec![GroupId::Transit],
            GroupArg::Planetary => vec![GroupId::Planetary],
            GroupArg::Stellar => vec![GroupId::Stellar],
            GroupArg::All => vec![GroupId::Transit, GroupId::Planetary, GroupId::Stellar],
        }
    }
}

/// Arguments for the upload command
#[derive(Debug, Clone, Parser)]
pub struct UploadArgs {
    /// File to select; omitting it selects nothing
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Upload target the file is selected for
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        default_value_t = FileTypeArg::Csv,
        help = "Upload target: csv or dat"
    )]
    pub file_type: FileTypeArg,

    /// MIME type reported for the file
    ///
    /// A CSV target accepts any file name when the MIME type is text/csv.
    #[arg(long = "mime", value_name = "TYPE")]
    pub mime_type: Option<String>,

    /// Delay of the simulated submission in milliseconds
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Number of non-empty lines shown in the preview
    #[arg(long = "preview-lines", value_name = "COUNT")]
    pub preview_lines: Option<usize>,

    /// Make the simulated submission reject
    #[arg(long = "fail-submission")]
    pub fail_submission: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and the final result
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for commands rendering a planet card
#[derive(Debug, Clone, Parser)]
pub struct CardArgs {
    /// Field group to show
    #[arg(short = 'g', long = "group", value_enum, default_value_t = GroupArg::All)]
    pub group: GroupArg,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Snapshot file (comma-delimited, `#` comment lines allowed)
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    #[command(flatten)]
    pub card: CardArgs,
}

impl UploadArgs {
    /// Layer CLI overrides on top of a base configuration
    pub fn apply_to(&self, mut config: PortalConfig) -> PortalConfig {
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_upload_delay(Duration::from_millis(delay_ms));
        }
        if let Some(lines) = self.preview_lines {
            config = config.with_preview_lines(lines);
        }
        if self.fail_submission {
            config = config.with_failing_submission();
        }
        config
    }

    /// Validate arguments that do not belong to the upload cycle itself
    ///
    /// A missing or mistyped file is not an argument error: it ends the
    /// session in `error` like any other bad selection.
    pub fn validate(&self) -> Result<()> {
        if let Some(mime) = &self.mime_type {
            if mime.trim().is_empty() {
                return Err(Error::configuration("MIME type must not be empty"));
            }
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level(self.verbose)
        }
    }

    /// Check if we should show the progress spinner (not in quiet or JSON mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Human
    }
}

impl CardArgs {
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_subcommand() {
        assert!(parse(&["portal"]).command.is_none());
    }

    #[test]
    fn test_upload_defaults() {
        let args = parse(&["portal", "upload", "koi.csv"]);
        let Some(Commands::Upload(upload)) = args.command else {
            panic!("expected upload command");
        };

        assert_eq!(upload.path, Some(PathBuf::from("koi.csv")));
        assert_eq!(upload.file_type, FileTypeArg::Csv);
        assert_eq!(upload.format, OutputFormat::Human);
        assert_eq!(upload.get_log_level(), "warn");
        assert!(upload.show_progress());
    }

    #[test]
    fn test_upload_overrides_config() {
        let args = parse(&[
            "portal",
            "upload",
            "lc.dat",
            "--type",
            "dat",
            "--delay-ms",
            "50",
            "--preview-lines",
            "3",
            "--fail-submission",
            "-vv",
        ]);
        let Some(Commands::Upload(upload)) = args.command else {
            panic!("expected upload command");
        };

        assert_eq!(FileKind::from(upload.file_type), FileKind::Dat);
        assert_eq!(upload.get_log_level(), "debug");

        let config = upload.apply_to(PortalConfig::default());
        assert_eq!(config.upload_delay_ms, 50);
        assert_eq!(config.preview_lines, 3);
        assert_eq!(
            config.submission_outcome,
            crate::config::SimulatedOutcome::Reject
        );
    }

    #[test]
    fn test_upload_without_file() {
        let args = parse(&["portal", "upload", "-q"]);
        let Some(Commands::Upload(upload)) = args.command else {
            panic!("expected upload command");
        };

        assert!(upload.path.is_none());
        assert_eq!(upload.get_log_level(), "error");
        assert!(!upload.show_progress());
    }

    #[test]
    fn test_empty_mime_is_rejected() {
        let args = parse(&["portal", "upload", "x.csv", "--mime", " "]);
        let Some(Commands::Upload(upload)) = args.command else {
            panic!("expected upload command");
        };
        assert!(upload.validate().is_err());
    }

    #[test]
    fn test_inspect_with_group() {
        let args = parse(&["portal", "inspect", "koi.csv", "--group", "stellar", "-f", "json"]);
        let Some(Commands::Inspect(inspect)) = args.command else {
            panic!("expected inspect command");
        };

        assert_eq!(inspect.card.group.groups(), vec![GroupId::Stellar]);
        assert_eq!(inspect.card.format, OutputFormat::Json);
    }

    #[test]
    fn test_group_all() {
        assert_eq!(GroupArg::All.groups().len(), 3);
    }
}
