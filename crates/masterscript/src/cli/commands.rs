//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// MasterScript - professional Bengali rural drama screenplays from a one-line concept
#[derive(Parser, Debug)]
#[command(name = "masterscript")]
#[command(about = "Generate Bengali rural drama screenplays and export them as text or PDF", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to the interactive screen)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file applied on top of the default locations
    #[arg(long, global = true, env = "MASTERSCRIPT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Launch the interactive screen
    Tui,

    /// Generate a screenplay without the interactive screen
    Generate {
        /// Story concept
        #[arg(long, conflicts_with = "surprise", required_unless_present = "surprise")]
        concept: Option<String>,

        /// Use a random preset concept
        #[arg(long)]
        surprise: bool,

        /// Seed for the preset picker
        #[arg(long, requires = "surprise")]
        seed: Option<u64>,

        /// Files to write
        #[arg(long, value_enum, default_value_t = OutputFormat::All)]
        format: OutputFormat,

        /// Output directory (overrides `[export] output_dir`)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Export a screenplay saved as JSON
    Export {
        /// Screenplay JSON written by `generate --format json`
        screenplay: PathBuf,

        /// Files to write
        #[arg(long, value_enum, default_value_t = ExportFormat::All)]
        format: ExportFormat,

        /// Output directory (overrides `[export] output_dir`)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Output formats for `generate`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text transcript
    Text,
    /// Paginated PDF
    Pdf,
    /// Screenplay JSON, re-exportable later
    Json,
    /// All of the above
    All,
}

/// Output formats for `export`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain-text transcript
    Text,
    /// Paginated PDF
    Pdf,
    /// Both
    All,
}

/// Which artifacts to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Artifacts {
    pub text: bool,
    pub pdf: bool,
    pub json: bool,
}

impl From<OutputFormat> for Artifacts {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self {
                text: true,
                ..Self::default()
            },
            OutputFormat::Pdf => Self {
                pdf: true,
                ..Self::default()
            },
            OutputFormat::Json => Self {
                json: true,
                ..Self::default()
            },
            OutputFormat::All => Self {
                text: true,
                pdf: true,
                json: true,
            },
        }
    }
}

impl From<ExportFormat> for Artifacts {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Text => OutputFormat::Text.into(),
            ExportFormat::Pdf => OutputFormat::Pdf.into(),
            ExportFormat::All => Self {
                text: true,
                pdf: true,
                json: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["masterscript"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn generate_requires_concept_or_surprise() {
        assert!(Cli::try_parse_from(["masterscript", "generate"]).is_err());
        assert!(
            Cli::try_parse_from(["masterscript", "generate", "--concept", "x", "--surprise"])
                .is_err()
        );
        let cli =
            Cli::try_parse_from(["masterscript", "generate", "--surprise", "--seed", "4"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Generate {
                surprise: true,
                seed: Some(4),
                format: OutputFormat::All,
                ..
            })
        ));
    }

    #[test]
    fn export_all_skips_json() {
        let artifacts = Artifacts::from(ExportFormat::All);
        assert!(artifacts.text && artifacts.pdf && !artifacts.json);
    }
}
