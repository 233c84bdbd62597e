//! MasterScript CLI binary.
//!
//! - `masterscript` / `masterscript tui` - interactive screen
//! - `masterscript generate` - headless generation and export
//! - `masterscript export` - export a saved screenplay

use chrono::Datelike;
use clap::Parser;
use masterscript::{LogTarget, MasterscriptConfig, default_log_file, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, run_export, run_generate};

    // Parse command-line arguments
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // The interactive screen owns the terminal, so its logs go to a file
    let target = match command {
        Commands::Tui => LogTarget::File(
            default_log_file().unwrap_or_else(|| std::env::temp_dir().join("masterscript.log")),
        ),
        _ => LogTarget::Stderr,
    };
    init_logging(cli.verbose, target)?;

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    let mut config = MasterscriptConfig::load(cli.config.as_deref())?;
    if config.export.render.year.is_none() {
        config.export.render.year = Some(chrono::Local::now().year());
    }
    if config.export.pdf.font_path.is_none() {
        config.export.pdf.font_path = masterscript::export::find_bengali_font();
        match &config.export.pdf.font_path {
            Some(path) => tracing::info!(font = %path.display(), "Using installed Bengali font"),
            None => tracing::warn!("No Bengali font found; set export.pdf.font_path for PDF export"),
        }
    }

    match command {
        Commands::Tui => {
            launch_tui(config).await?;
        }

        Commands::Generate {
            concept,
            surprise: _,
            seed,
            format,
            output,
        } => {
            for path in run_generate(&config, concept, seed, format, output).await? {
                println!("{}", path.display());
            }
        }

        Commands::Export {
            screenplay,
            format,
            output,
        } => {
            for path in run_export(&config, &screenplay, format, output).await? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
