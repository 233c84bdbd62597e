//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`masterscript.toml` shipped with the binary)
//! 2. `~/.config/masterscript/masterscript.toml`
//! 3. `./masterscript.toml`
//! 4. A file passed explicitly (`--config`)

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use masterscript_error::{ConfigError, ConfigErrorKind, MasterscriptResult};
use masterscript_models::{GeminiConfig, PromptConfig};
use masterscript_render::export::ExportConfig;
use masterscript_tui::TuiConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../masterscript.toml");

/// Complete application configuration.
///
/// # Example
///
/// ```
/// use masterscript::MasterscriptConfig;
///
/// let config = MasterscriptConfig::from_toml_str("[gemini]\nmodel = \"gemini-2.5-flash\"").unwrap();
/// assert_eq!(config.gemini.model, "gemini-2.5-flash");
/// assert_eq!(config.tui.status_interval_ms, 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterscriptConfig {
    /// `[gemini]` connection settings
    pub gemini: GeminiConfig,
    /// `[prompt]` instruction settings
    pub prompt: PromptConfig,
    /// `[export]` output settings
    pub export: ExportConfig,
    /// `[tui]` interface settings
    pub tui: TuiConfig,
}

impl MasterscriptConfig {
    /// Load with the full precedence chain, then `explicit` on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing or any source fails
    /// to parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> MasterscriptResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder = bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/masterscript/masterscript.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("masterscript").required(false));

        if let Some(path) = explicit {
            ensure_exists(path)?;
            builder = builder.add_source(File::from(path).required(true));
        }

        finish(builder)
    }

    /// Load bundled defaults overridden by a single file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MasterscriptResult<Self> {
        let path = path.as_ref();
        ensure_exists(path)?;
        finish(bundled().add_source(File::from(path).required(true)))
    }

    /// Load bundled defaults overridden by TOML text.
    pub fn from_toml_str(toml: &str) -> MasterscriptResult<Self> {
        finish(bundled().add_source(File::from_str(toml, FileFormat::Toml)))
    }
}

fn bundled() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

/// A file the user named; absence is an error rather than a skipped layer.
fn ensure_exists(path: &Path) -> MasterscriptResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::new(ConfigErrorKind::MissingFile(path.display().to_string())).into())
    }
}

fn finish(builder: ConfigBuilder<DefaultState>) -> MasterscriptResult<MasterscriptConfig> {
    let config = builder
        .build()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
    Ok(config)
}
