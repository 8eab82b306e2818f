//! Editor options loaded from TOML.
//!
//! Without `--config`, options come from `editor.toml` in the platform config
//! folder:
//! - macOS: ~/Library/Application Support/dev.ark-builder.Ark/
//! - Windows: %APPDATA%/ark-builder/Ark/config/
//! - Linux: ~/.config/ark/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::{info, warn};

use ark_editor::EditorOptions;

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "ark-builder";
const APP_NAME: &str = "Ark";
const CONFIG_FILENAME: &str = "editor.toml";

/// Path of the default options file, if the platform has a config folder.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parse options from TOML text. Missing keys keep their defaults.
pub fn parse_options(content: &str) -> Result<EditorOptions, toml::de::Error> {
    toml::from_str(content)
}

/// Load options from an explicit file.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed.
pub fn load_options_from(path: &Path) -> Result<EditorOptions> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let options = parse_options(&content).with_context(|| format!("parse {}", path.display()))?;
    info!(path = %path.display(), "loaded editor options");
    Ok(options)
}

/// Load options from `explicit`, or from the default location.
///
/// An explicit file must exist and parse. The default file is optional: a
/// missing, unreadable or malformed default file yields default options.
pub fn load_options(explicit: Option<&Path>) -> Result<EditorOptions> {
    if let Some(path) = explicit {
        return load_options_from(path);
    }
    let Some(path) = default_config_path() else {
        warn!("could not determine config folder, using default options");
        return Ok(EditorOptions::default());
    };
    Ok(load_default_file(&path))
}

fn load_default_file(path: &Path) -> EditorOptions {
    match fs::read_to_string(path) {
        Ok(content) => match parse_options(&content) {
            Ok(options) => {
                info!(path = %path.display(), "loaded editor options");
                options
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid options file, using defaults");
                EditorOptions::default()
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => EditorOptions::default(),
        Err(error) => {
            warn!(path = %path.display(), %error, "cannot read options file, using defaults");
            EditorOptions::default()
        }
    }
}
