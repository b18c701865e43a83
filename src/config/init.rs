//! First-run credential capture.
//!
//! When the credential file is missing the user is asked for the store domain
//! and access token, and the answers are written before the lookup loop starts.
//! An existing file is only ever read.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::ui::input::LineReader;
use crate::ui::render::RenderSink;
use crate::ui::settings;

use super::{load_config, write_new_config, Config};

/// How [`load_or_init_config`] obtained the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    /// An existing file was read.
    Loaded { path: PathBuf },
    /// The user was prompted and a new file was written.
    Created { path: PathBuf },
    /// Another process created the file while the user was prompted; its
    /// contents were used instead of the answers.
    CreatedElsewhere { path: PathBuf },
}

/// Load the credential file at `path`, prompting for and writing it when
/// absent.
pub fn load_or_init_config(
    path: &Path,
    input: &mut dyn LineReader,
    renderer: &dyn RenderSink,
) -> Result<(Config, ConfigInitResult), ConfigError> {
    let shown = path.display().to_string();

    if path.exists() {
        renderer.activity(&format!("Using config from: {shown}"));
        let config = load_config(path)?;
        tracing::debug!(path = %shown, domain = %config.domain, "loaded config");
        return Ok((
            config,
            ConfigInitResult::Loaded {
                path: path.to_path_buf(),
            },
        ));
    }

    renderer.activity("Config does not exist. Creating one.");
    let domain = prompt_required(input, settings::PROMPT_DOMAIN, "domain")?;
    let access_token = prompt_required(input, settings::PROMPT_ACCESS_TOKEN, "access token")?;
    let config = Config::from_input(&domain, &access_token)?;

    renderer.activity(&format!("Writing config to: {shown}"));
    if write_new_config(path, &config)? {
        tracing::info!(path = %shown, domain = %config.domain, "created config");
        return Ok((
            config,
            ConfigInitResult::Created {
                path: path.to_path_buf(),
            },
        ));
    }

    renderer.warn(&format!(
        "{shown} was created by another process; using its contents"
    ));
    Ok((
        load_config(path)?,
        ConfigInitResult::CreatedElsewhere {
            path: path.to_path_buf(),
        },
    ))
}

fn prompt_required(
    input: &mut dyn LineReader,
    prompt: &str,
    field: &str,
) -> Result<String, ConfigError> {
    input.read_line(prompt)?.ok_or_else(|| {
        ConfigError::Invalid(format!("input closed before {field} was entered"))
    })
}
