//! Request handling around the engine
//!
//! A caller sends one [`Message`] at a time. A `generate` message is turned
//! into [`GenerationOptions`] (missing fields take their defaults), run, and
//! answered with exactly one [`Notification`]. Failures are reported as a
//! message, never classified.

use crate::engine;
use crate::fonts::FontProvider;
use crate::host::DocumentHost;
use crate::options::{Category, DividerStyle, GenerationOptions, Theme, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Text of the success notification
pub const SUCCESS_MESSAGE: &str = "✨ Portfolio structure generated.";

/// An inbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Message {
    /// Populate the document
    Generate(GenerateRequest),
    /// End the session
    Close,
}

/// Options as sent by the caller; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Project title; empty counts as missing
    pub title: Option<String>,
    /// Project category
    pub category: Option<Category>,
    /// Color theme
    pub theme: Option<Theme>,
    /// Divider glyph
    pub divider_style: Option<DividerStyle>,
    /// Remove existing pages first
    pub clear_existing: Option<bool>,
    /// Overwrite existing heading and body text
    pub refresh_placeholders: Option<bool>,
}

impl GenerateRequest {
    /// Load a request from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the request file
    ///
    /// # Returns
    /// * `Ok(GenerateRequest)` - Parsed request
    /// * `Err(RequestError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RequestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| RequestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| RequestError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Fill in defaults for every missing field
    ///
    /// An empty title counts as missing.
    pub fn into_options(self) -> GenerationOptions {
        GenerationOptions {
            title: self
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            category: self.category.unwrap_or_default(),
            theme: self.theme.unwrap_or_default(),
            divider_style: self.divider_style.unwrap_or_default(),
            clear_existing: self.clear_existing.unwrap_or(false),
            refresh_placeholders: self.refresh_placeholders.unwrap_or(false),
        }
    }
}

/// Errors that can occur when loading a request file
#[derive(Error, Debug)]
pub enum RequestError {
    /// The file could not be read
    #[error("failed to read request {}: {source}", .path.display())]
    Io {
        /// Request file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not a valid request
    #[error("failed to parse request {}: {source}", .path.display())]
    Parse {
        /// Request file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// The single terminal notification of a generate request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The structure was generated
    Success(String),
    /// The run failed; the message carries the cause
    Error(String),
}

impl Notification {
    /// Whether the run succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Success(message) | Notification::Error(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

/// Reply to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A generate request finished
    Notify(Notification),
    /// The session should end
    Close,
}

/// Handle one inbound message
pub fn handle<H, P>(message: Message, host: &mut H, fonts: &mut P) -> Response
where
    H: DocumentHost + ?Sized,
    P: FontProvider + ?Sized,
{
    match message {
        Message::Generate(request) => Response::Notify(run(&request.into_options(), host, fonts)),
        Message::Close => Response::Close,
    }
}

/// Run the engine and turn its result into a notification
pub fn run<H, P>(options: &GenerationOptions, host: &mut H, fonts: &mut P) -> Notification
where
    H: DocumentHost + ?Sized,
    P: FontProvider + ?Sized,
{
    log::info!("Starting generation with options: {:?}", options);

    match engine::generate(host, fonts, options) {
        Ok(report) => {
            log::info!("Generation completed successfully: {:?}", report);
            Notification::Success(SUCCESS_MESSAGE.to_string())
        }
        Err(e) => {
            log::error!("Generation failed: {}", e);
            log::debug!("Full error: {:?}", e);
            Notification::Error(format!("❌ Error: {}", e))
        }
    }
}
