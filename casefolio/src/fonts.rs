//! Font acquisition with fallback
//!
//! Fonts are loaded once, before the document is touched, and the resulting
//! [`FontSet`] is passed explicitly to the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A font family and style pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    /// Family name (e.g., "Inter")
    pub family: String,
    /// Style name (e.g., "Semi Bold")
    pub style: String,
}

impl FontName {
    /// Create a font name
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

impl FromStr for FontName {
    type Err = String;

    /// Parse `Family:Style`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((family, style)) if !family.trim().is_empty() && !style.trim().is_empty() => {
                Ok(FontName::new(family.trim(), style.trim()))
            }
            _ => Err(format!("expected FAMILY:STYLE, got '{}'", s)),
        }
    }
}

/// Fonts used by the engine for the two text roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    /// Body text font
    pub regular: FontName,
    /// Heading font
    pub emphasized: FontName,
}

/// Errors that can occur while acquiring fonts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// A specific font could not be loaded
    #[error("font '{0}' is not available")]
    Unavailable(FontName),

    /// The system reports no fonts at all
    #[error("No fonts available")]
    NoFontsAvailable,
}

/// Source of fonts on the host system
pub trait FontProvider {
    /// Load a font so text can be set in it
    fn load(&mut self, font: &FontName) -> Result<(), FontError>;

    /// Every font installed on the system, in the system's order
    fn available(&self) -> Vec<FontName>;
}

/// Candidate (regular, emphasized) pairs tried in order
pub fn default_candidates() -> Vec<(FontName, FontName)> {
    vec![
        (
            FontName::new("Inter", "Regular"),
            FontName::new("Inter", "Semi Bold"),
        ),
        (
            FontName::new("Roboto", "Regular"),
            FontName::new("Roboto", "Medium"),
        ),
    ]
}

/// Acquire a font set, trying each candidate pair before falling back
///
/// # Parameters
/// * `provider` - Font source
/// * `candidates` - (regular, emphasized) pairs in order of preference
///
/// # Returns
/// * `Ok(FontSet)` - The first fully loadable pair, or the first available
///   font for both roles
/// * `Err(FontError::NoFontsAvailable)` - The provider lists no fonts
pub fn acquire<P: FontProvider + ?Sized>(
    provider: &mut P,
    candidates: &[(FontName, FontName)],
) -> Result<FontSet, FontError> {
    for (regular, emphasized) in candidates {
        let loaded = provider
            .load(regular)
            .and_then(|()| provider.load(emphasized));
        match loaded {
            Ok(()) => {
                log::debug!("Loaded fonts {} / {}", regular, emphasized);
                return Ok(FontSet {
                    regular: regular.clone(),
                    emphasized: emphasized.clone(),
                });
            }
            Err(e) => log::warn!("{}, trying next candidate", e),
        }
    }

    log::warn!("No preferred font available, using first available font");
    let first = provider
        .available()
        .into_iter()
        .next()
        .ok_or(FontError::NoFontsAvailable)?;
    provider.load(&first)?;

    Ok(FontSet {
        regular: first.clone(),
        emphasized: first,
    })
}

/// Font provider backed by a fixed list of installed fonts
#[derive(Debug, Clone, Default)]
pub struct SystemFonts {
    installed: Vec<FontName>,
    loaded: Vec<FontName>,
}

impl SystemFonts {
    /// Create a provider with the given installed fonts
    pub fn new(installed: Vec<FontName>) -> Self {
        Self {
            installed,
            loaded: Vec::new(),
        }
    }

    /// A provider with every default candidate installed
    pub fn common() -> Self {
        Self::new(
            default_candidates()
                .into_iter()
                .flat_map(|(regular, emphasized)| [regular, emphasized])
                .collect(),
        )
    }

    /// Fonts loaded so far, in load order
    pub fn loaded(&self) -> &[FontName] {
        &self.loaded
    }
}

impl FontProvider for SystemFonts {
    fn load(&mut self, font: &FontName) -> Result<(), FontError> {
        if !self.installed.contains(font) {
            return Err(FontError::Unavailable(font.clone()));
        }
        if !self.loaded.contains(font) {
            self.loaded.push(font.clone());
        }
        Ok(())
    }

    fn available(&self) -> Vec<FontName> {
        self.installed.clone()
    }
}
