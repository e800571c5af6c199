//! Generation options supplied by the caller for a single run

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Title used when the request does not carry one
pub const DEFAULT_TITLE: &str = "New Portfolio Project";

/// Kind of project the portfolio describes; drives canvas dimensions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Marketing or content website
    Website,
    /// Native or mobile-web application (narrow, tall canvas)
    #[default]
    Mobile,
    /// Desktop web application
    Webapp,
    /// Brand identity work
    Brand,
    /// Anything else
    Other,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 5] = [
        Category::Website,
        Category::Mobile,
        Category::Webapp,
        Category::Brand,
        Category::Other,
    ];

    /// Label substituted into the catalog's cover text
    pub fn label(self) -> &'static str {
        match self {
            Category::Website => "website",
            Category::Mobile => "mobile",
            Category::Webapp => "webapp",
            Category::Brand => "brand",
            Category::Other => "other",
        }
    }
}

/// Color theme of the generated containers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Near-black background with light text
    #[default]
    Dark,
    /// White background with dark text
    Light,
}

impl Theme {
    /// Every theme, in declaration order
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];
}

/// Glyph used for the page dividers placed between page groups
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum DividerStyle {
    /// `---`
    #[default]
    EnDash,
    /// `———`
    EmDash,
    /// `***`
    Asterisk,
    /// No dividers at all
    None,
}

impl DividerStyle {
    /// Divider name for this style, or `None` when dividers are disabled
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            DividerStyle::EnDash => Some("---"),
            DividerStyle::EmDash => Some("———"),
            DividerStyle::Asterisk => Some("***"),
            DividerStyle::None => None,
        }
    }
}

/// Options for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Project title, shown as the cover heading
    pub title: String,
    /// Project category
    pub category: Category,
    /// Color theme
    pub theme: Theme,
    /// Divider glyph between page groups
    pub divider_style: DividerStyle,
    /// Remove every existing page before generating
    pub clear_existing: bool,
    /// Overwrite heading/body text and colors of nodes that already exist
    pub refresh_placeholders: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            category: Category::default(),
            theme: Theme::default(),
            divider_style: DividerStyle::default(),
            clear_existing: false,
            refresh_placeholders: false,
        }
    }
}

impl GenerationOptions {
    /// Create options with the given title and defaults for everything else
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
