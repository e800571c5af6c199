//! Style resolution for generated containers
//!
//! Maps a `(category, theme)` pair to canvas dimensions, spacing and a
//! four-color palette. Every function here is pure and total.

use crate::options::{Category, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner radius of every section container
pub const CONTAINER_CORNER_RADIUS: f64 = 24.0;

/// Corner radius of the cover hero placeholder
pub const HERO_CORNER_RADIUS: f64 = 20.0;

/// Font size of section headings
pub const HEADING_FONT_SIZE: f64 = 28.0;

/// Font size of section bodies
pub const BODY_FONT_SIZE: f64 = 13.0;

/// Line height of all generated text, in percent of the font size
pub const LINE_HEIGHT_PERCENT: f64 = 135.0;

/// Solid color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Rgb {
    /// Create a color from its three channels
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.r, self.g, self.b)
    }
}

/// The four colors a theme provides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Container fill
    pub background: Rgb,
    /// Heading text fill
    pub heading: Rgb,
    /// Body text fill
    pub body: Rgb,
    /// Hero placeholder fill
    pub hero: Rgb,
}

/// Everything the engine needs to style a section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleBundle {
    /// Container width
    pub width: f64,
    /// Initial container height (the container grows with its content)
    pub height: f64,
    /// Padding on all four sides of the container
    pub padding: f64,
    /// Vertical gap between container children
    pub item_spacing: f64,
    /// Height of the cover hero placeholder
    pub hero_height: f64,
    /// Theme colors
    pub palette: Palette,
}

impl StyleBundle {
    /// Width available to container children once padding is removed
    pub fn content_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }
}

/// Resolve the style bundle for a category and theme
///
/// # Parameters
/// * `category` - Project category; `Mobile` selects the narrow profile
/// * `theme` - Color theme
///
/// # Returns
/// * `StyleBundle` - Dimensions, spacing and palette for the pair
pub fn resolve(category: Category, theme: Theme) -> StyleBundle {
    let (width, height, padding, item_spacing, hero_height) = match category {
        Category::Mobile => (390.0, 844.0, 32.0, 16.0, 360.0),
        Category::Website | Category::Webapp | Category::Brand | Category::Other => {
            (1440.0, 900.0, 48.0, 20.0, 420.0)
        }
    };

    StyleBundle {
        width,
        height,
        padding,
        item_spacing,
        hero_height,
        palette: palette(theme),
    }
}

/// Palette for a theme
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: Rgb::new(0.07, 0.07, 0.08),
            heading: Rgb::new(0.95, 0.95, 0.96),
            body: Rgb::new(0.72, 0.72, 0.75),
            hero: Rgb::new(0.16, 0.16, 0.18),
        },
        Theme::Light => Palette {
            background: Rgb::new(1.0, 1.0, 1.0),
            heading: Rgb::new(0.05, 0.05, 0.06),
            body: Rgb::new(0.4, 0.4, 0.45),
            hero: Rgb::new(0.9, 0.9, 0.92),
        },
    }
}
