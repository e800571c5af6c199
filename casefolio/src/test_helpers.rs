//! Shared test utilities: node specs and small catalogs.

use crate::catalog::Section;
use crate::fonts::{FontName, FontSet};
use crate::host::{ContainerSpec, TextSpec};
use crate::style::Rgb;

/// A mobile-sized container spec with the given name
pub fn container_spec(name: &str) -> ContainerSpec {
    ContainerSpec {
        name: name.to_string(),
        x: 0.0,
        y: 0.0,
        width: 390.0,
        height: 844.0,
        padding: 32.0,
        item_spacing: 16.0,
        fill: Rgb::new(0.07, 0.07, 0.08),
        corner_radius: 24.0,
    }
}

/// An auto-sized text spec
pub fn text_spec(name: &str, content: &str) -> TextSpec {
    TextSpec {
        name: name.to_string(),
        content: content.to_string(),
        font: FontName::new("Inter", "Regular"),
        font_size: 13.0,
        fill: Rgb::new(0.72, 0.72, 0.75),
        line_height_percent: 135.0,
        fixed_width: None,
    }
}

/// The Inter font set
pub fn inter() -> FontSet {
    FontSet {
        regular: FontName::new("Inter", "Regular"),
        emphasized: FontName::new("Inter", "Semi Bold"),
    }
}

/// A section named after `id`
pub fn section(id: &str, is_cover: bool, divider_after: bool) -> Section {
    Section {
        id: id.to_string(),
        page_name: format!("Page {}", id),
        container_name: format!("{} Board", id),
        heading: format!("Heading {}", id),
        placeholder: format!("Body of {}", id),
        is_cover,
        divider_after,
    }
}
