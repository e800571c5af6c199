//! Embedded section catalog
//!
//! The catalog is the ordered list of case-study sections, each becoming one
//! page of the document. It is compiled into the binary from
//! `templates/sections.toml`.

use serde::{Deserialize, Serialize};

/// Token replaced by the project title
pub const TITLE_TOKEN: &str = "{title}";

/// Token replaced by the category label
pub const PROJECT_TYPE_TOKEN: &str = "{project_type}";

/// Embedded catalog source
const SECTIONS_TOML: &str = include_str!("templates/sections.toml");

/// One template content block of the catalog
///
/// `page_name` and `container_name` are the identity keys used to find
/// existing structure in the document, so they must stay stable and unique
/// across catalog versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Ordinal identifier (e.g., "00")
    pub id: String,
    /// Name of the page holding this section
    pub page_name: String,
    /// Name of the container on that page
    pub container_name: String,
    /// Short heading text
    pub heading: String,
    /// Long-form body text
    pub placeholder: String,
    /// Whether this section owns the hero placeholder
    #[serde(default)]
    pub is_cover: bool,
    /// Whether a page divider follows this section's page
    #[serde(default)]
    pub divider_after: bool,
}

impl Section {
    /// Replace the title and project type tokens in the heading and body
    fn substitute(mut self, title: &str, project_type: &str) -> Self {
        self.heading = fill(&self.heading, title, project_type);
        self.placeholder = fill(&self.placeholder, title, project_type);
        self
    }
}

/// TOML layout of the catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    sections: Vec<Section>,
}

/// Build the catalog for a project
///
/// # Parameters
/// * `title` - Project title, substituted for `{title}`
/// * `project_type` - Category label, substituted for `{project_type}`
///
/// # Returns
/// * `Ok(Vec<Section>)` - Sections in page order
/// * `Err(toml::de::Error)` - The embedded catalog could not be parsed
pub fn sections(title: &str, project_type: &str) -> Result<Vec<Section>, toml::de::Error> {
    parse(SECTIONS_TOML, title, project_type)
}

/// Parse a catalog from TOML text and substitute its tokens
pub fn parse(
    content: &str,
    title: &str,
    project_type: &str,
) -> Result<Vec<Section>, toml::de::Error> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(file
        .sections
        .into_iter()
        .map(|section| section.substitute(title, project_type))
        .collect())
}

/// The section owning the hero placeholder, if the catalog has one
pub fn cover(sections: &[Section]) -> Option<&Section> {
    sections.iter().find(|section| section.is_cover)
}

// The title goes in last so a title containing a token is left as typed.
fn fill(text: &str, title: &str, project_type: &str) -> String {
    text.replace(PROJECT_TYPE_TOKEN, project_type)
        .replace(TITLE_TOKEN, title)
}
