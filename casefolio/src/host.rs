//! Capability interface of the host document
//!
//! The engine never owns the document. It manipulates it through
//! [`DocumentHost`], a small set of primitives any document backend can
//! provide. Nodes have no identity beyond their handle and their name.

use crate::fonts::FontName;
use crate::style::Rgb;
use std::fmt;
use thiserror::Error;

/// Opaque handle to a node in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Top-level page
    Page,
    /// Top-level ordered-sequence marker; its name is its glyph
    Divider,
    /// Auto-layout container on a page
    Container,
    /// Text node
    Text,
    /// Visual (rectangle) node
    Visual,
}

/// Whether the host can create page dividers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerSupport {
    /// Dividers can be created
    Supported,
    /// The host version has no page dividers
    Unsupported,
}

/// Errors reported by host primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The handle does not refer to any node
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    /// The node existed but has been removed
    #[error("node {0} has been removed")]
    Removed(NodeId),

    /// The focused page cannot be removed
    #[error("cannot remove the current page '{0}'")]
    RemoveCurrentPage(String),

    /// A document must keep at least one page
    #[error("cannot remove '{0}': the document must keep at least one page")]
    LastPage(String),

    /// The node exists but is the wrong kind for the operation
    #[error("node {node} is a {actual:?}, expected {expected}")]
    WrongKind {
        /// Offending node
        node: NodeId,
        /// Its actual kind
        actual: NodeKind,
        /// What the operation needed
        expected: &'static str,
    },

    /// The host does not offer this primitive
    #[error("{0} is not supported by this host")]
    Unsupported(&'static str),
}

/// Geometry and fill of a new container
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSpec {
    /// Identity key under the page
    pub name: String,
    /// Horizontal position on the page
    pub x: f64,
    /// Vertical position on the page
    pub y: f64,
    /// Fixed width
    pub width: f64,
    /// Initial height; the container grows vertically with its children
    pub height: f64,
    /// Padding on all four sides
    pub padding: f64,
    /// Gap between stacked children
    pub item_spacing: f64,
    /// Background fill
    pub fill: Rgb,
    /// Corner radius
    pub corner_radius: f64,
}

/// Content and typography of a new text node
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    /// Identity key under the parent
    pub name: String,
    /// Characters to set
    pub content: String,
    /// Loaded font to set them in
    pub font: FontName,
    /// Font size in points
    pub font_size: f64,
    /// Text fill
    pub fill: Rgb,
    /// Line height as a percentage of the font size
    pub line_height_percent: f64,
    /// Fixed width with auto-growing height; `None` sizes to the content
    pub fixed_width: Option<f64>,
}

/// Size and fill of a new visual node
#[derive(Debug, Clone, PartialEq)]
pub struct VisualSpec {
    /// Identity key under the parent
    pub name: String,
    /// Fixed width
    pub width: f64,
    /// Fixed height
    pub height: f64,
    /// Solid fill
    pub fill: Rgb,
    /// Corner radius
    pub corner_radius: f64,
}

/// In-place change to an existing text node
#[derive(Debug, Clone, PartialEq)]
pub struct TextUpdate<'a> {
    /// Replacement characters
    pub content: &'a str,
    /// Replacement text fill
    pub fill: Rgb,
    /// New fixed width; the host re-measures the height
    pub width: Option<f64>,
}

/// Primitives the engine needs from the document
///
/// Implementations must reject removing the focused page and removing the
/// last remaining page.
pub trait DocumentHost {
    /// Top-level nodes (pages and dividers) in document order
    fn top_level(&self) -> Vec<NodeId>;

    /// Immediate children of a page or container, in order
    fn children(&self, parent: NodeId) -> Result<Vec<NodeId>, HostError>;

    /// Name of a node
    fn name(&self, node: NodeId) -> Result<String, HostError>;

    /// Kind of a node
    fn kind(&self, node: NodeId) -> Result<NodeKind, HostError>;

    /// Whether the handle refers to a node that has been removed
    fn is_removed(&self, node: NodeId) -> bool;

    /// The focused page, if any
    fn current_page(&self) -> Option<NodeId>;

    /// Focus a page
    fn set_current_page(&mut self, page: NodeId) -> Result<(), HostError>;

    /// Append a new page at the end of the document
    fn create_page(&mut self, name: &str) -> Result<NodeId, HostError>;

    /// Append a new container to a page
    fn create_container(&mut self, page: NodeId, spec: &ContainerSpec)
        -> Result<NodeId, HostError>;

    /// Create a text node under `parent`, at `index` or appended when `None`
    fn create_text(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        spec: &TextSpec,
    ) -> Result<NodeId, HostError>;

    /// Create a visual node under `parent`, at `index` or appended when `None`
    fn create_visual(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        spec: &VisualSpec,
    ) -> Result<NodeId, HostError>;

    /// Overwrite the content, fill and optionally the width of a text node
    fn update_text(&mut self, node: NodeId, update: &TextUpdate<'_>) -> Result<(), HostError>;

    /// Rename a node
    fn rename(&mut self, node: NodeId, name: &str) -> Result<(), HostError>;

    /// Remove a node and everything under it
    fn remove(&mut self, node: NodeId) -> Result<(), HostError>;

    /// Whether [`DocumentHost::create_divider`] is available
    fn divider_support(&self) -> DividerSupport;

    /// Insert a divider at `index` among the top-level nodes
    fn create_divider(&mut self, index: usize, glyph: &str) -> Result<NodeId, HostError>;

    /// Bring a node into the viewport
    fn scroll_into_view(&mut self, node: NodeId) -> Result<(), HostError>;
}
