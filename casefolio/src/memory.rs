//! In-memory document host
//!
//! [`MemoryDocument`] implements [`DocumentHost`] with the same rules a real
//! design-tool document enforces: the focused page cannot be removed and the
//! last page cannot be removed. It backs the CLI and the test suite.

use crate::fonts::FontName;
use crate::host::{
    ContainerSpec, DividerSupport, DocumentHost, HostError, NodeId, NodeKind, TextSpec,
    TextUpdate, VisualSpec,
};
use crate::style::Rgb;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Name of the page every new document starts with
pub const INITIAL_PAGE_NAME: &str = "Page 1";

/// Average glyph advance as a fraction of the font size
const GLYPH_WIDTH_RATIO: f64 = 0.5;

/// A node stored in the document
#[derive(Debug, Clone)]
pub struct Node {
    /// Node name
    pub name: String,
    /// Parent node; `None` for top-level nodes
    pub parent: Option<NodeId>,
    /// Ordered children
    pub children: Vec<NodeId>,
    /// Kind-specific properties
    pub props: NodeProps,
}

/// Kind-specific node properties
#[derive(Debug, Clone, PartialEq)]
pub enum NodeProps {
    /// A page
    Page,
    /// A divider named by its glyph
    Divider,
    /// An auto-layout container
    Container(ContainerProps),
    /// A text node
    Text(TextProps),
    /// A rectangle
    Visual(VisualProps),
}

impl NodeProps {
    /// Node kind these properties belong to
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeProps::Page => NodeKind::Page,
            NodeProps::Divider => NodeKind::Divider,
            NodeProps::Container(_) => NodeKind::Container,
            NodeProps::Text(_) => NodeKind::Text,
            NodeProps::Visual(_) => NodeKind::Visual,
        }
    }
}

/// Container geometry and fill
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerProps {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Padding on all sides
    pub padding: f64,
    /// Gap between children
    pub item_spacing: f64,
    /// Background fill
    pub fill: Rgb,
    /// Corner radius
    pub corner_radius: f64,
}

/// Text content, typography and measured size
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    /// Characters
    pub content: String,
    /// Font
    pub font: FontName,
    /// Font size
    pub font_size: f64,
    /// Text fill
    pub fill: Rgb,
    /// Line height as a percentage of the font size
    pub line_height_percent: f64,
    /// Fixed width, if the text wraps
    pub fixed_width: Option<f64>,
    /// Measured width
    pub width: f64,
    /// Measured height
    pub height: f64,
}

impl TextProps {
    fn remeasure(&mut self) {
        let (width, height) = measure(
            &self.content,
            self.font_size,
            self.line_height_percent,
            self.fixed_width,
        );
        self.width = width;
        self.height = height;
    }
}

/// Visual node size and fill
#[derive(Debug, Clone, PartialEq)]
pub struct VisualProps {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
    /// Solid fill
    pub fill: Rgb,
    /// Corner radius
    pub corner_radius: f64,
}

/// A document held entirely in memory
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: BTreeMap<NodeId, Node>,
    root: Vec<NodeId>,
    removed: HashSet<NodeId>,
    current: Option<NodeId>,
    viewport: Option<NodeId>,
    next_id: u64,
    dividers: DividerSupport,
    page_count_trace: Vec<usize>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document holding a single focused page
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: BTreeMap::new(),
            root: Vec::new(),
            removed: HashSet::new(),
            current: None,
            viewport: None,
            next_id: 1,
            dividers: DividerSupport::Supported,
            page_count_trace: Vec::new(),
        };
        let first = doc.insert(INITIAL_PAGE_NAME, None, None, NodeProps::Page);
        doc.current = Some(first);
        doc.page_count_trace.clear();
        doc
    }

    /// Simulate a host version without page dividers
    #[must_use]
    pub fn without_dividers(mut self) -> Self {
        self.dividers = DividerSupport::Unsupported;
        self
    }

    /// Look up a live node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Number of top-level pages (dividers excluded)
    pub fn page_count(&self) -> usize {
        self.root
            .iter()
            .filter(|id| matches!(self.nodes.get(*id).map(|n| &n.props), Some(NodeProps::Page)))
            .count()
    }

    /// Page count recorded after every mutation since creation
    pub fn page_count_trace(&self) -> &[usize] {
        &self.page_count_trace
    }

    /// Names of all top-level nodes, dividers included, in order
    pub fn top_level_names(&self) -> Vec<String> {
        self.root
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(|node| node.name.clone())
            .collect()
    }

    /// Names of top-level pages, in order
    pub fn page_names(&self) -> Vec<String> {
        self.root
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .filter(|node| node.props == NodeProps::Page)
            .map(|node| node.name.clone())
            .collect()
    }

    /// Names of a node's children, in order
    pub fn child_names(&self, parent: NodeId) -> Vec<String> {
        self.nodes
            .get(&parent)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|id| self.nodes.get(id))
                    .map(|child| child.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Node brought into view by the last `scroll_into_view`
    pub fn viewport(&self) -> Option<NodeId> {
        self.viewport
    }

    /// Text properties of a text node
    pub fn text(&self, id: NodeId) -> Option<&TextProps> {
        match self.nodes.get(&id).map(|n| &n.props) {
            Some(NodeProps::Text(props)) => Some(props),
            _ => None,
        }
    }

    /// Geometry of a container node
    pub fn container(&self, id: NodeId) -> Option<&ContainerProps> {
        match self.nodes.get(&id).map(|n| &n.props) {
            Some(NodeProps::Container(props)) => Some(props),
            _ => None,
        }
    }

    /// Geometry of a visual node
    pub fn visual(&self, id: NodeId) -> Option<&VisualProps> {
        match self.nodes.get(&id).map(|n| &n.props) {
            Some(NodeProps::Visual(props)) => Some(props),
            _ => None,
        }
    }

    fn insert(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        index: Option<usize>,
        props: NodeProps,
    ) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                name: name.to_string(),
                parent,
                children: Vec::new(),
                props,
            },
        );

        let siblings = match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => &mut parent_node.children,
            None => &mut self.root,
        };
        let at = index.unwrap_or(siblings.len()).min(siblings.len());
        siblings.insert(at, id);

        self.record();
        id
    }

    fn lookup(&self, id: NodeId) -> Result<&Node, HostError> {
        self.nodes.get(&id).ok_or(if self.removed.contains(&id) {
            HostError::Removed(id)
        } else {
            HostError::UnknownNode(id)
        })
    }

    fn expect_kind(
        &self,
        id: NodeId,
        accepted: &[NodeKind],
        expected: &'static str,
    ) -> Result<&Node, HostError> {
        let node = self.lookup(id)?;
        let actual = node.props.kind();
        if accepted.contains(&actual) {
            Ok(node)
        } else {
            Err(HostError::WrongKind {
                node: id,
                actual,
                expected,
            })
        }
    }

    fn record(&mut self) {
        let count = self.page_count();
        self.page_count_trace.push(count);
    }

    fn drop_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            self.removed.insert(id);
            if self.viewport == Some(id) {
                self.viewport = None;
            }
            for child in node.children {
                self.drop_subtree(child);
            }
        }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let Some(node) = self.nodes.get(&id) else {
            return Ok(());
        };
        let indent = "  ".repeat(depth);
        match &node.props {
            NodeProps::Page => {
                let marker = if self.current == Some(id) { "*" } else { " " };
                writeln!(f, "{}{} {}", marker, indent, node.name)?;
            }
            NodeProps::Divider => writeln!(f, "  {}{}", indent, node.name)?,
            NodeProps::Container(props) => writeln!(
                f,
                "  {}{} [{}x{}]",
                indent, node.name, props.width, props.height
            )?,
            NodeProps::Text(props) => {
                let first_line = props.content.lines().next().unwrap_or_default();
                writeln!(
                    f,
                    "  {}{}: \"{}\" ({} lines)",
                    indent,
                    node.name,
                    first_line,
                    props.content.lines().count()
                )?;
            }
            NodeProps::Visual(props) => writeln!(
                f,
                "  {}{} [{}x{}]",
                indent, node.name, props.width, props.height
            )?,
        }
        for child in &node.children {
            self.write_node(f, *child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in &self.root {
            self.write_node(f, *id, 0)?;
        }
        Ok(())
    }
}

impl DocumentHost for MemoryDocument {
    fn top_level(&self) -> Vec<NodeId> {
        self.root.clone()
    }

    fn children(&self, parent: NodeId) -> Result<Vec<NodeId>, HostError> {
        Ok(self.lookup(parent)?.children.clone())
    }

    fn name(&self, node: NodeId) -> Result<String, HostError> {
        Ok(self.lookup(node)?.name.clone())
    }

    fn kind(&self, node: NodeId) -> Result<NodeKind, HostError> {
        Ok(self.lookup(node)?.props.kind())
    }

    fn is_removed(&self, node: NodeId) -> bool {
        self.removed.contains(&node)
    }

    fn current_page(&self) -> Option<NodeId> {
        self.current
    }

    fn set_current_page(&mut self, page: NodeId) -> Result<(), HostError> {
        self.expect_kind(page, &[NodeKind::Page], "a page")?;
        self.current = Some(page);
        Ok(())
    }

    fn create_page(&mut self, name: &str) -> Result<NodeId, HostError> {
        Ok(self.insert(name, None, None, NodeProps::Page))
    }

    fn create_container(
        &mut self,
        page: NodeId,
        spec: &ContainerSpec,
    ) -> Result<NodeId, HostError> {
        self.expect_kind(page, &[NodeKind::Page], "a page")?;
        let props = ContainerProps {
            x: spec.x,
            y: spec.y,
            width: spec.width,
            height: spec.height,
            padding: spec.padding,
            item_spacing: spec.item_spacing,
            fill: spec.fill,
            corner_radius: spec.corner_radius,
        };
        Ok(self.insert(&spec.name, Some(page), None, NodeProps::Container(props)))
    }

    fn create_text(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        spec: &TextSpec,
    ) -> Result<NodeId, HostError> {
        self.expect_kind(
            parent,
            &[NodeKind::Page, NodeKind::Container],
            "a page or container",
        )?;
        let mut props = TextProps {
            content: spec.content.clone(),
            font: spec.font.clone(),
            font_size: spec.font_size,
            fill: spec.fill,
            line_height_percent: spec.line_height_percent,
            fixed_width: spec.fixed_width,
            width: 0.0,
            height: 0.0,
        };
        props.remeasure();
        Ok(self.insert(&spec.name, Some(parent), index, NodeProps::Text(props)))
    }

    fn create_visual(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        spec: &VisualSpec,
    ) -> Result<NodeId, HostError> {
        self.expect_kind(
            parent,
            &[NodeKind::Page, NodeKind::Container],
            "a page or container",
        )?;
        let props = VisualProps {
            width: spec.width,
            height: spec.height,
            fill: spec.fill,
            corner_radius: spec.corner_radius,
        };
        Ok(self.insert(&spec.name, Some(parent), index, NodeProps::Visual(props)))
    }

    fn update_text(&mut self, node: NodeId, update: &TextUpdate<'_>) -> Result<(), HostError> {
        self.expect_kind(node, &[NodeKind::Text], "a text node")?;
        if let Some(NodeProps::Text(props)) = self.nodes.get_mut(&node).map(|n| &mut n.props) {
            props.content = update.content.to_string();
            props.fill = update.fill;
            if let Some(width) = update.width {
                props.fixed_width = Some(width);
            }
            props.remeasure();
        }
        self.record();
        Ok(())
    }

    fn rename(&mut self, node: NodeId, name: &str) -> Result<(), HostError> {
        self.lookup(node)?;
        if let Some(n) = self.nodes.get_mut(&node) {
            n.name = name.to_string();
        }
        self.record();
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<(), HostError> {
        let target = self.lookup(node)?;
        let parent = target.parent;
        if target.props == NodeProps::Page {
            if self.current == Some(node) {
                return Err(HostError::RemoveCurrentPage(target.name.clone()));
            }
            if self.page_count() <= 1 {
                return Err(HostError::LastPage(target.name.clone()));
            }
        }

        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => parent_node.children.retain(|c| *c != node),
            None => self.root.retain(|c| *c != node),
        }
        self.drop_subtree(node);
        self.record();
        Ok(())
    }

    fn divider_support(&self) -> DividerSupport {
        self.dividers
    }

    fn create_divider(&mut self, index: usize, glyph: &str) -> Result<NodeId, HostError> {
        if self.dividers == DividerSupport::Unsupported {
            return Err(HostError::Unsupported("page dividers"));
        }
        Ok(self.insert(glyph, None, Some(index), NodeProps::Divider))
    }

    fn scroll_into_view(&mut self, node: NodeId) -> Result<(), HostError> {
        self.lookup(node)?;
        self.viewport = Some(node);
        Ok(())
    }
}

/// Estimate the rendered size of a text block
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn measure(
    content: &str,
    font_size: f64,
    line_height_percent: f64,
    fixed_width: Option<f64>,
) -> (f64, f64) {
    let glyph = font_size * GLYPH_WIDTH_RATIO;
    let line_height = font_size * line_height_percent / 100.0;
    let lines: Vec<usize> = content.split('\n').map(|l| l.chars().count()).collect();

    match fixed_width {
        Some(width) => {
            let per_row = ((width / glyph).floor() as usize).max(1);
            let rows: usize = lines.iter().map(|n| n.div_ceil(per_row).max(1)).sum();
            (width, rows as f64 * line_height)
        }
        None => {
            let longest = lines.iter().copied().max().unwrap_or(0);
            (longest as f64 * glyph, lines.len() as f64 * line_height)
        }
    }
}
