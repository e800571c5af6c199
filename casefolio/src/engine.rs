//! Synchronization of a document with the section catalog
//!
//! Every section becomes a page holding one named container with a
//! "Heading", an optional "Hero Placeholder" and a "Body". Each level is
//! found by name or created, so running again against a populated document
//! reuses what is there instead of duplicating it. Existing text is only
//! overwritten when `refresh_placeholders` is set.

use crate::catalog::{self, Section};
use crate::clear::{self, PendingPlaceholder};
use crate::error::SyncError;
use crate::fonts::{self, FontProvider, FontSet};
use crate::host::{
    ContainerSpec, DividerSupport, DocumentHost, HostError, NodeId, NodeKind, TextSpec,
    TextUpdate, VisualSpec,
};
use crate::locator;
use crate::options::GenerationOptions;
use crate::style::{
    self, StyleBundle, BODY_FONT_SIZE, CONTAINER_CORNER_RADIUS, HEADING_FONT_SIZE,
    HERO_CORNER_RADIUS, LINE_HEIGHT_PERCENT,
};

/// Name of the heading text node in every container
pub const HEADING_NODE: &str = "Heading";

/// Name of the cover's hero visual node
pub const HERO_NODE: &str = "Hero Placeholder";

/// Name of the body text node in every container
pub const BODY_NODE: &str = "Body";

/// What happened to one node during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The node did not exist and was created
    Created,
    /// The node existed and its content was overwritten
    Refreshed,
    /// The node existed and was left as is
    Untouched,
}

/// Outcome counts for one kind of node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Nodes created by this run
    pub created: usize,
    /// Existing nodes whose content was overwritten
    pub refreshed: usize,
    /// Existing nodes left as they were
    pub untouched: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Refreshed => self.refreshed += 1,
            Outcome::Untouched => self.untouched += 1,
        }
    }

    /// Number of nodes seen
    pub fn total(&self) -> usize {
        self.created + self.refreshed + self.untouched
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Sections processed
    pub sections: usize,
    /// Section pages
    pub pages: Tally,
    /// Section containers
    pub containers: Tally,
    /// Heading text nodes
    pub headings: Tally,
    /// Cover hero placeholders
    pub heroes: Tally,
    /// Body text nodes
    pub bodies: Tally,
    /// Dividers created, re-glyphed or already in place
    pub dividers: Tally,
    /// Dividers that could not be placed
    pub dividers_skipped: usize,
    /// Whether existing pages were removed first
    pub cleared_existing: bool,
    /// Whether the clearing placeholder outlived the catalog loop
    pub residual_placeholder: bool,
}

/// Acquire fonts, build the catalog for `options` and synchronize
///
/// Fonts are acquired before any mutation, so a font failure leaves the
/// document untouched.
///
/// # Parameters
/// * `host` - Document to populate
/// * `provider` - Font source
/// * `options` - Options for this run
///
/// # Returns
/// * `Ok(SyncReport)` - What the run created, refreshed and skipped
/// * `Err(SyncError)` - Fonts unavailable, or a host call failed mid-run
pub fn generate<H, P>(
    host: &mut H,
    provider: &mut P,
    options: &GenerationOptions,
) -> Result<SyncReport, SyncError>
where
    H: DocumentHost + ?Sized,
    P: FontProvider + ?Sized,
{
    log::info!("Loading fonts...");
    let fonts = fonts::acquire(provider, &fonts::default_candidates())?;
    log::info!("Fonts loaded: {} / {}", fonts.regular, fonts.emphasized);

    let sections = catalog::sections(&options.title, options.category.label())?;
    sync(host, &fonts, options, &sections)
}

/// Bring the document in line with `sections`
///
/// A host failure aborts the run and leaves the already-mutated prefix in
/// place; running again resumes from there because every node is found
/// before it is created.
pub fn sync<H: DocumentHost + ?Sized>(
    host: &mut H,
    fonts: &FontSet,
    options: &GenerationOptions,
    sections: &[Section],
) -> Result<SyncReport, SyncError> {
    let mut engine = Synchronizer {
        host,
        fonts,
        options,
        style: style::resolve(options.category, options.theme),
        pending: None,
        report: SyncReport::default(),
    };
    engine.run(sections)?;
    Ok(engine.report)
}

struct Synchronizer<'a, H: DocumentHost + ?Sized> {
    host: &'a mut H,
    fonts: &'a FontSet,
    options: &'a GenerationOptions,
    style: StyleBundle,
    pending: Option<PendingPlaceholder>,
    report: SyncReport,
}

impl<H: DocumentHost + ?Sized> Synchronizer<'_, H> {
    fn run(&mut self, sections: &[Section]) -> Result<(), SyncError> {
        if self.options.clear_existing {
            log::info!("Removing existing pages...");
            self.pending = Some(clear::clear_existing(&mut *self.host)?);
            self.report.cleared_existing = true;
        }

        log::info!("Generating {} sections...", sections.len());
        for (index, section) in sections.iter().enumerate() {
            log::info!(
                "Processing section {}/{}: {}",
                index + 1,
                sections.len(),
                section.page_name
            );
            self.sync_section(section)?;
            self.report.sections += 1;
        }

        self.discard_residual_placeholder(sections);
        self.focus_cover(sections);

        log::info!(
            "Generated {} sections: {} pages created, {} reused",
            self.report.sections,
            self.report.pages.created,
            self.report.pages.untouched
        );
        Ok(())
    }

    fn sync_section(&mut self, section: &Section) -> Result<(), SyncError> {
        let page = self.ensure_page(section)?;

        if let Some(pending) = self.pending.take() {
            pending.close(&mut *self.host, page)?;
            log::info!("Placeholder page removed, now on: {}", section.page_name);
        }

        let container = self.ensure_container(page, section)?;
        let heading = self.ensure_heading(container, section)?;
        if section.is_cover {
            self.ensure_hero(container, heading)?;
        }
        self.ensure_body(container, section)?;

        if section.divider_after {
            self.ensure_divider(page);
        }
        Ok(())
    }

    fn ensure_page(&mut self, section: &Section) -> Result<NodeId, HostError> {
        let (page, outcome) = match locator::find_page(&*self.host, &section.page_name)? {
            Some(page) => (page, Outcome::Untouched),
            None => (self.host.create_page(&section.page_name)?, Outcome::Created),
        };
        self.report.pages.record(outcome);
        Ok(page)
    }

    // Existing containers keep whatever geometry they have.
    fn ensure_container(&mut self, page: NodeId, section: &Section) -> Result<NodeId, HostError> {
        if let Some(container) = locator::find_child(&*self.host, page, &section.container_name)? {
            self.report.containers.record(Outcome::Untouched);
            return Ok(container);
        }

        let spec = ContainerSpec {
            name: section.container_name.clone(),
            x: 0.0,
            y: 0.0,
            width: self.style.width,
            height: self.style.height,
            padding: self.style.padding,
            item_spacing: self.style.item_spacing,
            fill: self.style.palette.background,
            corner_radius: CONTAINER_CORNER_RADIUS,
        };
        let container = self.host.create_container(page, &spec)?;
        self.report.containers.record(Outcome::Created);
        Ok(container)
    }

    fn ensure_heading(&mut self, container: NodeId, section: &Section) -> Result<NodeId, HostError> {
        let spec = TextSpec {
            name: HEADING_NODE.to_string(),
            content: section.heading.clone(),
            font: self.fonts.emphasized.clone(),
            font_size: HEADING_FONT_SIZE,
            fill: self.style.palette.heading,
            line_height_percent: LINE_HEIGHT_PERCENT,
            fixed_width: None,
        };
        let (heading, outcome) = self.ensure_text(container, &spec)?;
        self.report.headings.record(outcome);
        Ok(heading)
    }

    fn ensure_body(&mut self, container: NodeId, section: &Section) -> Result<NodeId, HostError> {
        let spec = TextSpec {
            name: BODY_NODE.to_string(),
            content: section.placeholder.clone(),
            font: self.fonts.regular.clone(),
            font_size: BODY_FONT_SIZE,
            fill: self.style.palette.body,
            line_height_percent: LINE_HEIGHT_PERCENT,
            fixed_width: Some(self.style.content_width()),
        };
        let (body, outcome) = self.ensure_text(container, &spec)?;
        self.report.bodies.record(outcome);
        Ok(body)
    }

    fn ensure_text(
        &mut self,
        container: NodeId,
        spec: &TextSpec,
    ) -> Result<(NodeId, Outcome), HostError> {
        match locator::find_child(&*self.host, container, &spec.name)? {
            None => {
                let node = self.host.create_text(container, None, spec)?;
                Ok((node, Outcome::Created))
            }
            Some(node) if self.options.refresh_placeholders => {
                let update = TextUpdate {
                    content: &spec.content,
                    fill: spec.fill,
                    width: spec.fixed_width,
                };
                self.host.update_text(node, &update)?;
                Ok((node, Outcome::Refreshed))
            }
            Some(node) => Ok((node, Outcome::Untouched)),
        }
    }

    // The hero is a visual asset the user replaces; it is never refreshed.
    fn ensure_hero(&mut self, container: NodeId, heading: NodeId) -> Result<(), HostError> {
        if locator::find_child(&*self.host, container, HERO_NODE)?.is_some() {
            self.report.heroes.record(Outcome::Untouched);
            return Ok(());
        }

        let after_heading = self
            .host
            .children(container)?
            .iter()
            .position(|child| *child == heading)
            .map(|index| index + 1);
        let spec = VisualSpec {
            name: HERO_NODE.to_string(),
            width: self.style.content_width(),
            height: self.style.hero_height,
            fill: self.style.palette.hero,
            corner_radius: HERO_CORNER_RADIUS,
        };
        self.host.create_visual(container, after_heading, &spec)?;
        self.report.heroes.record(Outcome::Created);
        Ok(())
    }

    fn ensure_divider(&mut self, page: NodeId) {
        let Some(glyph) = self.options.divider_style.glyph() else {
            return;
        };

        if self.host.divider_support() == DividerSupport::Unsupported {
            log::warn!("Page dividers are not supported by this host, skipping");
            self.report.dividers_skipped += 1;
            return;
        }

        match self.place_divider(page, glyph) {
            Ok(outcome) => self.report.dividers.record(outcome),
            Err(e) => {
                log::warn!("Could not create page divider: {}", e);
                self.report.dividers_skipped += 1;
            }
        }
    }

    /// Make sure the node right after `page` is a divider showing `glyph`
    ///
    /// Divider glyphs follow the current style whether or not
    /// `refresh_placeholders` is set.
    fn place_divider(&mut self, page: NodeId, glyph: &str) -> Result<Outcome, HostError> {
        let top_level = self.host.top_level();
        let position = top_level
            .iter()
            .position(|node| *node == page)
            .ok_or(HostError::UnknownNode(page))?;

        if let Some(&next) = top_level.get(position + 1) {
            if self.host.kind(next)? == NodeKind::Divider {
                if self.host.name(next)? == glyph {
                    return Ok(Outcome::Untouched);
                }
                self.host.rename(next, glyph)?;
                return Ok(Outcome::Refreshed);
            }
        }

        self.host.create_divider(position + 1, glyph)?;
        Ok(Outcome::Created)
    }

    // Only reachable when no section ran, i.e. the catalog was empty.
    fn discard_residual_placeholder(&mut self, sections: &[Section]) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        log::warn!(
            "Placeholder page still exists after {} sections",
            sections.len()
        );
        self.report.residual_placeholder = true;

        let fallback = self.cover_page(sections);
        match pending.discard(&mut *self.host, fallback) {
            Ok(()) => log::info!("Cleaned up lingering placeholder page"),
            Err(e) => log::warn!("Could not remove placeholder page: {}", e),
        }
    }

    fn cover_page(&self, sections: &[Section]) -> Option<NodeId> {
        let cover = catalog::cover(sections)?;
        match locator::find_page(&*self.host, &cover.page_name) {
            Ok(page) => page,
            Err(e) => {
                log::warn!("Could not look up cover page: {}", e);
                None
            }
        }
    }

    fn focus_cover(&mut self, sections: &[Section]) {
        let Some(cover) = catalog::cover(sections) else {
            return;
        };
        let Some(page) = self.cover_page(sections) else {
            return;
        };

        if let Err(e) = self.host.set_current_page(page) {
            log::warn!("Could not focus cover page: {}", e);
            return;
        }

        match locator::find_child(&*self.host, page, &cover.container_name) {
            Ok(Some(container)) => {
                if let Err(e) = self.host.scroll_into_view(container) {
                    log::warn!("Could not scroll cover into view: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("Could not look up cover container: {}", e),
        }
    }
}
