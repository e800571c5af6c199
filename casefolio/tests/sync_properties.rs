use casefolio::clear::PLACEHOLDER_PAGE_NAME;
use casefolio::engine::{BODY_NODE, HEADING_NODE, HERO_NODE};
use casefolio::host::{
    ContainerSpec, DividerSupport, NodeKind, TextSpec, TextUpdate, VisualSpec,
};
use casefolio::locator::{find_child, find_page};
use casefolio::style::Rgb;
use casefolio::{
    generate, sync, Category, DividerStyle, DocumentHost, FontName, FontSet, GenerationOptions,
    HostError, MemoryDocument, NodeId, Section, SyncError, SystemFonts, Theme,
};

const COVER_PAGE: &str = "🌟 00 — Cover";
const COVER_BOARD: &str = "Cover Board";
const BRIEF_PAGE: &str = "🧾 01 — Brief";
const BRIEF_BOARD: &str = "Brief Board";

type Shape = Vec<(String, Vec<(String, Vec<String>)>)>;

/// Names of every top-level node, its children and their children
fn shape(doc: &MemoryDocument) -> Shape {
    doc.top_level()
        .into_iter()
        .map(|top| {
            let containers = doc
                .children(top)
                .unwrap()
                .into_iter()
                .map(|container| (doc.name(container).unwrap(), doc.child_names(container)))
                .collect();
            (doc.name(top).unwrap(), containers)
        })
        .collect()
}

fn node(doc: &MemoryDocument, page: &str, container: &str, child: &str) -> NodeId {
    let page = find_page(doc, page).unwrap().expect("page exists");
    let container = find_child(doc, page, container)
        .unwrap()
        .expect("container exists");
    find_child(doc, container, child)
        .unwrap()
        .expect("child exists")
}

fn section(name: &str, divider_after: bool) -> Section {
    Section {
        id: name.to_lowercase(),
        page_name: name.to_string(),
        container_name: format!("{} Board", name),
        heading: name.to_string(),
        placeholder: format!("About {}", name),
        is_cover: false,
        divider_after,
    }
}

fn inter() -> FontSet {
    FontSet {
        regular: FontName::new("Inter", "Regular"),
        emphasized: FontName::new("Inter", "Semi Bold"),
    }
}

#[test]
fn test_repeated_runs_keep_the_same_shape() {
    let mut doc = MemoryDocument::new();
    let mut fonts = SystemFonts::common();
    let options = GenerationOptions::default();

    generate(&mut doc, &mut fonts, &options).unwrap();
    let first = shape(&doc);

    generate(&mut doc, &mut fonts, &options).unwrap();
    assert_eq!(shape(&doc), first);

    // One starting page, ten section pages, three dividers
    assert_eq!(first.len(), 14);
    assert_eq!(doc.page_count(), 11);
}

#[test]
fn test_user_edits_survive_unless_refresh_is_requested() {
    let mut doc = MemoryDocument::new();
    let mut fonts = SystemFonts::common();
    let options = GenerationOptions::default();
    generate(&mut doc, &mut fonts, &options).unwrap();

    let heading = node(&doc, BRIEF_PAGE, BRIEF_BOARD, HEADING_NODE);
    let body = node(&doc, BRIEF_PAGE, BRIEF_BOARD, BODY_NODE);
    let original_body = doc.text(body).unwrap().content.clone();
    let edit = |doc: &mut MemoryDocument, id: NodeId, content: &str| {
        doc.update_text(
            id,
            &TextUpdate {
                content,
                fill: Rgb::new(1.0, 0.0, 0.0),
                width: None,
            },
        )
        .unwrap();
    };
    edit(&mut doc, heading, "Our Brief");
    edit(&mut doc, body, "Written by hand");

    generate(&mut doc, &mut fonts, &options).unwrap();
    assert_eq!(doc.text(heading).unwrap().content, "Our Brief");
    assert_eq!(doc.text(body).unwrap().content, "Written by hand");
    assert_eq!(doc.text(heading).unwrap().fill, Rgb::new(1.0, 0.0, 0.0));

    let refresh = GenerationOptions {
        refresh_placeholders: true,
        ..GenerationOptions::default()
    };
    let report = generate(&mut doc, &mut fonts, &refresh).unwrap();
    assert_eq!(report.headings.refreshed, 10);
    assert_eq!(report.bodies.refreshed, 10);
    assert_eq!(doc.text(heading).unwrap().content, "Brief");
    assert_eq!(doc.text(body).unwrap().content, original_body);
    assert_eq!(
        doc.text(heading).unwrap().fill,
        casefolio::style::palette(Theme::Dark).heading
    );

    // Same nodes, updated in place
    assert_eq!(node(&doc, BRIEF_PAGE, BRIEF_BOARD, HEADING_NODE), heading);
    assert_eq!(node(&doc, BRIEF_PAGE, BRIEF_BOARD, BODY_NODE), body);
}

#[test]
fn test_clearing_never_empties_the_document() {
    let mut doc = MemoryDocument::new();
    for name in ["Moodboard", "Archive", "Scratch"] {
        doc.create_page(name).unwrap();
    }
    let mut fonts = SystemFonts::common();
    let options = GenerationOptions {
        clear_existing: true,
        ..GenerationOptions::default()
    };

    generate(&mut doc, &mut fonts, &options).unwrap();

    assert!(!doc.page_count_trace().is_empty());
    assert!(doc.page_count_trace().iter().all(|count| *count >= 1));
}

#[test]
fn test_clearing_replaces_unrelated_pages_with_the_catalog() {
    let mut doc = MemoryDocument::new();
    for name in ["Moodboard", "Archive", "Scratch"] {
        doc.create_page(name).unwrap();
    }
    let mut fonts = SystemFonts::common();
    let options = GenerationOptions {
        clear_existing: true,
        ..GenerationOptions::default()
    };

    let report = generate(&mut doc, &mut fonts, &options).unwrap();
    assert!(report.cleared_existing);
    assert!(!report.residual_placeholder);

    let names = doc.page_names();
    assert_eq!(names.len(), 10);
    for gone in ["Page 1", "Moodboard", "Archive", "Scratch", PLACEHOLDER_PAGE_NAME] {
        assert!(!names.iter().any(|name| name == gone), "{} still exists", gone);
    }
    assert_eq!(names[0], COVER_PAGE);

    let cover = find_page(&doc, COVER_PAGE).unwrap().unwrap();
    assert_eq!(doc.current_page(), Some(cover));
    let board = find_child(&doc, cover, COVER_BOARD).unwrap().unwrap();
    assert_eq!(doc.viewport(), Some(board));
}

#[test]
fn test_hero_only_on_cover() {
    let mut doc = MemoryDocument::new();
    let mut fonts = SystemFonts::common();
    generate(&mut doc, &mut fonts, &GenerationOptions::default()).unwrap();
    generate(&mut doc, &mut fonts, &GenerationOptions::default()).unwrap();

    let with_hero: Vec<String> = shape(&doc)
        .into_iter()
        .filter(|(_, containers)| {
            containers
                .iter()
                .any(|(_, children)| children.iter().any(|child| child == HERO_NODE))
        })
        .map(|(page, _)| page)
        .collect();
    assert_eq!(with_hero, vec![COVER_PAGE]);

    let cover = find_page(&doc, COVER_PAGE).unwrap().unwrap();
    let board = find_child(&doc, cover, COVER_BOARD).unwrap().unwrap();
    assert_eq!(
        doc.child_names(board),
        vec![HEADING_NODE, HERO_NODE, BODY_NODE]
    );
}

#[test]
fn test_dividers_follow_flagged_sections_only() {
    let mut doc = MemoryDocument::new();
    let sections = vec![section("A", true), section("B", true), section("C", false)];
    let options = GenerationOptions {
        clear_existing: true,
        divider_style: DividerStyle::EmDash,
        ..GenerationOptions::default()
    };

    sync(&mut doc, &inter(), &options, &sections).unwrap();
    assert_eq!(doc.top_level_names(), vec!["A", "———", "B", "———", "C"]);

    // Re-running without clearing keeps exactly one divider per flag
    let again = GenerationOptions {
        clear_existing: false,
        ..options
    };
    sync(&mut doc, &inter(), &again, &sections).unwrap();
    assert_eq!(doc.top_level_names(), vec!["A", "———", "B", "———", "C"]);

    let kinds: Vec<NodeKind> = doc
        .top_level()
        .into_iter()
        .map(|id| doc.kind(id).unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Page,
            NodeKind::Divider,
            NodeKind::Page,
            NodeKind::Divider,
            NodeKind::Page
        ]
    );
}

#[test]
fn test_mobile_dark_cover() {
    let mut doc = MemoryDocument::new();
    let mut fonts = SystemFonts::common();
    let options = GenerationOptions {
        title: "Acme".to_string(),
        category: Category::Mobile,
        theme: Theme::Dark,
        ..GenerationOptions::default()
    };
    generate(&mut doc, &mut fonts, &options).unwrap();

    let cover = find_page(&doc, COVER_PAGE).unwrap().unwrap();
    let board = find_child(&doc, cover, COVER_BOARD).unwrap().unwrap();
    let props = doc.container(board).unwrap();
    assert_eq!(props.width, 390.0);
    assert_eq!(props.height, 844.0);
    assert_eq!(props.padding, 32.0);
    assert_eq!(props.fill, Rgb::new(0.07, 0.07, 0.08));
    assert_eq!(props.corner_radius, 24.0);

    let heading = node(&doc, COVER_PAGE, COVER_BOARD, HEADING_NODE);
    assert_eq!(doc.text(heading).unwrap().content, "Acme");

    let body = node(&doc, COVER_PAGE, COVER_BOARD, BODY_NODE);
    assert!(doc.text(body).unwrap().content.contains("Type: mobile"));

    let hero = node(&doc, COVER_PAGE, COVER_BOARD, HERO_NODE);
    let hero = doc.visual(hero).unwrap();
    assert_eq!(hero.width, 326.0);
    assert_eq!(hero.height, 360.0);
}

#[test]
fn test_missing_fonts_abort_before_mutation() {
    let mut doc = MemoryDocument::new();
    let before = shape(&doc);
    let mut fonts = SystemFonts::default();

    let options = GenerationOptions {
        clear_existing: true,
        ..GenerationOptions::default()
    };
    let err = generate(&mut doc, &mut fonts, &options).unwrap_err();
    assert!(matches!(err, SyncError::Fonts(_)));
    assert_eq!(shape(&doc), before);
}

#[test]
fn test_fallback_font_used_for_both_roles() {
    let mut doc = MemoryDocument::new();
    let comic = FontName::new("Comic Neue", "Regular");
    let mut fonts = SystemFonts::new(vec![comic.clone()]);
    generate(&mut doc, &mut fonts, &GenerationOptions::default()).unwrap();

    let heading = node(&doc, BRIEF_PAGE, BRIEF_BOARD, HEADING_NODE);
    let body = node(&doc, BRIEF_PAGE, BRIEF_BOARD, BODY_NODE);
    assert_eq!(doc.text(heading).unwrap().font, comic);
    assert_eq!(doc.text(body).unwrap().font, comic);
}

/// Host that fails after a fixed number of text nodes, and optionally on
/// every divider while still reporting divider support
struct FailingHost {
    inner: MemoryDocument,
    texts_left: usize,
    dividers_fail: bool,
}

impl DocumentHost for FailingHost {
    fn top_level(&self) -> Vec<NodeId> {
        self.inner.top_level()
    }
    fn children(&self, parent: NodeId) -> Result<Vec<NodeId>, HostError> {
        self.inner.children(parent)
    }
    fn name(&self, node: NodeId) -> Result<String, HostError> {
        self.inner.name(node)
    }
    fn kind(&self, node: NodeId) -> Result<NodeKind, HostError> {
        self.inner.kind(node)
    }
    fn is_removed(&self, node: NodeId) -> bool {
        self.inner.is_removed(node)
    }
    fn current_page(&self) -> Option<NodeId> {
        self.inner.current_page()
    }
    fn set_current_page(&mut self, page: NodeId) -> Result<(), HostError> {
        self.inner.set_current_page(page)
    }
    fn create_page(&mut self, name: &str) -> Result<NodeId, HostError> {
        self.inner.create_page(name)
    }
    fn create_container(
        &mut self,
        page: NodeId,
        spec: &ContainerSpec,
    ) -> Result<NodeId, HostError> {
        self.inner.create_container(page, spec)
    }
    fn create_text(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        spec: &TextSpec,
    ) -> Result<NodeId, HostError> {
        if self.texts_left == 0 {
            return Err(HostError::Unsupported("text nodes"));
        }
        self.texts_left -= 1;
        self.inner.create_text(parent, index, spec)
    }
    fn create_visual(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        spec: &VisualSpec,
    ) -> Result<NodeId, HostError> {
        self.inner.create_visual(parent, index, spec)
    }
    fn update_text(&mut self, node: NodeId, update: &TextUpdate<'_>) -> Result<(), HostError> {
        self.inner.update_text(node, update)
    }
    fn rename(&mut self, node: NodeId, name: &str) -> Result<(), HostError> {
        self.inner.rename(node, name)
    }
    fn remove(&mut self, node: NodeId) -> Result<(), HostError> {
        self.inner.remove(node)
    }
    fn divider_support(&self) -> DividerSupport {
        self.inner.divider_support()
    }
    fn create_divider(&mut self, index: usize, glyph: &str) -> Result<NodeId, HostError> {
        if self.dividers_fail {
            return Err(HostError::Unsupported("page dividers"));
        }
        self.inner.create_divider(index, glyph)
    }
    fn scroll_into_view(&mut self, node: NodeId) -> Result<(), HostError> {
        self.inner.scroll_into_view(node)
    }
}

#[test]
fn test_rerun_completes_a_failed_run() {
    let options = GenerationOptions {
        clear_existing: true,
        ..GenerationOptions::default()
    };
    let mut fonts = SystemFonts::common();

    // Cover heading, cover body and brief heading succeed; brief body fails
    let mut host = FailingHost {
        inner: MemoryDocument::new(),
        texts_left: 3,
        dividers_fail: false,
    };
    let err = generate(&mut host, &mut fonts, &options).unwrap_err();
    assert!(matches!(err, SyncError::Host(HostError::Unsupported(_))));

    let partial = host.inner;
    assert_eq!(partial.page_names(), vec![COVER_PAGE, BRIEF_PAGE]);
    let brief = find_page(&partial, BRIEF_PAGE).unwrap().unwrap();
    let brief_board = find_child(&partial, brief, BRIEF_BOARD).unwrap().unwrap();
    assert_eq!(partial.child_names(brief_board), vec![HEADING_NODE]);

    let mut resumed = partial;
    let resume = GenerationOptions {
        clear_existing: false,
        ..options.clone()
    };
    generate(&mut resumed, &mut fonts, &resume).unwrap();

    let mut fresh = MemoryDocument::new();
    generate(&mut fresh, &mut fonts, &options).unwrap();
    assert_eq!(shape(&resumed), shape(&fresh));
}

#[test]
fn test_failing_divider_is_skipped() {
    let mut host = FailingHost {
        inner: MemoryDocument::new(),
        texts_left: usize::MAX,
        dividers_fail: true,
    };
    assert_eq!(host.divider_support(), DividerSupport::Supported);
    let sections = vec![section("A", true), section("B", false)];

    let report = sync(&mut host, &inter(), &GenerationOptions::default(), &sections).unwrap();
    assert_eq!(report.sections, 2);
    assert_eq!(report.dividers_skipped, 1);
    assert_eq!(report.dividers.total(), 0);
    assert_eq!(report.pages.created, 2);

    assert_eq!(host.inner.top_level_names(), vec!["Page 1", "A", "B"]);
    assert!(host
        .inner
        .top_level()
        .into_iter()
        .all(|id| host.inner.kind(id).unwrap() == NodeKind::Page));
}
