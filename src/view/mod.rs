//! Framework-neutral page documents for every route
//!
//! Renderers build a [`Page`] out of [`Block`]s. The TUI draws it with ratatui
//! and `--print` writes it out with [`text::to_text`].

mod detail;
mod list;
pub mod text;

use tracing::debug;

use crate::catalog;
use crate::encoding::EncodingView;
use crate::kind::ReferenceKind;
use crate::route::Route;

/// Where the pages are served from
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// Prefix for every link and icon path, e.g. `/mips-ref`
    pub base_path: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(base_path: &'a str) -> Self {
        Self { base_path }
    }

    pub fn href(&self, route: &Route) -> String {
        route.to_path(self.base_path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub subtitle: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Code(Vec<String>),
    Cards(Vec<Card>),
    Encoding(EncodingView),
    Rows(Vec<Row>),
    /// The instruction search input and its current text
    SearchBox(String),
    Error(String),
}

/// A labelled value, optionally linking elsewhere
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub label: String,
    pub value: String,
    pub link: Option<Route>,
}

impl Card {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            link: None,
        }
    }

    pub fn linked(mut self, route: Route) -> Self {
        self.link = Some(route);
        self
    }
}

/// One summary row of a list page
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub badge: String,
    pub text: String,
    pub pill: Option<String>,
    pub detail: Option<String>,
    pub icon: Option<String>,
    pub link: Route,
    /// `link` as a path under the base path
    pub href: String,
}

impl Row {
    fn new(
        ctx: &RenderContext<'_>,
        badge: impl Into<String>,
        text: impl Into<String>,
        link: Route,
    ) -> Self {
        Self {
            badge: badge.into(),
            text: text.into(),
            pill: None,
            detail: None,
            icon: None,
            href: ctx.href(&link),
            link,
        }
    }

    fn pill(mut self, pill: impl Into<String>) -> Self {
        self.pill = Some(pill.into());
        self
    }

    fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl Page {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            blocks: Vec::new(),
        }
    }

    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn heading(&mut self, text: &str) {
        self.push(Block::Heading(text.to_string()));
    }

    fn paragraph(&mut self, text: impl Into<String>) {
        self.push(Block::Paragraph(text.into()));
    }

    /// `Notes` heading and text, only when there are notes
    fn notes(&mut self, notes: Option<&str>) {
        if let Some(notes) = notes {
            self.heading("Notes");
            self.paragraph(notes);
        }
    }

    /// Every link on the page in reading order
    pub fn links(&self) -> Vec<&Route> {
        let mut links = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Rows(rows) => links.extend(rows.iter().map(|r| &r.link)),
                Block::Cards(cards) => links.extend(cards.iter().filter_map(|c| c.link.as_ref())),
                _ => {}
            }
        }
        links
    }

    /// Rows of all `Rows` blocks in order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Rows(rows) => Some(rows),
                _ => None,
            })
            .flatten()
    }

    pub fn has_search_box(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::SearchBox(_)))
    }
}

/// Build the page for `route`
pub fn render(route: &Route, ctx: &RenderContext<'_>) -> Page {
    debug!(route = %route, "rendering page");
    match route {
        Route::Index => index_page(ctx),
        Route::List { kind, search } => list::render(*kind, search.as_deref().unwrap_or(""), ctx),
        Route::Detail { kind, id } => detail::render(*kind, id),
    }
}

/// Topic index: one row per reference kind
pub fn index_page(ctx: &RenderContext<'_>) -> Page {
    let mut page = Page::new("Topics");
    let rows = ReferenceKind::ALL
        .into_iter()
        .map(|kind| {
            let mut row = Row::new(ctx, kind.friendly_name(), kind.description(), Route::list(kind))
                .pill(format!("{} entries", catalog::count(kind)));
            row.icon = Some(kind.icon_path(ctx.base_path));
            row
        })
        .collect();
    page.push(Block::Rows(rows));
    page
}

/// Shown for route strings that match no route
pub fn not_found_page(path: &str) -> Page {
    let mut page = Page::new("Page not found");
    page.paragraph(format!("Nothing lives at {path}."));
    page.push(Block::Rows(vec![Row::new(
        &RenderContext::default(),
        "Topics",
        "Back to the topic index",
        Route::Index,
    )]));
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_index_lists_every_kind() {
        let page = index_page(&RenderContext::new("/mips"));
        assert_eq!(page.title, "Topics");
        let rows: Vec<&Row> = page.rows().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].badge, "Instruction Types");
        assert_eq!(rows[0].href, "/mips/instruction-types");
        assert_eq!(rows[4].icon.as_deref(), Some("/mips/icons/registers.svg"));
        assert_eq!(rows[5].pill.as_deref(), Some("2 entries"));
    }

    #[test]
    fn test_list_row_counts_match_catalog() {
        let ctx = RenderContext::default();
        for kind in ReferenceKind::ALL {
            let page = render(&Route::list(kind), &ctx);
            assert_eq!(page.rows().count(), catalog::count(kind), "{kind}");
        }
    }

    #[test]
    fn test_list_preserves_catalog_order() {
        let page = render(&Route::list(ReferenceKind::Registers), &RenderContext::default());
        let ids: Vec<String> = page.rows().map(|r| r.link.to_string()).collect();
        let expected: Vec<String> = catalog::REGISTERS
            .iter()
            .map(|r| format!("/registers/{}", r.id))
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_detail_heading_is_record_name() {
        let ctx = RenderContext::default();
        let cases = [
            (ReferenceKind::Instructions, "addi", "Add Immediate"),
            (ReferenceKind::InstructionTypes, "r-type", "R-Type"),
            (ReferenceKind::Guides, "strings", "Strings"),
        ];
        for (kind, id, name) in cases {
            let page = render(&Route::detail(kind, id), &ctx);
            assert_eq!(page.title, name);
        }
    }

    #[test]
    fn test_missing_detail_mentions_id() {
        let page = render(
            &Route::detail(ReferenceKind::Syscalls, "teleport"),
            &RenderContext::default(),
        );
        assert!(page
            .blocks
            .contains(&Block::Paragraph("Item teleport not found.".to_string())));
    }

    #[test]
    fn test_not_found_page() {
        let page = not_found_page("/opcodes");
        assert_eq!(page.title, "Page not found");
        assert_eq!(page.links(), vec![&Route::Index]);
    }
}
