//! Plain-text rendering of pages for `--print`

use std::fmt::{self, Write};

use super::{Block, Page, RenderContext};
use crate::encoding::{EncodingTable, EncodingView};

/// A page formatted as plain text, links written out as hrefs
pub struct PageText<'a> {
    pub page: &'a Page,
    pub ctx: &'a RenderContext<'a>,
}

impl fmt::Display for PageText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page;
        writeln!(f, "{}", page.title)?;
        if let Some(subtitle) = &page.subtitle {
            writeln!(f, "{subtitle}")?;
        }
        writeln!(f, "{}", "=".repeat(page.title.chars().count().max(3)))?;

        for block in &page.blocks {
            f.write_char('\n')?;
            write_block(f, block, self.ctx)?;
        }
        Ok(())
    }
}

pub fn to_text(page: &Page, ctx: &RenderContext<'_>) -> String {
    PageText { page, ctx }.to_string()
}

fn write_block(f: &mut impl Write, block: &Block, ctx: &RenderContext<'_>) -> fmt::Result {
    match block {
        Block::Heading(text) => writeln!(f, "## {text}"),
        Block::Paragraph(text) => writeln!(f, "{text}"),
        Block::Code(lines) => lines.iter().try_for_each(|line| writeln!(f, "    {line}")),
        Block::Cards(cards) => {
            for card in cards {
                write!(f, "{}: {}", card.label, card.value)?;
                if let Some(link) = &card.link {
                    write!(f, " <{}>", ctx.href(link))?;
                }
                f.write_char('\n')?;
            }
            Ok(())
        }
        Block::Encoding(EncodingView::Table(table)) => write_table(f, table),
        Block::Encoding(EncodingView::Expansion(lines)) => {
            lines.iter().try_for_each(|line| writeln!(f, "    {line}"))
        }
        Block::Rows(rows) => {
            for row in rows {
                write!(f, "[{}] {}", row.badge, row.text)?;
                if let Some(pill) = &row.pill {
                    write!(f, " ({pill})")?;
                }
                f.write_char('\n')?;
                if let Some(detail) = &row.detail {
                    writeln!(f, "    {detail}")?;
                }
                if let Some(icon) = &row.icon {
                    writeln!(f, "    icon: {icon}")?;
                }
                writeln!(f, "    -> {}", row.href)?;
            }
            Ok(())
        }
        Block::SearchBox(text) => writeln!(f, "Search: {text}"),
        Block::Error(text) => writeln!(f, "error: {text}"),
    }
}

fn write_table(f: &mut impl Write, table: &EncodingTable) -> fmt::Result {
    let rows = table.rows();
    let border = rows[0]
        .iter()
        .map(|cell| "-".repeat(cell.chars().count() + 2))
        .collect::<Vec<_>>()
        .join("+");
    writeln!(f, "+{border}+")?;
    for row in &rows {
        writeln!(f, "| {} |", row.join(" | "))?;
        writeln!(f, "+{border}+")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ReferenceKind;
    use crate::route::Route;
    use crate::view::render;

    #[test]
    fn test_detail_text() {
        let ctx = RenderContext::new("/mips");
        let page = render(&Route::detail(ReferenceKind::Instructions, "add"), &ctx);
        let text = to_text(&page, &ctx);
        assert!(text.starts_with("Add\n"));
        assert!(text.contains("## Encoding"));
        assert!(text.contains("Type: R-Type </mips/instruction-types/r-type>"));
        assert!(text.contains("31 30 29 28 27 26"));
    }

    #[test]
    fn test_table_lines_line_up() {
        let ctx = RenderContext::default();
        let page = render(&Route::detail(ReferenceKind::InstructionTypes, "i-type"), &ctx);
        let text = to_text(&page, &ctx);
        let table: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with('|') || l.starts_with('+'))
            .collect();
        assert_eq!(table.len(), 9);
        let width = table[0].chars().count();
        assert!(table.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_list_text_has_links() {
        let ctx = RenderContext::default();
        let page = render(&Route::list(ReferenceKind::Guides), &ctx);
        let text = to_text(&page, &ctx);
        assert!(text.contains("[Arrays] Creating, reading, and editing arrays"));
        assert!(text.contains("-> /guides/arrays"));
    }

    struct Full;

    impl Write for Full {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let ctx = RenderContext::default();
        let page = render(&Route::detail(ReferenceKind::InstructionTypes, "r-type"), &ctx);
        for block in &page.blocks {
            assert!(write_block(&mut Full, block, &ctx).is_err());
        }
        assert!(write!(Full, "{}", PageText { page: &page, ctx: &ctx }).is_err());
    }
}
