use super::{Block, Page, RenderContext, Row};
use crate::catalog;
use crate::kind::ReferenceKind;
use crate::model::Instruction;
use crate::route::Route;
use crate::search::{self, SearchResults};

pub(super) fn render(kind: ReferenceKind, search_text: &str, ctx: &RenderContext<'_>) -> Page {
    let mut page = Page::new(kind.friendly_name());
    page.paragraph(kind.description());

    match kind {
        ReferenceKind::Instructions => {
            page.push(Block::SearchBox(search_text.to_string()));
            let results = search::search(catalog::INSTRUCTIONS, search_text);
            push_results(&mut page, &results, ctx);
        }
        ReferenceKind::InstructionTypes => page.push(Block::Rows(
            catalog::INSTRUCTION_TYPES
                .iter()
                .map(|t| {
                    let fields = if t.fields.is_empty() {
                        "<n/a>".to_string()
                    } else {
                        t.field_names().join(", ")
                    };
                    Row::new(ctx, t.short_name, t.name, Route::detail(kind, t.id))
                        .detail(format!("Field(s): {fields}"))
                })
                .collect(),
        )),
        ReferenceKind::Syscalls => page.push(Block::Rows(
            catalog::SYSCALLS
                .iter()
                .map(|s| {
                    Row::new(ctx, s.code.to_string(), s.description, Route::detail(kind, s.id))
                        .detail(format!("Input(s): {} Output(s): {}", s.inputs, s.outputs))
                })
                .collect(),
        )),
        ReferenceKind::AssemblerDirectives => page.push(Block::Rows(
            catalog::DIRECTIVES
                .iter()
                .map(|d| {
                    Row::new(ctx, d.name, d.description, Route::detail(kind, d.id))
                        .detail(format!("Usage: {}", d.usage))
                })
                .collect(),
        )),
        ReferenceKind::Registers => page.push(Block::Rows(
            catalog::REGISTERS
                .iter()
                .map(|r| {
                    Row::new(ctx, r.numbers, r.name, Route::detail(kind, r.id))
                        .detail(format!("Friendly Name(s): {}", r.friendly_names))
                })
                .collect(),
        )),
        ReferenceKind::Guides => page.push(Block::Rows(
            catalog::GUIDES
                .iter()
                .map(|g| Row::new(ctx, g.name, g.description, Route::detail(kind, g.id)))
                .collect(),
        )),
    }

    page
}

fn instruction_row(inst: &Instruction, ctx: &RenderContext<'_>) -> Row {
    Row::new(
        ctx,
        inst.mnemonic,
        inst.description,
        Route::detail(ReferenceKind::Instructions, inst.id),
    )
    .pill(inst.encoding.kind().name())
    .detail(format!("Usage: {}", inst.usage))
}

fn push_results(page: &mut Page, results: &SearchResults, ctx: &RenderContext<'_>) {
    if results.is_empty() {
        page.paragraph("No instructions match the search.");
        return;
    }

    if !results.exact.is_empty() {
        page.heading("Exact Match");
        page.push(Block::Rows(
            results.exact.iter().map(|i| instruction_row(i, ctx)).collect(),
        ));
    }

    for section in &results.sections {
        page.heading(section.category.title());
        page.push(Block::Rows(
            section.items.iter().map(|i| instruction_row(i, ctx)).collect(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headings(page: &Page) -> Vec<&str> {
        page.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading(h) => Some(h.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_search_box_carries_text() {
        let page = render(ReferenceKind::Instructions, "add", &RenderContext::default());
        assert!(page.blocks.contains(&Block::SearchBox("add".to_string())));
        assert_eq!(headings(&page).first(), Some(&"Exact Match"));
    }

    #[test]
    fn test_no_results_message() {
        let page = render(
            ReferenceKind::Instructions,
            "xyzzynotreal",
            &RenderContext::default(),
        );
        assert!(headings(&page).is_empty());
        assert_eq!(page.rows().count(), 0);
    }

    #[test]
    fn test_instruction_row_shape() {
        let page = render(ReferenceKind::Instructions, "addi", &RenderContext::new("/m"));
        let row = page.rows().next().unwrap();
        assert_eq!(row.badge, "addi");
        assert_eq!(row.pill.as_deref(), Some("I-Type"));
        assert!(row.detail.as_deref().unwrap().starts_with("Usage: "));
        assert_eq!(row.href, "/m/instructions/addi");
    }

    #[test]
    fn test_type_rows_list_fields() {
        let page = render(ReferenceKind::InstructionTypes, "", &RenderContext::default());
        let rows: Vec<&Row> = page.rows().collect();
        assert_eq!(
            rows[2].detail.as_deref(),
            Some("Field(s): opcode, addr")
        );
        assert_eq!(rows.last().unwrap().detail.as_deref(), Some("Field(s): <n/a>"));
    }
}
