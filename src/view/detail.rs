use tracing::error;

use super::{Block, Card, Page};
use crate::catalog;
use crate::encoding::{self, EncodingView};
use crate::kind::ReferenceKind;
use crate::model::{Directive, Guide, GuideBlock, Instruction, InstructionType, Register, Syscall};
use crate::route::Route;

pub(super) fn render(kind: ReferenceKind, id: &str) -> Page {
    let page = match kind {
        ReferenceKind::Instructions => catalog::instruction(id).map(instruction),
        ReferenceKind::InstructionTypes => catalog::instruction_type(id).map(instruction_type),
        ReferenceKind::Syscalls => catalog::syscall(id).map(syscall),
        ReferenceKind::AssemblerDirectives => catalog::directive(id).map(directive),
        ReferenceKind::Registers => catalog::register(id).map(register),
        ReferenceKind::Guides => catalog::guide(id).map(guide),
    };

    page.unwrap_or_else(|| {
        let mut page = Page::new(kind.friendly_name());
        page.paragraph(format!("Item {id} not found."));
        page
    })
}

fn instruction(inst: &Instruction) -> Page {
    let mut page = Page::new(inst.name);
    page.subtitle = Some(inst.mnemonic.to_string());

    page.heading("Summary");
    page.paragraph(inst.description);

    let mut cards = vec![Card::new("Usage", inst.usage), Card::new("Result", inst.result)];
    let ty = encoding::type_for(&inst.encoding);
    if let Ok(ty) = &ty {
        cards.push(
            Card::new("Type", ty.name)
                .linked(Route::detail(ReferenceKind::InstructionTypes, ty.id)),
        );
    }
    page.push(Block::Cards(cards));
    if let Err(e) = &ty {
        page.push(Block::Error(e.to_string()));
    }

    match encoding::layout_for(&inst.encoding) {
        Ok(view @ EncodingView::Table(_)) => {
            page.heading("Encoding");
            page.push(Block::Encoding(view));
        }
        Ok(view @ EncodingView::Expansion(_)) => {
            page.heading("Expansion");
            page.paragraph("Equivalent Instructions");
            page.push(Block::Encoding(view));
        }
        Err(e) => {
            error!(id = inst.id, error = %e, "instruction encoding has no layout");
            page.push(Block::Error(e.to_string()));
        }
    }

    page.notes(inst.notes);
    page
}

fn instruction_type(ty: &InstructionType) -> Page {
    let mut page = Page::new(ty.name);
    page.subtitle = Some(ty.short_name.to_string());

    page.heading("Description");
    page.paragraph(ty.description);

    if !ty.template.is_pseudo() {
        page.heading("Fields");
        page.push(Block::Cards(
            ty.fields
                .iter()
                .map(|f| Card::new(f.name, format!("Size: {}", f.width)))
                .collect(),
        ));
        match encoding::layout_for(&ty.template) {
            Ok(view) => page.push(Block::Encoding(view)),
            Err(e) => {
                error!(id = ty.id, error = %e, "instruction type template has no layout");
                page.push(Block::Error(e.to_string()));
            }
        }
    }

    page.notes(ty.notes);
    page
}

fn register(reg: &Register) -> Page {
    let mut page = Page::new(reg.name);
    page.heading("Summary");
    page.paragraph(reg.description);
    page.push(Block::Cards(vec![
        Card::new("Numbers", reg.numbers),
        Card::new("Friendly Names", reg.friendly_names),
        Card::new("Preserved Across Function Calls", reg.preserved.to_string()),
    ]));
    page.notes(reg.notes);
    page
}

fn syscall(call: &Syscall) -> Page {
    let mut page = Page::new(call.name);
    page.heading("Summary");
    page.paragraph(call.description);
    page.push(Block::Cards(vec![
        Card::new("Code ($v0)", call.code.to_string()),
        Card::new("Inputs", call.inputs),
        Card::new("Outputs", call.outputs),
    ]));
    page.notes(call.notes);
    page
}

fn directive(dir: &Directive) -> Page {
    let mut page = Page::new(dir.name);
    page.heading("Summary");
    page.paragraph(dir.description);
    page.push(Block::Cards(vec![
        Card::new("Usage", dir.usage),
        Card::new("Arguments", dir.arguments),
        Card::new("Effect", dir.effect),
    ]));
    page.notes(dir.notes);
    page
}

fn guide(guide: &Guide) -> Page {
    let mut page = Page::new(guide.name);
    page.subtitle = Some(guide.description.to_string());
    for block in guide.blocks {
        match block {
            GuideBlock::Heading(text) => page.heading(text),
            GuideBlock::Paragraph(text) => page.paragraph(*text),
            GuideBlock::Code(_) => page.push(Block::Code(
                block.code_lines().into_iter().map(str::to_string).collect(),
            )),
        }
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn has_heading(page: &Page, text: &str) -> bool {
        page.blocks.contains(&Block::Heading(text.to_string()))
    }

    #[test]
    fn test_instruction_links_to_its_type() {
        let page = render(ReferenceKind::Instructions, "add");
        assert_eq!(
            page.links(),
            vec![&Route::detail(ReferenceKind::InstructionTypes, "r-type")]
        );
        assert!(has_heading(&page, "Encoding"));
        assert!(page
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Encoding(EncodingView::Table(_)))));
    }

    #[test]
    fn test_pseudo_instruction_shows_expansion() {
        let pseudo = catalog::INSTRUCTIONS
            .iter()
            .find(|i| i.encoding.is_pseudo())
            .unwrap();
        let page = render(ReferenceKind::Instructions, pseudo.id);
        assert!(has_heading(&page, "Expansion"));
        assert!(!has_heading(&page, "Encoding"));
    }

    #[test]
    fn test_notes_only_when_present() {
        let with_notes = catalog::REGISTERS.iter().find(|r| r.notes.is_some()).unwrap();
        let page = render(ReferenceKind::Registers, with_notes.id);
        assert!(has_heading(&page, "Notes"));

        let without = catalog::SYSCALLS.iter().find(|s| s.notes.is_none()).unwrap();
        let page = render(ReferenceKind::Syscalls, without.id);
        assert!(!has_heading(&page, "Notes"));
    }

    #[test]
    fn test_syscall_cards() {
        let page = render(ReferenceKind::Syscalls, "print-integer");
        let cards = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Cards(cards) => Some(cards),
                _ => None,
            })
            .unwrap();
        assert_eq!(cards[0], Card::new("Code ($v0)", "1"));
    }

    #[test]
    fn test_pseudo_type_has_no_fields() {
        let page = render(ReferenceKind::InstructionTypes, "pseudo-instruction");
        assert!(!has_heading(&page, "Fields"));
        assert_eq!(page.title, "Pseudo-Instruction");
    }

    #[test]
    fn test_guide_code_is_split() {
        let page = render(ReferenceKind::Guides, "arrays");
        let first_code = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Code(lines) => Some(lines.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(first_code, vec![".data", "...", "myArray: .space 40"]);
    }
}
