//! Compiled-in reference tables and lookups over them

mod directives;
mod guides;
mod instruction_types;
mod instructions;
mod registers;
mod syscalls;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use directives::DIRECTIVES;
pub use guides::GUIDES;
pub use instruction_types::INSTRUCTION_TYPES;
pub use instructions::INSTRUCTIONS;
pub use registers::REGISTERS;
pub use syscalls::SYSCALLS;

use crate::kind::ReferenceKind;
use crate::model::{Directive, Guide, Instruction, InstructionType, Register, Syscall};

pub fn instruction(id: &str) -> Option<&'static Instruction> {
    INSTRUCTIONS.iter().find(|i| i.id == id)
}

pub fn instruction_type(id: &str) -> Option<&'static InstructionType> {
    INSTRUCTION_TYPES.iter().find(|t| t.id == id)
}

pub fn register(id: &str) -> Option<&'static Register> {
    REGISTERS.iter().find(|r| r.id == id)
}

pub fn syscall(id: &str) -> Option<&'static Syscall> {
    SYSCALLS.iter().find(|s| s.id == id)
}

pub fn directive(id: &str) -> Option<&'static Directive> {
    DIRECTIVES.iter().find(|d| d.id == id)
}

pub fn guide(id: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.id == id)
}

/// Number of records of one kind
pub fn count(kind: ReferenceKind) -> usize {
    match kind {
        ReferenceKind::InstructionTypes => INSTRUCTION_TYPES.len(),
        ReferenceKind::Instructions => INSTRUCTIONS.len(),
        ReferenceKind::Syscalls => SYSCALLS.len(),
        ReferenceKind::AssemblerDirectives => DIRECTIVES.len(),
        ReferenceKind::Registers => REGISTERS.len(),
        ReferenceKind::Guides => GUIDES.len(),
    }
}

/// Find the record a symbol names, e.g. `addiu`, `$t3`, `.asciiz`, `sbrk` or `r-type`.
/// Case-insensitive. Returns the record's kind and id.
pub fn lookup(symbol: &str) -> Option<(ReferenceKind, &'static str)> {
    let lower = symbol.trim().to_lowercase();
    SYMBOLS.get(lower.as_str()).copied()
}

// First insertion wins, so instruction mnemonics shadow everything else and
// integer register numbers shadow the float ones.
static SYMBOLS: LazyLock<HashMap<String, (ReferenceKind, &'static str)>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    let mut add = |key: &str, kind: ReferenceKind, id: &'static str| {
        map.entry(key.to_lowercase()).or_insert((kind, id));
    };

    for i in INSTRUCTIONS {
        add(i.mnemonic, ReferenceKind::Instructions, i.id);
    }
    for i in INSTRUCTIONS {
        add(i.id, ReferenceKind::Instructions, i.id);
    }

    for r in REGISTERS {
        for name in expand_register_names(r.friendly_names)
            .into_iter()
            .chain(expand_register_names(r.numbers))
        {
            add(&name, ReferenceKind::Registers, r.id);
        }
        add(r.id, ReferenceKind::Registers, r.id);
    }

    for d in DIRECTIVES {
        add(d.name, ReferenceKind::AssemblerDirectives, d.id);
        add(d.id, ReferenceKind::AssemblerDirectives, d.id);
    }

    for s in SYSCALLS {
        add(s.id, ReferenceKind::Syscalls, s.id);
        add(s.name, ReferenceKind::Syscalls, s.id);
    }

    for t in INSTRUCTION_TYPES {
        add(t.id, ReferenceKind::InstructionTypes, t.id);
        add(t.name, ReferenceKind::InstructionTypes, t.id);
    }

    for g in GUIDES {
        add(g.id, ReferenceKind::Guides, g.id);
    }

    map
});

/// `"$t0 - $t2"` becomes `["$t0", "$t1", "$t2"]`. Anything not shaped like a
/// register name or range yields nothing.
fn expand_register_names(text: &str) -> Vec<String> {
    let text = text.trim();
    if !text.starts_with('$') {
        return Vec::new();
    }

    let Some((first, last)) = text.split_once(" - ") else {
        return vec![text.to_string()];
    };

    let split = |name: &str| -> Option<(String, u32)> {
        let digits = name.len() - name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        let (prefix, number) = name.split_at(name.len() - digits);
        Some((prefix.to_string(), number.parse().ok()?))
    };

    match (split(first.trim()), split(last.trim())) {
        (Some((prefix, lo)), Some((prefix_hi, hi))) if prefix == prefix_hi && lo <= hi => {
            (lo..=hi).map(|n| format!("{prefix}{n}")).collect()
        }
        _ => vec![first.trim().to_string(), last.trim().to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Encoding;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate {what} id {id}");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        assert_unique(INSTRUCTIONS.iter().map(|r| r.id), "instruction");
        assert_unique(INSTRUCTION_TYPES.iter().map(|r| r.id), "type");
        assert_unique(REGISTERS.iter().map(|r| r.id), "register");
        assert_unique(SYSCALLS.iter().map(|r| r.id), "syscall");
        assert_unique(DIRECTIVES.iter().map(|r| r.id), "directive");
        assert_unique(GUIDES.iter().map(|r| r.id), "guide");
    }

    #[test]
    fn test_type_fields_span_a_word() {
        for t in INSTRUCTION_TYPES {
            if matches!(t.template, Encoding::Pseudo { .. }) {
                assert!(t.fields.is_empty(), "{} should have no fields", t.id);
            } else {
                assert_eq!(t.total_width(), 32, "{} fields", t.id);
            }
        }
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(instruction("add").map(|i| i.mnemonic), Some("add"));
        assert_eq!(instruction_type("r-type").map(|t| t.name), Some("R-Type"));
        assert!(register("zero").is_some());
        assert!(syscall("print-integer").is_some());
        assert!(guide("arrays").is_some());
        assert!(instruction("not-a-real-id").is_none());
    }

    #[test]
    fn test_counts() {
        assert_eq!(count(ReferenceKind::Instructions), INSTRUCTIONS.len());
        assert_eq!(count(ReferenceKind::Guides), 2);
    }

    #[test]
    fn test_lookup_symbols() {
        assert_eq!(lookup("ADD"), Some((ReferenceKind::Instructions, "add")));
        assert_eq!(lookup("$t3").map(|(k, _)| k), Some(ReferenceKind::Registers));
        assert_eq!(lookup("$8"), lookup("$t0"));
        assert_eq!(
            lookup(".asciiz").map(|(k, _)| k),
            Some(ReferenceKind::AssemblerDirectives)
        );
        assert_eq!(
            lookup("print integer"),
            Some((ReferenceKind::Syscalls, "print-integer"))
        );
        assert_eq!(
            lookup("R-Type"),
            Some((ReferenceKind::InstructionTypes, "r-type"))
        );
        assert_eq!(lookup("nonsense-symbol"), None);
    }

    #[test]
    fn test_expand_register_names() {
        assert_eq!(expand_register_names("$zero"), vec!["$zero"]);
        assert_eq!(
            expand_register_names("$v0 - $v1"),
            vec!["$v0".to_string(), "$v1".to_string()]
        );
        assert_eq!(expand_register_names("$8 - $15").len(), 8);
        assert!(expand_register_names("n/a").is_empty());
    }
}
