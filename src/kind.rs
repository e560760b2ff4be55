//! The six reference topics and their metadata

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    InstructionTypes,
    Instructions,
    Syscalls,
    AssemblerDirectives,
    Registers,
    Guides,
}

impl ReferenceKind {
    /// Topic order used by the index page and the nav bar
    pub const ALL: [ReferenceKind; 6] = [
        ReferenceKind::InstructionTypes,
        ReferenceKind::Instructions,
        ReferenceKind::Syscalls,
        ReferenceKind::AssemblerDirectives,
        ReferenceKind::Registers,
        ReferenceKind::Guides,
    ];

    /// Path segment identifying the kind
    pub fn id(self) -> &'static str {
        match self {
            ReferenceKind::InstructionTypes => "instruction-types",
            ReferenceKind::Instructions => "instructions",
            ReferenceKind::Syscalls => "syscalls",
            ReferenceKind::AssemblerDirectives => "assembler-directives",
            ReferenceKind::Registers => "registers",
            ReferenceKind::Guides => "guides",
        }
    }

    pub fn friendly_name(self) -> &'static str {
        match self {
            ReferenceKind::InstructionTypes => "Instruction Types",
            ReferenceKind::Instructions => "Instructions",
            ReferenceKind::Syscalls => "Syscalls",
            ReferenceKind::AssemblerDirectives => "Assembler Directives",
            ReferenceKind::Registers => "Registers",
            ReferenceKind::Guides => "Guides",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReferenceKind::InstructionTypes => "MIPS architecture instruction types",
            ReferenceKind::Instructions => {
                "MIPS architecture instructions and QtSpim supported pseudoinstructions"
            }
            ReferenceKind::Syscalls => {
                "QtSpim supported syscalls for console IO, memory allocation, program termination, and other tasks"
            }
            ReferenceKind::AssemblerDirectives => {
                "QtSpim supported assembler directives for program structure, memory allocation, and more"
            }
            ReferenceKind::Registers => "MIPS registers for integers, floats, and system use",
            ReferenceKind::Guides => "Other guides for MIPS programming with QtSpim",
        }
    }

    /// Icon asset for the topic, relative to the deployment base path
    pub fn icon_path(self, base: &str) -> String {
        format!("{}/icons/{}.svg", base.trim_end_matches('/'), self.id())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    /// Zero-based position in [`ReferenceKind::ALL`]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trip() {
        for kind in ReferenceKind::ALL {
            assert_eq!(ReferenceKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ReferenceKind::from_id("opcodes"), None);
    }

    #[test]
    fn test_icon_path() {
        assert_eq!(
            ReferenceKind::Registers.icon_path(""),
            "/icons/registers.svg"
        );
        assert_eq!(
            ReferenceKind::Guides.icon_path("/mips/"),
            "/mips/icons/guides.svg"
        );
    }

    #[test]
    fn test_cycle() {
        assert_eq!(ReferenceKind::Guides.next(), ReferenceKind::InstructionTypes);
        assert_eq!(ReferenceKind::InstructionTypes.prev(), ReferenceKind::Guides);
        assert_eq!(ReferenceKind::Instructions.index(), 1);
    }
}
