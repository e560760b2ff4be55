//! Instructions, their categories and their machine encodings

use std::fmt;

/// Coarse grouping used to organize the instruction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Misc,
    Arithmetic,
    Branch,
    Jump,
    Memory,
    Logical,
    Comparison,
    Shift,
    FloatMoveAndConvert,
    FloatArithmetic,
    FloatConditional,
    System,
}

impl Category {
    /// Every category, in the order the instruction list displays them
    pub const ALL: [Category; 12] = [
        Category::Misc,
        Category::Arithmetic,
        Category::Branch,
        Category::Jump,
        Category::Memory,
        Category::Logical,
        Category::Comparison,
        Category::Shift,
        Category::FloatMoveAndConvert,
        Category::FloatArithmetic,
        Category::FloatConditional,
        Category::System,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Misc => "miscellaneous",
            Category::Arithmetic => "arithmetic",
            Category::Branch => "branch",
            Category::Jump => "jump",
            Category::Memory => "memory",
            Category::Logical => "logical",
            Category::Comparison => "comparison",
            Category::Shift => "shift",
            Category::FloatMoveAndConvert => "float move and convert",
            Category::FloatArithmetic => "float arithmetic",
            Category::FloatConditional => "float conditional",
            Category::System => "system",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Discriminant of an [`Encoding`]. Its name matches the `name` of exactly one
/// instruction-type record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    R,
    I,
    J,
    Ri,
    Cop,
    F,
    Fco,
    Fct,
    Ic,
    Rc,
    Pseudo,
}

impl EncodingKind {
    pub fn name(self) -> &'static str {
        match self {
            EncodingKind::R => "R-Type",
            EncodingKind::I => "I-Type",
            EncodingKind::J => "J-Type",
            EncodingKind::Ri => "RI-Type",
            EncodingKind::Cop => "COP-Type",
            EncodingKind::F => "F-Type",
            EncodingKind::Fco => "FCO-Type",
            EncodingKind::Fct => "FCT-Type",
            EncodingKind::Ic => "IC-Type",
            EncodingKind::Rc => "RC-Type",
            EncodingKind::Pseudo => "Pseudo-Instruction",
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an instruction is laid out in a 32-bit word.
///
/// Every field holds the bit string shown in the encoding table: concrete
/// bits (`0`/`1`), a placeholder letter naming the operand (`sssss`), or `-`
/// for bits the processor ignores. Pseudo-instructions have no layout and
/// carry the real instructions they expand into instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    R {
        opcode: &'static str,
        rs: &'static str,
        rt: &'static str,
        rd: &'static str,
        shamt: &'static str,
        funct: &'static str,
    },
    I {
        opcode: &'static str,
        rs: &'static str,
        rt: &'static str,
        imm: &'static str,
    },
    J {
        opcode: &'static str,
        addr: &'static str,
    },
    Ri {
        opcode: &'static str,
        rs: &'static str,
        regimm: &'static str,
        imm: &'static str,
    },
    Cop {
        opcode: &'static str,
        funct: &'static str,
        rt: &'static str,
        rd: &'static str,
        addr: &'static str,
    },
    F {
        opcode: &'static str,
        format: &'static str,
        ft: &'static str,
        fs: &'static str,
        fd: &'static str,
        funct: &'static str,
    },
    Fco {
        opcode: &'static str,
        format: &'static str,
        cc: &'static str,
        cond: &'static str,
        fs: &'static str,
        fd: &'static str,
        funct: &'static str,
    },
    Fct {
        opcode: &'static str,
        format: &'static str,
        ft: &'static str,
        fs: &'static str,
        cc: &'static str,
        cond: &'static str,
        fc: &'static str,
        funct: &'static str,
    },
    Ic {
        opcode: &'static str,
        format: &'static str,
        cc: &'static str,
        cond: &'static str,
        imm: &'static str,
    },
    Rc {
        opcode: &'static str,
        rs: &'static str,
        cc: &'static str,
        cond: &'static str,
        rd: &'static str,
        shamt: &'static str,
        funct: &'static str,
    },
    Pseudo {
        expansion: &'static [&'static str],
    },
}

impl Encoding {
    pub fn kind(&self) -> EncodingKind {
        match self {
            Encoding::R { .. } => EncodingKind::R,
            Encoding::I { .. } => EncodingKind::I,
            Encoding::J { .. } => EncodingKind::J,
            Encoding::Ri { .. } => EncodingKind::Ri,
            Encoding::Cop { .. } => EncodingKind::Cop,
            Encoding::F { .. } => EncodingKind::F,
            Encoding::Fco { .. } => EncodingKind::Fco,
            Encoding::Fct { .. } => EncodingKind::Fct,
            Encoding::Ic { .. } => EncodingKind::Ic,
            Encoding::Rc { .. } => EncodingKind::Rc,
            Encoding::Pseudo { .. } => EncodingKind::Pseudo,
        }
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(self, Encoding::Pseudo { .. })
    }
}

/// A single instruction or assembler-provided pseudo-instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub id: &'static str,
    /// What you type in assembly source, e.g. `addiu`
    pub mnemonic: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub result: &'static str,
    pub category: Category,
    pub encoding: Encoding,
    pub notes: Option<&'static str>,
    /// Extra search keywords
    pub tags: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_fixed() {
        let titles: Vec<&str> = Category::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(titles.first(), Some(&"miscellaneous"));
        assert_eq!(titles.last(), Some(&"system"));
        assert_eq!(titles.len(), 12);
    }

    #[test]
    fn test_encoding_kind() {
        let enc = Encoding::J {
            opcode: "000010",
            addr: "aaaaaaaaaaaaaaaaaaaaaaaaaa",
        };
        assert_eq!(enc.kind(), EncodingKind::J);
        assert_eq!(enc.kind().name(), "J-Type");
        assert!(!enc.is_pseudo());
        assert!(Encoding::Pseudo { expansion: &[] }.is_pseudo());
    }
}
