//! Field layouts for instruction encodings and their instruction types

use tracing::error;

use crate::catalog::INSTRUCTION_TYPES;
use crate::error::CatalogError;
use crate::model::{Encoding, EncodingKind, InstructionType};

/// One field of an encoding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub heading: &'static str,
    pub width: u8,
    /// Bit numbers covered, most significant first, e.g. `"10 09 08 07 06"`
    pub bits: String,
    pub value: &'static str,
}

/// A real encoding laid out field by field, most significant field first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTable {
    pub kind: EncodingKind,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingView {
    Table(EncodingTable),
    /// Real instructions a pseudo-instruction assembles into
    Expansion(&'static [&'static str]),
}

impl EncodingTable {
    fn new(kind: EncodingKind, fields: &[(&'static str, u8, &'static str)]) -> Self {
        let mut high = 31i32;
        let columns = fields
            .iter()
            .map(|&(heading, width, value)| {
                let low = high - i32::from(width) + 1;
                let bits = (low..=high)
                    .rev()
                    .map(|b| format!("{b:02}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                high = low - 1;
                Column {
                    heading,
                    width,
                    bits,
                    value,
                }
            })
            .collect();
        Self { kind, columns }
    }

    #[cfg(test)]
    pub fn total_width(&self) -> u32 {
        self.columns.iter().map(|c| u32::from(c.width)).sum()
    }

    #[cfg(test)]
    pub fn headings(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.heading).collect()
    }

    /// The four display rows: headings, field lengths, bit numbers and bit
    /// values. Cells of one column share a width and are centered in it.
    pub fn rows(&self) -> [Vec<String>; 4] {
        let mut rows: [Vec<String>; 4] = Default::default();
        for col in &self.columns {
            let length = col.width.to_string();
            let cells = [col.heading, length.as_str(), col.bits.as_str(), col.value];
            let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
            for (row, cell) in rows.iter_mut().zip(cells) {
                row.push(format!("{cell:^width$}"));
            }
        }
        rows
    }
}

/// Lay out `encoding` as a table of fields. Pseudo-instructions have no
/// layout and fail with [`CatalogError::UnsupportedEncoding`].
pub fn table_for(encoding: &Encoding) -> Result<EncodingTable, CatalogError> {
    let kind = encoding.kind();
    let fields: Vec<(&'static str, u8, &'static str)> = match *encoding {
        Encoding::R {
            opcode,
            rs,
            rt,
            rd,
            shamt,
            funct,
        } => vec![
            ("opcode", 6, opcode),
            ("rs", 5, rs),
            ("rt", 5, rt),
            ("rd", 5, rd),
            ("shamt", 5, shamt),
            ("funct", 6, funct),
        ],
        Encoding::I { opcode, rs, rt, imm } => vec![
            ("opcode", 6, opcode),
            ("rs", 5, rs),
            ("rt", 5, rt),
            ("imm", 16, imm),
        ],
        Encoding::J { opcode, addr } => vec![("opcode", 6, opcode), ("addr", 26, addr)],
        Encoding::Ri {
            opcode,
            rs,
            regimm,
            imm,
        } => vec![
            ("opcode", 6, opcode),
            ("rs", 5, rs),
            ("regimm", 5, regimm),
            ("imm", 16, imm),
        ],
        Encoding::Cop {
            opcode,
            funct,
            rt,
            rd,
            addr,
        } => vec![
            ("opcode", 6, opcode),
            ("funct", 5, funct),
            ("rt", 5, rt),
            ("rd", 5, rd),
            ("addr", 11, addr),
        ],
        Encoding::F {
            opcode,
            format,
            ft,
            fs,
            fd,
            funct,
        } => vec![
            ("opcode", 6, opcode),
            ("format", 5, format),
            ("ft", 5, ft),
            ("fs", 5, fs),
            ("fd", 5, fd),
            ("funct", 6, funct),
        ],
        Encoding::Fco {
            opcode,
            format,
            cc,
            cond,
            fs,
            fd,
            funct,
        } => vec![
            ("opcode", 6, opcode),
            ("format", 5, format),
            ("cc", 3, cc),
            ("cond", 2, cond),
            ("fs", 5, fs),
            ("fd", 5, fd),
            ("funct", 6, funct),
        ],
        Encoding::Fct {
            opcode,
            format,
            ft,
            fs,
            cc,
            cond,
            fc,
            funct,
        } => vec![
            ("opcode", 6, opcode),
            ("format", 5, format),
            ("ft", 5, ft),
            ("fs", 5, fs),
            ("cc", 3, cc),
            ("cond", 2, cond),
            ("fc", 2, fc),
            ("funct", 4, funct),
        ],
        Encoding::Ic {
            opcode,
            format,
            cc,
            cond,
            imm,
        } => vec![
            ("opcode", 6, opcode),
            ("format", 5, format),
            ("cc", 3, cc),
            ("cond", 2, cond),
            ("imm", 16, imm),
        ],
        Encoding::Rc {
            opcode,
            rs,
            cc,
            cond,
            rd,
            shamt,
            funct,
        } => vec![
            ("opcode", 6, opcode),
            ("rs", 5, rs),
            ("cc", 3, cc),
            ("cond", 2, cond),
            ("rd", 5, rd),
            ("shamt", 5, shamt),
            ("funct", 6, funct),
        ],
        Encoding::Pseudo { .. } => return Err(CatalogError::UnsupportedEncoding(kind)),
    };
    Ok(EncodingTable::new(kind, &fields))
}

/// How to display `encoding`: a field table, or the expansion of a pseudo-instruction
pub fn layout_for(encoding: &Encoding) -> Result<EncodingView, CatalogError> {
    match encoding {
        Encoding::Pseudo { expansion } => Ok(EncodingView::Expansion(*expansion)),
        other => table_for(other).map(EncodingView::Table),
    }
}

/// The instruction-type record describing `encoding`
pub fn type_for(encoding: &Encoding) -> Result<&'static InstructionType, CatalogError> {
    find_type(INSTRUCTION_TYPES, encoding)
}

fn find_type(
    types: &'static [InstructionType],
    encoding: &Encoding,
) -> Result<&'static InstructionType, CatalogError> {
    let name = encoding.kind().name();
    types.iter().find(|t| t.name == name).ok_or_else(|| {
        error!(name, "catalog has no instruction type for encoding");
        CatalogError::UnknownInstructionType { name }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::INSTRUCTIONS;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_r_type_bit_labels() {
        let add = INSTRUCTIONS.iter().find(|i| i.id == "add").unwrap();
        let table = table_for(&add.encoding).unwrap();
        let bits: Vec<&str> = table.columns.iter().map(|c| c.bits.as_str()).collect();
        assert_eq!(
            bits,
            vec![
                "31 30 29 28 27 26",
                "25 24 23 22 21",
                "20 19 18 17 16",
                "15 14 13 12 11",
                "10 09 08 07 06",
                "05 04 03 02 01 00",
            ]
        );
    }

    #[test]
    fn test_every_instruction_resolves() {
        for inst in INSTRUCTIONS {
            let ty = type_for(&inst.encoding)
                .unwrap_or_else(|e| panic!("{}: {e}", inst.id));
            assert_eq!(ty.name, inst.encoding.kind().name());
            assert!(layout_for(&inst.encoding).is_ok(), "{}", inst.id);
        }
    }

    #[test]
    fn test_values_fill_their_fields() {
        for inst in INSTRUCTIONS {
            if let Ok(table) = table_for(&inst.encoding) {
                assert_eq!(table.total_width(), 32, "{}", inst.id);
                for col in &table.columns {
                    assert_eq!(
                        col.value.chars().count(),
                        usize::from(col.width),
                        "{} field {}",
                        inst.id,
                        col.heading
                    );
                }
            }
        }
    }

    #[test]
    fn test_headings_match_type_fields() {
        for ty in INSTRUCTION_TYPES {
            match layout_for(&ty.template).unwrap() {
                EncodingView::Table(table) => {
                    assert_eq!(table.headings(), ty.field_names(), "{}", ty.id);
                    let widths: Vec<u8> = table.columns.iter().map(|c| c.width).collect();
                    let declared: Vec<u8> = ty.fields.iter().map(|f| f.width).collect();
                    assert_eq!(widths, declared, "{}", ty.id);
                }
                EncodingView::Expansion(lines) => {
                    assert!(lines.is_empty());
                    assert!(ty.fields.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_pseudo_has_expansion() {
        let pseudo = INSTRUCTIONS
            .iter()
            .find(|i| i.encoding.is_pseudo())
            .unwrap();
        match layout_for(&pseudo.encoding).unwrap() {
            EncodingView::Expansion(lines) => assert!(!lines.is_empty()),
            EncodingView::Table(_) => panic!("pseudo laid out as a table"),
        }
        assert_eq!(
            table_for(&pseudo.encoding),
            Err(CatalogError::UnsupportedEncoding(EncodingKind::Pseudo))
        );
    }

    #[test]
    fn test_missing_type_is_an_error() {
        let enc = Encoding::J {
            opcode: "000010",
            addr: "aaaaaaaaaaaaaaaaaaaaaaaaaa",
        };
        assert_eq!(
            find_type(&[], &enc).map(|t| t.id),
            Err(CatalogError::UnknownInstructionType { name: "J-Type" })
        );
    }

    #[test]
    fn test_rows_are_padded() {
        let table = table_for(&INSTRUCTION_TYPES[2].template).unwrap();
        let rows = table.rows();
        for row in &rows {
            assert_eq!(row.len(), 2);
        }
        for col in 0..2 {
            let width = rows[0][col].chars().count();
            assert!(rows.iter().all(|r| r[col].chars().count() == width));
        }
        assert_eq!(rows[1][1].trim(), "26");
    }
}
