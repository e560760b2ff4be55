use super::instruction::Encoding;

/// One named bit-field of an instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub width: u8,
}

impl Field {
    pub const fn new(name: &'static str, width: u8) -> Self {
        Self { name, width }
    }
}

/// A class of encodings sharing one field layout (R-Type, I-Type, ...)
#[derive(Debug, Clone, Copy)]
pub struct InstructionType {
    pub id: &'static str,
    pub short_name: &'static str,
    /// Matches [`EncodingKind::name`](super::EncodingKind::name) of the encodings it describes
    pub name: &'static str,
    pub description: &'static str,
    /// Field values are placeholder patterns rather than concrete bits
    pub template: Encoding,
    pub fields: &'static [Field],
    pub notes: Option<&'static str>,
}

impl InstructionType {
    #[cfg(test)]
    pub fn total_width(&self) -> u32 {
        self.fields.iter().map(|f| u32::from(f.width)).sum()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}
