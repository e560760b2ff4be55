use std::fmt;

/// Whether a register keeps its value across function calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preservation {
    Yes,
    No,
    NotApplicable,
    NoConvention,
}

impl fmt::Display for Preservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Preservation::Yes => "yes",
            Preservation::No => "no",
            Preservation::NotApplicable => "n/a",
            Preservation::NoConvention => "no convention",
        };
        f.write_str(text)
    }
}

/// A register or group of registers sharing one purpose
#[derive(Debug, Clone, Copy)]
pub struct Register {
    pub id: &'static str,
    pub name: &'static str,
    /// e.g. `$8 - $15`
    pub numbers: &'static str,
    /// e.g. `$t0 - $t7`
    pub friendly_names: &'static str,
    pub description: &'static str,
    pub preserved: Preservation,
    pub notes: Option<&'static str>,
}
