/// An assembler directive such as `.data` or `.asciiz`
#[derive(Debug, Clone, Copy)]
pub struct Directive {
    pub id: &'static str,
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub arguments: &'static str,
    pub effect: &'static str,
    pub notes: Option<&'static str>,
}
