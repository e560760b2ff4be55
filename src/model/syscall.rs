/// A QtSpim syscall, selected by placing `code` in `$v0`
#[derive(Debug, Clone, Copy)]
pub struct Syscall {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub code: u32,
    pub inputs: &'static str,
    pub outputs: &'static str,
    pub notes: Option<&'static str>,
}
