/// One piece of a guide's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideBlock {
    Heading(&'static str),
    Paragraph(&'static str),
    /// Source lines joined with `;`
    Code(&'static str),
}

impl GuideBlock {
    /// Lines of a code block. Non-code blocks yield their text as one line.
    pub fn code_lines(&self) -> Vec<&'static str> {
        match self {
            GuideBlock::Code(text) => text.split(';').collect(),
            GuideBlock::Heading(text) | GuideBlock::Paragraph(text) => vec![*text],
        }
    }
}

/// A short tutorial on some MIPS programming topic
#[derive(Debug, Clone, Copy)]
pub struct Guide {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub blocks: &'static [GuideBlock],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_lines_keep_blank_lines() {
        let block = GuideBlock::Code(".data;...;;myArray: .space 40");
        assert_eq!(
            block.code_lines(),
            vec![".data", "...", "", "myArray: .space 40"]
        );
    }

    #[test]
    fn test_paragraph_is_single_line() {
        let block = GuideBlock::Paragraph("a; b");
        assert_eq!(block.code_lines(), vec!["a; b"]);
    }
}
