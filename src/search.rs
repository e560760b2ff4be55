//! Token search over the instruction catalog

use crate::model::{Category, Instruction};

/// Instructions of one category that matched a query
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub category: Category,
    pub items: Vec<&'static Instruction>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    /// Instructions whose mnemonic equals a single-token query
    pub exact: Vec<&'static Instruction>,
    /// Non-empty category sections, in [`Category::ALL`] order
    pub sections: Vec<Section>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.sections.is_empty()
    }

    /// Every matched instruction in display order: exact matches, then each section
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &'static Instruction> + '_ {
        self.exact
            .iter()
            .copied()
            .chain(self.sections.iter().flat_map(|s| s.items.iter().copied()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.exact.len() + self.sections.iter().map(|s| s.items.len()).sum::<usize>()
    }
}

/// Lower-case, trim and split on single spaces, dropping empty tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn token_matches(inst: &Instruction, token: &str) -> bool {
    inst.mnemonic.to_lowercase().contains(token)
        || inst.description.to_lowercase().contains(token)
        || inst.tags.iter().any(|tag| tag.to_lowercase().contains(token))
}

/// True when every token matches the instruction. No tokens match everything.
pub fn matches_all(inst: &Instruction, tokens: &[String]) -> bool {
    tokens.iter().all(|t| token_matches(inst, t))
}

pub fn search(items: &'static [Instruction], text: &str) -> SearchResults {
    let tokens = tokenize(text);

    let exact: Vec<&'static Instruction> = match tokens.as_slice() {
        [only] => items
            .iter()
            .filter(|i| i.mnemonic.to_lowercase() == *only)
            .collect(),
        _ => Vec::new(),
    };

    let sections = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let items: Vec<&'static Instruction> = items
                .iter()
                .filter(|i| i.category == category)
                .filter(|i| !exact.iter().any(|e| e.id == i.id))
                .filter(|i| matches_all(i, &tokens))
                .collect();
            (!items.is_empty()).then_some(Section { category, items })
        })
        .collect();

    SearchResults { exact, sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::INSTRUCTIONS;
    use pretty_assertions::assert_eq;

    fn ids(results: &SearchResults) -> Vec<&'static str> {
        let mut ids: Vec<&str> = results.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  Add  Immediate "), vec!["add", "immediate"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_token_order_does_not_matter() {
        let a = search(INSTRUCTIONS, "add immediate");
        let b = search(INSTRUCTIONS, "immediate add");
        assert!(!a.is_empty());
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), ids(&search(INSTRUCTIONS, "  add immediate  ")));
    }

    #[test]
    fn test_empty_query_returns_everything_in_category_order() {
        let results = search(INSTRUCTIONS, "");
        assert!(results.exact.is_empty());
        assert_eq!(results.len(), INSTRUCTIONS.len());

        let order: Vec<Category> = results.sections.iter().map(|s| s.category).collect();
        let expected: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| INSTRUCTIONS.iter().any(|i| i.category == *c))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_exact_match_is_pulled_out() {
        let results = search(INSTRUCTIONS, "ADD");
        let exact: Vec<&str> = results.exact.iter().map(|i| i.id).collect();
        assert_eq!(exact, vec!["add"]);

        let arithmetic = results
            .sections
            .iter()
            .find(|s| s.category == Category::Arithmetic)
            .unwrap();
        assert!(arithmetic.items.iter().all(|i| i.id != "add"));
        assert!(arithmetic.items.iter().any(|i| i.id == "addi"));
    }

    #[test]
    fn test_no_exact_match_for_multiple_tokens() {
        let results = search(INSTRUCTIONS, "add add");
        assert!(results.exact.is_empty());
        assert!(results.iter().any(|i| i.id == "add"));
    }

    #[test]
    fn test_nonsense_finds_nothing() {
        let results = search(INSTRUCTIONS, "xyzzynotreal");
        assert!(results.exact.is_empty());
        assert!(results.sections.is_empty());
    }

    #[test]
    fn test_query_case_and_padding_do_not_change_results() {
        assert_eq!(
            search(INSTRUCTIONS, "  Load WORD "),
            search(INSTRUCTIONS, "load word")
        );
        assert_eq!(search(INSTRUCTIONS, "xyzzynotreal"), SearchResults::default());
    }

    #[test]
    fn test_tags_are_searched() {
        let results = search(INSTRUCTIONS, "plus");
        assert!(results.iter().any(|i| i.id == "add"));
    }
}
