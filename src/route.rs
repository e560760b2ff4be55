//! Route strings (`/instructions?search=add`) and the navigation history

use std::fmt;

use crate::kind::ReferenceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, the topic index
    Index,
    /// `/{kind}`, with `?search=` kept only for instructions
    List {
        kind: ReferenceKind,
        search: Option<String>,
    },
    /// `/{kind}/{id}`
    Detail { kind: ReferenceKind, id: String },
}

impl Route {
    pub fn list(kind: ReferenceKind) -> Self {
        Route::List { kind, search: None }
    }

    /// The instruction list filtered by `text`. Empty text means no filter.
    pub fn instructions(text: &str) -> Self {
        Route::List {
            kind: ReferenceKind::Instructions,
            search: (!text.is_empty()).then(|| text.to_string()),
        }
    }

    pub fn detail(kind: ReferenceKind, id: impl Into<String>) -> Self {
        Route::Detail {
            kind,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> Option<ReferenceKind> {
        match self {
            Route::Index => None,
            Route::List { kind, .. } | Route::Detail { kind, .. } => Some(*kind),
        }
    }

    pub fn search_text(&self) -> Option<&str> {
        match self {
            Route::List { search, .. } => search.as_deref(),
            _ => None,
        }
    }

    /// Parse `path` as served under `base`. Segments past the id are
    /// ignored; an unknown kind or a path outside `base` yields `None`.
    pub fn parse(path: &str, base: &str) -> Option<Route> {
        let base = base.trim_end_matches('/');
        let rest = path.trim().strip_prefix(base)?;
        if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')) {
            return None;
        }

        let (path, query) = match rest.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (rest, None),
        };

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let Some(kind_segment) = segments.next() else {
            return Some(Route::Index);
        };
        let kind = ReferenceKind::from_id(kind_segment)?;

        if let Some(id) = segments.next() {
            return Some(Route::detail(kind, percent_decode(id)));
        }

        let search = match kind {
            ReferenceKind::Instructions => query
                .and_then(|q| query_param(q, "search"))
                .filter(|s| !s.is_empty()),
            _ => None,
        };
        Some(Route::List { kind, search })
    }

    /// Parse a route typed by the user, which may include `base` or omit it
    pub fn resolve(path: &str, base: &str) -> Option<Route> {
        Route::parse(path, base).or_else(|| Route::parse(path, ""))
    }

    /// Path for this route under `base`; `parse(to_path(r, b), b) == Some(r)`
    pub fn to_path(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Route::Index => format!("{base}/"),
            Route::List { kind, search } => match search {
                Some(text) if !text.is_empty() => {
                    format!("{base}/{}?search={}", kind.id(), percent_encode(text))
                }
                _ => format!("{base}/{}", kind.id()),
            },
            Route::Detail { kind, id } => {
                format!("{base}/{}/{}", kind.id(), percent_encode(id))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path(""))
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (percent_decode(key) == name).then(|| percent_decode(value))
    })
}

/// Encode everything except RFC 3986 unreserved characters
pub fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte))
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes are kept literally.
pub fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hex = |b: u8| char::from(b).to_digit(16).unwrap_or(0) as u8;
                out.push(hex(bytes[i + 1]) << 4 | hex(bytes[i + 2]));
                i += 3;
                continue;
            }
            b'+' => out.push(b' '),
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Browser-style back/forward history of routes
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Route>,
    index: usize,
}

impl History {
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![start],
            index: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.entries[self.index]
    }

    /// Navigate to `route`, dropping any forward entries
    pub fn push(&mut self, route: Route) {
        if *self.current() == route {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(route);
        self.index += 1;
    }

    /// Overwrite the current entry without adding history
    pub fn replace(&mut self, route: Route) {
        self.entries[self.index] = route;
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/", ""), Some(Route::Index));
        assert_eq!(Route::parse("", ""), Some(Route::Index));
        assert_eq!(
            Route::parse("/registers", ""),
            Some(Route::list(ReferenceKind::Registers))
        );
        assert_eq!(
            Route::parse("/instructions/addi", ""),
            Some(Route::detail(ReferenceKind::Instructions, "addi"))
        );
        assert_eq!(
            Route::parse("/instructions/addi/extra/bits", ""),
            Some(Route::detail(ReferenceKind::Instructions, "addi"))
        );
        assert_eq!(Route::parse("/opcodes", ""), None);
    }

    #[test]
    fn test_parse_search() {
        assert_eq!(
            Route::parse("/instructions?search=add%20imm", ""),
            Some(Route::instructions("add imm"))
        );
        assert_eq!(
            Route::parse("/instructions?search=add+imm", ""),
            Some(Route::instructions("add imm"))
        );
        assert_eq!(
            Route::parse("/instructions?search=", ""),
            Some(Route::list(ReferenceKind::Instructions))
        );
        // only the instruction list is searchable
        assert_eq!(
            Route::parse("/syscalls?search=print", ""),
            Some(Route::list(ReferenceKind::Syscalls))
        );
    }

    #[test]
    fn test_base_path() {
        assert_eq!(
            Route::parse("/mips-ref/guides", "/mips-ref/"),
            Some(Route::list(ReferenceKind::Guides))
        );
        assert_eq!(Route::parse("/mips-ref", "/mips-ref"), Some(Route::Index));
        assert_eq!(Route::parse("/guides", "/mips-ref"), None);
        assert_eq!(Route::parse("/mips-refx/guides", "/mips-ref"), None);
        assert_eq!(
            Route::detail(ReferenceKind::Guides, "arrays").to_path("/mips-ref"),
            "/mips-ref/guides/arrays"
        );
        assert_eq!(Route::Index.to_path("/mips-ref/"), "/mips-ref/");
    }

    #[test]
    fn test_resolve_accepts_paths_without_base() {
        assert_eq!(Route::resolve("/", "/mips-ref"), Some(Route::Index));
        assert_eq!(
            Route::resolve("/registers", "/mips-ref"),
            Some(Route::list(ReferenceKind::Registers))
        );
        assert_eq!(
            Route::resolve("/mips-ref/registers/sp", "/mips-ref"),
            Some(Route::detail(ReferenceKind::Registers, "sp"))
        );
        assert_eq!(Route::resolve("/opcodes", "/mips-ref"), None);
    }

    #[test]
    fn test_search_round_trip() {
        let samples = [
            "add",
            "add immediate",
            "  padded  ",
            "a&b=c",
            "100% + more",
            "ünïcödé ⌈x⌉",
            "?#/",
        ];
        for text in samples {
            let route = Route::instructions(text);
            let path = route.to_path("/base");
            let parsed = Route::parse(&path, "/base").unwrap();
            assert_eq!(parsed.search_text(), Some(text), "via {path}");
            assert_eq!(parsed, route);
        }
    }

    #[test]
    fn test_percent_decode_malformed() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%41"), "A");
    }

    #[test]
    fn test_history_push_back_forward() {
        let mut history = History::new(Route::Index);
        history.push(Route::list(ReferenceKind::Registers));
        history.push(Route::detail(ReferenceKind::Registers, "zero"));
        assert_eq!(history.len(), 3);

        assert!(history.back());
        assert_eq!(history.current(), &Route::list(ReferenceKind::Registers));
        assert!(history.forward());
        assert!(!history.forward());

        history.back();
        history.back();
        assert!(!history.back());
        history.push(Route::list(ReferenceKind::Guides));
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_history_replace() {
        let mut history = History::new(Route::Index);
        history.push(Route::list(ReferenceKind::Instructions));
        history.replace(Route::instructions("a"));
        history.replace(Route::instructions("ad"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().search_text(), Some("ad"));
        history.back();
        assert_eq!(history.current(), &Route::Index);
    }

    #[test]
    fn test_push_same_route_is_ignored() {
        let mut history = History::new(Route::Index);
        history.push(Route::Index);
        assert_eq!(history.len(), 1);
    }
}
