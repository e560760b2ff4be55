use crate::theme::Theme;
use ratatui::{prelude::*, widgets::Paragraph};

/// Command verbs with their usage, in the order hints are offered
const COMMANDS: &[(&str, &str)] = &[
    ("open", "open <route>  e.g. /instructions/addi"),
    ("goto", "goto <symbol>  mnemonic, $reg, .directive, syscall"),
    ("back", "back"),
    ("forward", "forward"),
    ("index", "index  topic list"),
    ("theme", "theme <dark|light|dracula|gruvbox|nord>"),
    ("yank", "yank  copy the current route"),
    ("help", "help"),
    ("quit", "quit"),
];

/// Usage line for the first command whose name starts with the typed verb
pub fn hint(input: &str) -> Option<&'static str> {
    let verb = input.split_whitespace().next()?;
    if verb.starts_with('/') {
        return Some("<route>  open this route");
    }
    COMMANDS
        .iter()
        .find(|(name, _)| name.starts_with(verb))
        .map(|(_, usage)| *usage)
}

pub fn render(frame: &mut Frame, area: Rect, input: &str, theme: &Theme) {
    let base = Style::default()
        .fg(theme.ui.foreground.to_color())
        .bg(theme.ui.status_bar_bg.to_color());

    let mut spans = vec![
        Span::styled(":", base.fg(theme.ui.mode_command_bg.to_color())),
        Span::styled(input.to_string(), base),
    ];
    if let Some(usage) = hint(input) {
        spans.push(Span::styled(
            format!("    {}", usage),
            base.fg(theme.ui.border.to_color()).add_modifier(Modifier::ITALIC),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);

    let offset = input.chars().count() as u16;
    frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_matches_verb_prefix() {
        assert_eq!(hint("go"), Some("goto <symbol>  mnemonic, $reg, .directive, syscall"));
        assert_eq!(hint("th nord"), Some("theme <dark|light|dracula|gruvbox|nord>"));
        assert_eq!(hint("/registers"), Some("<route>  open this route"));
    }

    #[test]
    fn test_no_hint_for_empty_or_unknown() {
        assert_eq!(hint(""), None);
        assert_eq!(hint("frobnicate"), None);
    }
}
