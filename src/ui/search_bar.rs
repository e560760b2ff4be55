use crate::theme::Theme;
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render(frame: &mut Frame, area: Rect, input: &str, matches: usize, theme: &Theme) {
    let text = format!(
        "/{}  [{} match{}]",
        input,
        matches,
        if matches == 1 { "" } else { "es" }
    );

    let paragraph = Paragraph::new(text).style(
        Style::default()
            .fg(theme.ui.foreground.to_color())
            .bg(theme.ui.status_bar_bg.to_color()),
    );
    frame.render_widget(paragraph, area);

    // Position cursor after the slash and input
    let offset = input.chars().count() as u16;
    frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y));
}
