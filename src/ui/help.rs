use crate::theme::Theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Help content organized by section - compact two-column format
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "GLOBAL",
        &[
            ("F1 / ?", "Help"),
            ("q Ctrl+Q", "Quit"),
            ("PgUp/PgDn", "Scroll page"),
        ],
    ),
    (
        "BROWSE",
        &[
            ("j/k ↓/↑", "Select link"),
            ("Enter", "Follow link"),
            ("h Bksp", "Back"),
            ("l", "Forward"),
            ("Tab/S-Tab", "Next/prev topic"),
            ("1-6", "Jump to topic"),
            ("g", "Topic index"),
            ("Home/G", "First/last link"),
            ("/", "Search instr."),
            ("y", "Copy route"),
            (":", "Command"),
        ],
    ),
    (
        "SEARCH",
        &[
            ("type", "Filter list"),
            ("↓/↑", "Select result"),
            ("Enter", "Open result"),
            ("Ctrl+U", "Clear"),
            ("Esc", "Browse mode"),
        ],
    ),
    (
        "COMMANDS",
        &[
            (":open /path", "Open route"),
            (":goto sym", "Find symbol"),
            (":back", "Go back"),
            (":forward", "Go forward"),
            (":theme n", "Theme"),
            (":yank", "Copy route"),
            (":help", "This help"),
            (":q", "Quit"),
        ],
    ),
];

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, scroll: usize, width_percent: u16) {
    // Calculate centered popup area
    let popup_width = (area.width * width_percent.clamp(20, 100) / 100).min(68);
    let popup_height = (area.height * 80 / 100).min(28);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(
        area.x + popup_x,
        area.y + popup_y,
        popup_width,
        popup_height,
    );

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = Vec::new();

    let key_style = Style::default()
        .fg(theme.ui.title_focused.to_color())
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.ui.foreground.to_color());
    let section_style = Style::default()
        .fg(theme.page.heading.to_color())
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(theme.ui.border.to_color());

    for (section_name, bindings) in HELP_SECTIONS {
        lines.push(Line::from(vec![
            Span::styled("┌─ ", dim_style),
            Span::styled(*section_name, section_style),
            Span::styled(" ─", dim_style),
        ]));

        // Two-column layout for bindings
        let mut row: Vec<Span> = Vec::new();
        for (i, (key, desc)) in bindings.iter().enumerate() {
            row.push(Span::styled(format!(" {:12}", key), key_style));
            row.push(Span::styled(format!("{:17}", desc), desc_style));

            if i % 2 == 1 || i == bindings.len() - 1 {
                lines.push(Line::from(std::mem::take(&mut row)));
            }
        }
    }

    let content_height = lines.len();
    let visible_height = popup_height.saturating_sub(2) as usize;
    let max_scroll = content_height.saturating_sub(visible_height);
    let scroll = scroll.min(max_scroll);

    let title = Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            super::header::APP_TITLE,
            Style::default()
                .fg(theme.ui.title_focused.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Help ", Style::default().fg(theme.ui.foreground.to_color())),
    ]);

    let block = Block::default()
        .title(title)
        .title_bottom(
            Line::from(vec![
                Span::styled(" ↑↓/jk ", key_style),
                Span::styled("scroll ", desc_style),
                Span::styled("Esc ", key_style),
                Span::styled("close ", desc_style),
            ])
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.ui.border_focused.to_color()))
        .style(Style::default().bg(theme.ui.background.to_color()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));

    frame.render_widget(paragraph, popup_area);

    if content_height > visible_height && popup_area.height > 2 {
        let scrollbar_area = Rect::new(
            popup_area.x + popup_area.width - 1,
            popup_area.y + 1,
            1,
            popup_area.height - 2,
        );

        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▓");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

pub fn total_lines() -> usize {
    HELP_SECTIONS
        .iter()
        .map(|(_, bindings)| 1 + bindings.len().div_ceil(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_lines_counts_rows() {
        // 4 headers + 2 + 6 + 3 + 4 binding rows
        assert_eq!(total_lines(), 19);
    }
}
