use crate::kind::ReferenceKind;
use crate::theme::Theme;
use ratatui::{
    prelude::*,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

pub const APP_TITLE: &str = "MIPS Reference";
pub const APP_TAGLINE: &str = "MIPS instructions, syscalls, registers, and more";

/// App title plus, off the index page, one tab per topic
pub fn render(
    frame: &mut Frame,
    area: Rect,
    active: Option<ReferenceKind>,
    show_nav: bool,
    theme: &Theme,
) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {APP_TITLE} "),
            Style::default()
                .fg(theme.ui.title_focused.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(APP_TAGLINE, Style::default().fg(theme.ui.title.to_color())),
    ])];

    if show_nav {
        lines.push(nav_line(active, theme));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.ui.border.to_color()));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.ui.background.to_color()));
    frame.render_widget(paragraph, area);
}

fn nav_line(active: Option<ReferenceKind>, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();

    for (idx, kind) in ReferenceKind::ALL.into_iter().enumerate() {
        let style = if Some(kind) == active {
            Style::default()
                .fg(theme.ui.nav_active_fg.to_color())
                .bg(theme.ui.nav_active_bg.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.ui.nav_inactive_fg.to_color())
                .bg(theme.ui.nav_inactive_bg.to_color())
        };

        spans.push(Span::styled(
            format!(" {} {} ", idx + 1, kind.friendly_name()),
            style,
        ));

        if idx < ReferenceKind::ALL.len() - 1 {
            spans.push(Span::styled("│", Style::default().fg(theme.ui.border.to_color())));
        }
    }

    Line::from(spans)
}
