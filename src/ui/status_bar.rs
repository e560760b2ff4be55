use crate::app::{App, Mode};
use ratatui::{prelude::*, text::Span, widgets::Paragraph};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let (mode_str, mode_bg, mode_fg) = match app.mode {
        Mode::Browse => (
            " BROWSE ",
            &theme.ui.mode_browse_bg,
            &theme.ui.mode_browse_fg,
        ),
        Mode::Search => (
            " SEARCH ",
            &theme.ui.mode_search_bg,
            &theme.ui.mode_search_fg,
        ),
        Mode::Command => (
            " COMMAND ",
            &theme.ui.mode_command_bg,
            &theme.ui.mode_command_fg,
        ),
    };
    let mode_style = Style::default()
        .bg(mode_bg.to_color())
        .fg(mode_fg.to_color())
        .add_modifier(Modifier::BOLD);

    let history = &app.history;
    let nav_info = format!(
        " {}{} ",
        if history.can_go_back() { "◀" } else { " " },
        if history.can_go_forward() { "▶" } else { " " },
    );

    let links = app.page.links().len();
    let position = if links > 0 {
        format!(" {}/{} ", app.selected + 1, links)
    } else {
        String::from(" - ")
    };

    let status_msg = format!(" {} ", app.status_message);

    let left_len = mode_str.chars().count()
        + nav_info.chars().count()
        + status_msg.chars().count();
    let right_len = position.chars().count();
    let padding = (area.width as usize)
        .checked_sub(left_len + right_len)
        .filter(|p| *p > 0)
        .unwrap_or(1);

    let line = Line::from(vec![
        Span::styled(mode_str, mode_style),
        Span::styled(
            nav_info,
            Style::default()
                .bg(theme.ui.nav_active_bg.to_color())
                .fg(theme.ui.nav_active_fg.to_color()),
        ),
        Span::styled(status_msg, Style::default().fg(theme.ui.status_bar_fg.to_color())),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            position,
            Style::default()
                .bg(theme.ui.nav_active_bg.to_color())
                .fg(theme.ui.nav_active_fg.to_color()),
        ),
    ]);
    let paragraph =
        Paragraph::new(line).style(Style::default().bg(theme.ui.status_bar_bg.to_color()));

    frame.render_widget(paragraph, area);
}
