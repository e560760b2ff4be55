use crate::app::{App, Mode};
use crate::route::Route;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    let theme = app.config.theme.clone();

    // The index page is the topic list itself, so it gets no nav bar
    let show_nav = *app.route() != Route::Index;
    let header_height = if show_nav {
        app.config.layout.nav_height.max(3)
    } else {
        2
    };

    let bottom_bar_height = match app.mode {
        Mode::Command | Mode::Search => 1,
        Mode::Browse => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(bottom_bar_height),
        ])
        .split(size);

    super::header::render(frame, chunks[0], app.current_kind(), show_nav, &theme);
    super::page::render(frame, chunks[1], app, &theme);
    super::status_bar::render(frame, chunks[2], app);

    match app.mode {
        Mode::Command => super::command_bar::render(frame, chunks[3], &app.command_input, &theme),
        Mode::Search => super::search_bar::render(
            frame,
            chunks[3],
            &app.search_input,
            app.page.rows().count(),
            &theme,
        ),
        Mode::Browse => {}
    }

    if app.show_help {
        super::help::render(frame, size, &theme, app.help_scroll, app.config.layout.help_width);
    }
}
