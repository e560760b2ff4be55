//! Draws a [`Page`] as a scrollable body with selectable links

use crate::app::{App, Mode};
use crate::encoding::{EncodingTable, EncodingView};
use crate::theme::Theme;
use crate::view::{Block as PageBlock, Page, Row};
use ratatui::{
    prelude::*,
    text::Span,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Page content laid out as terminal lines
pub struct PageLines {
    pub lines: Vec<Line<'static>>,
    /// Line index of each link, in `Page::links` order
    pub link_lines: Vec<usize>,
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let inner_width = area.width.saturating_sub(3) as usize;
    let searching = app.mode == Mode::Search;
    let content = build_lines(&app.page, app.selected, searching, inner_width, theme);

    let visible_height = area.height.saturating_sub(2) as usize;
    app.scroll = clamp_scroll(
        app.scroll,
        content
            .link_lines
            .get(app.selected)
            .copied()
            .filter(|_| app.follow_selection),
        content.lines.len(),
        visible_height,
    );

    let mut title = vec![Span::styled(
        format!(" {} ", app.page.title),
        Style::default()
            .fg(theme.ui.title_focused.to_color())
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(subtitle) = &app.page.subtitle {
        title.push(Span::styled(
            format!("{} ", subtitle),
            Style::default().fg(theme.ui.title.to_color()),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.ui.border_focused.to_color()))
        .style(
            Style::default()
                .bg(theme.ui.background.to_color())
                .fg(theme.ui.foreground.to_color()),
        );

    let content_height = content.lines.len();
    let paragraph = Paragraph::new(content.lines)
        .block(block)
        .scroll((app.scroll as u16, 0));
    frame.render_widget(paragraph, area);

    if content_height > visible_height && area.height > 2 && area.width > 0 {
        let scrollbar_area = Rect::new(area.x + area.width - 1, area.y + 1, 1, area.height - 2);
        let mut scrollbar_state =
            ScrollbarState::new(content_height.saturating_sub(visible_height)).position(app.scroll);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

/// Keep the selected line on screen and never scroll past the end
fn clamp_scroll(scroll: usize, selected_line: Option<usize>, total: usize, height: usize) -> usize {
    let mut scroll = scroll;
    if let Some(line) = selected_line {
        if line < scroll {
            scroll = line;
        } else if height > 0 && line >= scroll + height {
            scroll = line + 1 - height;
        }
    }
    scroll.min(total.saturating_sub(height))
}

pub fn build_lines(
    page: &Page,
    selected: usize,
    searching: bool,
    width: usize,
    theme: &Theme,
) -> PageLines {
    let mut out = PageLines {
        lines: Vec::new(),
        link_lines: Vec::new(),
    };

    let text_style = Style::default().fg(theme.ui.foreground.to_color());
    let selected_style = Style::default()
        .bg(theme.ui.selection.to_color())
        .fg(theme.ui.selection_fg.to_color());

    for block in &page.blocks {
        match block {
            PageBlock::Heading(text) => {
                if !out.lines.is_empty() {
                    out.lines.push(Line::default());
                }
                out.lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(theme.page.heading.to_color())
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )));
            }
            PageBlock::Paragraph(text) => {
                for line in wrap(text, width) {
                    out.lines.push(Line::from(Span::styled(line, text_style)));
                }
            }
            PageBlock::Code(lines) => push_code(&mut out, lines.iter().map(String::as_str), theme),
            PageBlock::Cards(cards) => {
                for card in cards {
                    let is_link = card.link.is_some();
                    let is_selected = is_link && out.link_lines.len() == selected;
                    if is_link {
                        out.link_lines.push(out.lines.len());
                    }

                    let mut value_style = if is_link {
                        Style::default()
                            .fg(theme.page.link.to_color())
                            .add_modifier(Modifier::UNDERLINED)
                    } else {
                        text_style
                    };
                    if is_selected {
                        value_style = value_style.patch(selected_style);
                    }

                    out.lines.push(Line::from(vec![
                        Span::styled(
                            format!("{}: ", card.label),
                            Style::default()
                                .fg(theme.page.label.to_color())
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(card.value.clone(), value_style),
                    ]));
                }
            }
            PageBlock::Encoding(EncodingView::Table(table)) => push_table(&mut out, table, theme),
            PageBlock::Encoding(EncodingView::Expansion(lines)) => {
                push_code(&mut out, lines.iter().copied(), theme)
            }
            PageBlock::Rows(rows) => {
                for row in rows {
                    let is_selected = out.link_lines.len() == selected;
                    out.link_lines.push(out.lines.len());
                    push_row(&mut out, row, is_selected, width, theme);
                }
            }
            PageBlock::SearchBox(text) => {
                let border = if searching {
                    theme.ui.border_focused.to_color()
                } else {
                    theme.ui.border.to_color()
                };
                let cursor = if searching { "▏" } else { "" };
                out.lines.push(Line::from(vec![
                    Span::styled("Search: ", Style::default().fg(border)),
                    Span::styled(
                        format!("{}{}", text, cursor),
                        text_style.add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            PageBlock::Error(text) => {
                out.lines.push(Line::from(Span::styled(
                    format!("⚠ {}", text),
                    Style::default()
                        .fg(theme.ui.error.to_color())
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
    }

    out
}

fn push_code<'a>(out: &mut PageLines, lines: impl Iterator<Item = &'a str>, theme: &Theme) {
    let gutter = Style::default().fg(theme.ui.border.to_color());
    let code = Style::default().fg(theme.page.code.to_color());
    for line in lines {
        out.lines.push(Line::from(vec![
            Span::styled("  │ ", gutter),
            Span::styled(line.to_string(), code),
        ]));
    }
}

fn push_row(out: &mut PageLines, row: &Row, selected: bool, width: usize, theme: &Theme) {
    let marker = if selected { "▶ " } else { "  " };
    let mut text_style = Style::default().fg(theme.ui.foreground.to_color());
    if selected {
        text_style = text_style
            .bg(theme.ui.selection.to_color())
            .fg(theme.ui.selection_fg.to_color());
    }

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.ui.title_focused.to_color())),
        Span::styled(
            format!(" {} ", row.badge),
            Style::default()
                .fg(theme.page.badge.to_color())
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        Span::raw(" "),
        Span::styled(row.text.clone(), text_style),
    ];
    if let Some(pill) = &row.pill {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("({})", pill),
            Style::default().fg(theme.page.pill.to_color()),
        ));
    }
    out.lines.push(Line::from(spans));

    if let Some(detail) = &row.detail {
        for line in wrap(detail, width.saturating_sub(4)) {
            out.lines.push(Line::from(Span::styled(
                format!("    {}", line),
                Style::default().fg(theme.page.detail.to_color()),
            )));
        }
    }
}

fn push_table(out: &mut PageLines, table: &EncodingTable, theme: &Theme) {
    let border = Style::default().fg(theme.ui.border.to_color());
    let styles = [
        Style::default()
            .fg(theme.page.label.to_color())
            .add_modifier(Modifier::BOLD),
        Style::default().fg(theme.page.detail.to_color()),
        Style::default().fg(theme.page.bit_numbers.to_color()),
        Style::default()
            .fg(theme.page.bit_values.to_color())
            .add_modifier(Modifier::BOLD),
    ];

    let rows = table.rows();
    let rule = |left: &str, mid: &str, right: &str| {
        let cells: Vec<String> = rows[0]
            .iter()
            .map(|c| "─".repeat(c.chars().count() + 2))
            .collect();
        Line::from(Span::styled(
            format!("{}{}{}", left, cells.join(mid), right),
            border,
        ))
    };

    out.lines.push(rule("┌", "┬", "┐"));
    for (i, (row, style)) in rows.iter().zip(styles).enumerate() {
        let mut spans = vec![Span::styled("│", border)];
        for cell in row {
            spans.push(Span::styled(format!(" {} ", cell), style));
            spans.push(Span::styled("│", border));
        }
        out.lines.push(Line::from(spans));
        if i + 1 < rows.len() {
            out.lines.push(rule("├", "┼", "┤"));
        }
    }
    out.lines.push(rule("└", "┴", "┘"));
}

/// Greedy word wrap. Words longer than `width` get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Clipboard;
    use crate::config::Config;
    use crate::kind::ReferenceKind;
    use crate::route::Route;
    use crate::view::{render as render_page, RenderContext};
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("extraordinarily long", 5), vec!["extraordinarily", "long"]);
    }

    #[test]
    fn test_clamp_scroll_follows_selection() {
        assert_eq!(clamp_scroll(0, Some(30), 100, 10), 21);
        assert_eq!(clamp_scroll(50, Some(5), 100, 10), 5);
        assert_eq!(clamp_scroll(95, None, 100, 10), 90);
    }

    #[test]
    fn test_link_lines_match_page_links() {
        let page = render_page(
            &Route::list(ReferenceKind::Registers),
            &RenderContext::default(),
        );
        let content = build_lines(&page, 0, false, 80, &Theme::default());
        assert_eq!(content.link_lines.len(), page.links().len());
        assert!(content.link_lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_encoding_table_lines() {
        let page = render_page(
            &Route::detail(ReferenceKind::InstructionTypes, "j-type"),
            &RenderContext::default(),
        );
        let content = build_lines(&page, 0, false, 80, &Theme::default());
        let rendered: Vec<String> = content.lines.iter().map(|l| l.to_string()).collect();
        assert!(rendered.iter().any(|l| l.contains("opcode") && l.contains("addr")));
        assert!(rendered.iter().any(|l| l.starts_with('┌')));
    }

    #[test]
    fn test_draws_instruction_detail() {
        let mut app = App::new(Config::default(), "/instructions/add", Clipboard::offline());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| crate::ui::render(frame, &mut app)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("MIPS Reference"));
        assert!(screen.contains("Instructions"));
        assert!(screen.contains("Summary"));
        assert!(screen.contains("R-Type"));
        assert!(screen.contains("BROWSE"));
    }

    #[test]
    fn test_draws_search_page() {
        let mut app = App::new(
            Config::default(),
            "/instructions?search=syscall",
            Clipboard::offline(),
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| crate::ui::render(frame, &mut app)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("SEARCH"));
        assert!(screen.contains("Exact Match"));
        assert!(screen.contains("/syscall"));
    }

    #[test]
    fn test_zero_width_body_does_not_panic() {
        let mut app = App::new(Config::default(), "/instructions", Clipboard::offline());
        let mut terminal = Terminal::new(TestBackend::new(20, 30)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 0, 30), &mut app, &theme))
            .unwrap();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_draws_help_over_index() {
        let mut app = App::new(Config::default(), "/", Clipboard::offline());
        app.show_help = true;
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| crate::ui::render(frame, &mut app)).unwrap();

        let screen = screen_text(&terminal);
        assert!(screen.contains("Help"));
        assert!(screen.contains("BROWSE"));
    }
}
