use crate::app::{App, Mode};
use crate::kind::ReferenceKind;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}

/// Result of executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
}

const PAGE_STEP: usize = 10;

pub fn handle_event(app: &mut App) -> Result<Action> {
    if !event::poll(Duration::from_millis(100))? {
        return Ok(Action::None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => Ok(Action::None),
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<Action> {
    // Help popup takes priority - with scrolling support
    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
                app.show_help = false;
                app.help_scroll = 0;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.help_scroll = app.help_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => {
                app.help_scroll = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                app.help_scroll = crate::ui::help::total_lines();
            }
            KeyCode::PageDown => {
                app.help_scroll = app.help_scroll.saturating_add(PAGE_STEP);
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(PAGE_STEP);
            }
            _ => {}
        }
        return Ok(Action::None);
    }

    // Global keybindings
    match key.code {
        KeyCode::F(1) => {
            app.show_help = true;
            return Ok(Action::None);
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            return Ok(Action::Quit);
        }
        KeyCode::PageDown => {
            app.scroll_down(PAGE_STEP);
            return Ok(Action::None);
        }
        KeyCode::PageUp => {
            app.scroll_up(PAGE_STEP);
            return Ok(Action::None);
        }
        _ => {}
    }

    match app.mode {
        Mode::Browse => handle_browse_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
        Mode::Command => handle_command_mode(app, key),
    }
}

fn handle_browse_mode(app: &mut App, key: KeyEvent) -> Result<Action> {
    match key.code {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(':') => app.start_command(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter => app.follow_selected(),
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.back(),
        KeyCode::Char('l') | KeyCode::Right => app.forward(),
        KeyCode::Tab => app.next_topic(),
        KeyCode::BackTab => app.prev_topic(),
        KeyCode::Char('g') => app.go_index(),
        KeyCode::Char('y') => app.yank(),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.jump_to_topic(ReferenceKind::ALL[index]);
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(Action::None)
}

fn handle_search_mode(app: &mut App, key: KeyEvent) -> Result<Action> {
    match key.code {
        KeyCode::Esc => app.end_search(),
        KeyCode::Enter => {
            if app.selected_route().is_some() {
                app.follow_selected();
            } else {
                app.end_search();
            }
        }
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Tab => app.next_topic(),
        KeyCode::BackTab => app.prev_topic(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_search()
        }
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
    Ok(Action::None)
}

fn handle_command_mode(app: &mut App, key: KeyEvent) -> Result<Action> {
    match key.code {
        KeyCode::Esc => app.cancel_command(),
        KeyCode::Enter => {
            if app.execute_command()? == CommandResult::Quit {
                return Ok(Action::Quit);
            }
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.cancel_command();
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Clipboard;
    use crate::config::Config;
    use crate::route::Route;

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn app() -> App {
        App::new(Config::default(), "/", Clipboard::offline())
    }

    #[test]
    fn test_number_keys_jump_to_topics() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.route(), &Route::list(ReferenceKind::Registers));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.route(), &Route::Index);
    }

    #[test]
    fn test_typing_in_search_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);
        // 'q' is text here, not quit
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::None);
        assert_eq!(app.search_input, "q");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    }

    #[test]
    fn test_command_line() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        for c in "goto .word".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_kind(), Some(ReferenceKind::AssemblerDirectives));
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.route(), &Route::Index);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_ctrl_q_quits_from_search() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        let action =
            handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(action, Action::Quit);
    }
}
