use crate::catalog;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::input::CommandResult;
use crate::kind::ReferenceKind;
use crate::route::{History, Route};
use crate::theme::Theme;
use crate::view::{self, Page, RenderContext};
use anyhow::Result;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving between links and pages
    Browse,
    /// Typing into the instruction search box
    Search,
    /// Typing a `:` command
    Command,
}

pub struct App {
    pub mode: Mode,
    pub history: History,
    /// The page currently on screen
    pub page: Page,
    /// Index into `page.links()`
    pub selected: usize,
    /// First visible line of the page body
    pub scroll: usize,
    /// Scroll so the selected link is visible on the next draw
    pub follow_selection: bool,
    pub search_input: String,
    pub command_input: String,
    pub status_message: String,
    pub config: Config,
    pub show_help: bool,
    pub help_scroll: usize,
    pub clipboard: Clipboard,
}

impl App {
    /// Open `start` as served under the configured base path
    pub fn new(config: Config, start: &str, clipboard: Clipboard) -> Self {
        let parsed = Route::resolve(start, &config.base_path);
        let route = parsed.clone().unwrap_or(Route::Index);
        let page = view::render(&route, &RenderContext::new(&config.base_path));

        let mut app = Self {
            mode: Mode::Browse,
            history: History::new(route),
            page,
            selected: 0,
            scroll: 0,
            follow_selection: true,
            search_input: String::new(),
            command_input: String::new(),
            status_message: String::from("Press F1 for help | / search | : command"),
            config,
            show_help: false,
            help_scroll: 0,
            clipboard,
        };

        if parsed.is_none() {
            warn!(path = start, "start route matches no page");
            app.page = view::not_found_page(start);
        } else {
            app.mount();
        }
        app
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.config.base_path)
    }

    pub fn route(&self) -> &Route {
        self.history.current()
    }

    /// Shareable path of the current page
    pub fn current_path(&self) -> String {
        self.route().to_path(&self.config.base_path)
    }

    /// Topic of the current page, if any
    pub fn current_kind(&self) -> Option<ReferenceKind> {
        self.route().kind()
    }

    pub fn selected_route(&self) -> Option<Route> {
        self.page.links().get(self.selected).map(|r| (*r).clone())
    }

    // ========== Navigation ==========

    /// Push `route` and show it
    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route(), to = %route, "navigate");
        self.history.push(route);
        self.mount();
    }

    /// Parse `path` and navigate there. Unknown paths show a not-found page
    /// without touching the history.
    pub fn open_path(&mut self, path: &str) -> bool {
        match Route::resolve(path, &self.config.base_path) {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => {
                warn!(path, "no page at path");
                self.page = view::not_found_page(path);
                self.selected = 0;
                self.scroll = 0;
                self.mode = Mode::Browse;
                self.status_message = format!("Page not found: {path}");
                false
            }
        }
    }

    pub fn back(&mut self) {
        if self.history.back() {
            self.mount();
        } else {
            self.status_message = String::from("Already at the oldest page");
        }
    }

    pub fn forward(&mut self) {
        if self.history.forward() {
            self.mount();
        } else {
            self.status_message = String::from("Already at the newest page");
        }
    }

    pub fn go_index(&mut self) {
        self.navigate(Route::Index);
    }

    pub fn jump_to_topic(&mut self, kind: ReferenceKind) {
        self.navigate(Route::list(kind));
    }

    pub fn next_topic(&mut self) {
        let next = self
            .current_kind()
            .map(ReferenceKind::next)
            .unwrap_or(ReferenceKind::ALL[0]);
        self.jump_to_topic(next);
    }

    pub fn prev_topic(&mut self) {
        let prev = self
            .current_kind()
            .map(ReferenceKind::prev)
            .unwrap_or(ReferenceKind::ALL[ReferenceKind::ALL.len() - 1]);
        self.jump_to_topic(prev);
    }

    pub fn follow_selected(&mut self) {
        match self.selected_route() {
            Some(route) => self.navigate(route),
            None => self.status_message = String::from("Nothing selected"),
        }
    }

    /// Render the current route from scratch. The instruction list seeds
    /// the search box from the route and takes focus.
    fn mount(&mut self) {
        self.page = view::render(self.history.current(), &self.render_context());
        self.selected = 0;
        self.scroll = 0;
        self.follow_selection = true;

        if self.page.has_search_box() {
            self.search_input = self.route().search_text().unwrap_or("").to_string();
            self.mode = Mode::Search;
        } else if self.mode == Mode::Search {
            self.mode = Mode::Browse;
        }
        self.status_message = self.current_path();
    }

    // ========== Selection and scrolling ==========

    pub fn select_next(&mut self) {
        self.follow_selection = true;
        let count = self.page.links().len();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.follow_selection = true;
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.follow_selection = true;
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.follow_selection = true;
        self.selected = self.page.links().len().saturating_sub(1);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.follow_selection = false;
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.follow_selection = false;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    // ========== Search ==========

    /// Focus the search box, opening the instruction list if needed
    pub fn start_search(&mut self) {
        if self.page.has_search_box() {
            self.mode = Mode::Search;
        } else {
            self.navigate(Route::instructions(""));
        }
    }

    pub fn search_push(&mut self, c: char) {
        self.search_input.push(c);
        self.update_search();
    }

    pub fn search_pop(&mut self) {
        self.search_input.pop();
        self.update_search();
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.update_search();
    }

    /// Leave the search box, keeping its text and results
    pub fn end_search(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Mirror the search text into the current history entry and re-filter
    fn update_search(&mut self) {
        let route = Route::instructions(&self.search_input);
        debug!(search = %self.search_input, "search updated");
        self.history.replace(route);
        self.page = view::render(self.history.current(), &self.render_context());
        self.selected = 0;
        self.scroll = 0;
        self.follow_selection = true;

        let matches = self.page.rows().count();
        self.status_message = format!(
            "{} match{}",
            matches,
            if matches == 1 { "" } else { "es" }
        );
    }

    // ========== Commands ==========

    pub fn start_command(&mut self) {
        self.command_input.clear();
        self.mode = Mode::Command;
    }

    pub fn cancel_command(&mut self) {
        self.command_input.clear();
        self.mode = Mode::Browse;
    }

    pub fn set_theme(&mut self, name: &str) {
        if Theme::is_known(name) {
            self.config.set_theme(name);
            self.status_message = format!("Theme changed to: {}", name);
        } else {
            self.status_message = format!(
                "Unknown theme: {} (available: {})",
                name,
                Theme::available_themes().join(", ")
            );
        }
    }

    /// Copy the current page's path to the clipboard
    pub fn yank(&mut self) {
        let path = self.current_path();
        if self.clipboard.copy(&path) {
            self.status_message = format!("Copied: {}", path);
        } else {
            self.status_message = format!("Clipboard unavailable: {}", path);
        }
    }

    /// Jump to the record a symbol names (`addiu`, `$t0`, `.word`, ...)
    pub fn goto_symbol(&mut self, symbol: &str) {
        match catalog::lookup(symbol) {
            Some((kind, id)) => self.navigate(Route::detail(kind, id)),
            None => self.status_message = format!("No entry for: {}", symbol),
        }
    }

    pub fn execute_command(&mut self) -> Result<CommandResult> {
        let cmd = self.command_input.trim().to_string();
        self.command_input.clear();
        self.mode = Mode::Browse;

        let (base_cmd, arg) = match cmd.split_once(char::is_whitespace) {
            Some((base, rest)) => (base.to_lowercase(), rest.trim()),
            None => (cmd.to_lowercase(), ""),
        };
        debug!(command = %base_cmd, arg, "execute command");

        match base_cmd.as_str() {
            "q" | "quit" | "q!" => return Ok(CommandResult::Quit),
            "open" | "o" | "e" => {
                if arg.is_empty() {
                    self.status_message = String::from("Usage: :open <route>");
                } else {
                    self.open_path(arg);
                }
            }
            "goto" | "g" => {
                if arg.is_empty() {
                    self.status_message = String::from("Usage: :goto <symbol>");
                } else {
                    self.goto_symbol(arg);
                }
            }
            "back" | "b" => self.back(),
            "forward" | "f" => self.forward(),
            "index" | "topics" => self.go_index(),
            "help" => self.show_help = !self.show_help,
            "yank" | "y" => self.yank(),
            "theme" => {
                if arg.is_empty() {
                    let themes = Theme::available_themes().join(", ");
                    self.status_message = format!("Available themes: {}", themes);
                } else {
                    self.set_theme(arg);
                }
            }
            "" => {}
            _ => {
                // A bare route like `:/registers/sp` opens it
                if cmd.starts_with('/') {
                    self.open_path(&cmd);
                } else {
                    self.status_message = format!("Unknown command: {}", cmd);
                }
            }
        }

        Ok(CommandResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_at(start: &str) -> App {
        App::new(Config::default(), start, Clipboard::offline())
    }

    fn run(app: &mut App, command: &str) -> CommandResult {
        app.command_input = command.to_string();
        app.execute_command().unwrap()
    }

    #[test]
    fn test_starts_on_index() {
        let app = app_at("/");
        assert_eq!(app.page.title, "Topics");
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.page.links().len(), 6);
    }

    #[test]
    fn test_unknown_start_shows_not_found() {
        let app = app_at("/opcodes");
        assert_eq!(app.page.title, "Page not found");
        assert_eq!(app.route(), &Route::Index);
    }

    #[test]
    fn test_routes_open_with_or_without_base_path() {
        let config = Config {
            base_path: String::from("/mips-ref"),
            ..Config::default()
        };
        let start = config.start_route.clone();
        let mut app = App::new(config, &start, Clipboard::offline());
        assert_eq!(app.page.title, "Topics");

        run(&mut app, "open /registers");
        assert_eq!(app.page.title, "Registers");
        assert_eq!(app.current_path(), "/mips-ref/registers");

        run(&mut app, "/mips-ref/syscalls");
        assert_eq!(app.page.title, "Syscalls");
        assert_eq!(app.history.len(), 3);
    }

    #[test]
    fn test_search_param_seeds_and_focuses_box() {
        let app = app_at("/instructions?search=add%20imm");
        assert_eq!(app.mode, Mode::Search);
        assert_eq!(app.search_input, "add imm");
    }

    #[test]
    fn test_typing_replaces_history_entry() {
        let mut app = app_at("/");
        app.start_search();
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.mode, Mode::Search);

        for c in "sub".chars() {
            app.search_push(c);
        }
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.current_path(), "/instructions?search=sub");

        app.search_pop();
        app.search_pop();
        app.search_pop();
        assert_eq!(app.current_path(), "/instructions");
    }

    #[test]
    fn test_search_text_survives_back_and_forward() {
        let mut app = app_at("/instructions");
        for c in "lw".chars() {
            app.search_push(c);
        }
        app.end_search();
        app.follow_selected();
        assert_eq!(app.route().kind(), Some(ReferenceKind::Instructions));
        assert!(matches!(app.route(), Route::Detail { .. }));

        app.back();
        assert_eq!(app.search_input, "lw");
        assert_eq!(app.mode, Mode::Search);
    }

    #[test]
    fn test_follow_and_back() {
        let mut app = app_at("/");
        app.select_next();
        app.follow_selected();
        assert_eq!(app.route(), &Route::list(ReferenceKind::Instructions));

        app.end_search();
        app.back();
        assert_eq!(app.route(), &Route::Index);
        app.forward();
        assert_eq!(app.route(), &Route::list(ReferenceKind::Instructions));
    }

    #[test]
    fn test_topic_cycling() {
        let mut app = app_at("/guides");
        app.next_topic();
        assert_eq!(app.current_kind(), Some(ReferenceKind::InstructionTypes));
        app.prev_topic();
        assert_eq!(app.current_kind(), Some(ReferenceKind::Guides));
    }

    #[test]
    fn test_goto_command() {
        let mut app = app_at("/");
        run(&mut app, "goto $sp");
        assert_eq!(app.current_kind(), Some(ReferenceKind::Registers));

        run(&mut app, "goto ADDI");
        assert_eq!(app.route(), &Route::detail(ReferenceKind::Instructions, "addi"));

        run(&mut app, "goto nothing-here");
        assert!(app.status_message.starts_with("No entry for"));
    }

    #[test]
    fn test_open_command() {
        let mut app = app_at("/");
        run(&mut app, "open /syscalls/print-integer");
        assert_eq!(app.page.title, "Print Integer");

        run(&mut app, "open /nowhere");
        assert_eq!(app.page.title, "Page not found");
        assert_eq!(app.route(), &Route::detail(ReferenceKind::Syscalls, "print-integer"));
    }

    #[test]
    fn test_theme_and_quit_commands() {
        let mut app = app_at("/");
        run(&mut app, "theme nord");
        assert_eq!(app.theme().name, "nord");
        run(&mut app, "theme sepia");
        assert_eq!(app.theme().name, "nord");
        assert_eq!(run(&mut app, "q"), CommandResult::Quit);
    }

    #[test]
    fn test_yank_uses_base_path() {
        let mut config = Config::default();
        config.base_path = String::from("/mips-ref");
        let mut app = App::new(config, "/mips-ref/registers", Clipboard::offline());
        app.yank();
        assert_eq!(app.clipboard.last_copied(), "/mips-ref/registers");
    }
}
