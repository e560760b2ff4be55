mod app;
mod catalog;
mod clipboard;
mod config;
mod encoding;
mod error;
mod input;
mod kind;
mod logging;
mod model;
mod route;
mod search;
mod theme;
mod ui;
mod view;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use clipboard::Clipboard;
use config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use route::Route;
use std::io::stdout;
use tracing::info;
use view::RenderContext;

#[derive(Parser, Debug)]
#[command(name = "mipsref")]
#[command(author, version, about = "Terminal reference for MIPS assembly", long_about = None)]
struct Args {
    /// Route to open, e.g. `/instructions/add` or `/instructions?search=load word`
    route: Option<String>,

    /// Prefix every route is served under
    #[arg(long)]
    base_path: Option<String>,

    /// Print the page as plain text and exit
    #[arg(short, long)]
    print: bool,

    /// Color theme (dark, light, dracula, gruvbox, nord)
    #[arg(short, long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(base_path) = args.base_path {
        config.base_path = base_path;
    }
    if let Some(theme) = &args.theme {
        config.set_theme(theme);
    }
    let start = args.route.unwrap_or_else(|| config.start_route.clone());

    let _log_guard = logging::init(&config.logging, &Config::data_dir()?)?;
    info!(route = %start, print = args.print, "starting mipsref");

    if args.print {
        print!("{}", print_route(&start, &config.base_path));
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, &start, Clipboard::new());
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Render `path` the way the browser would show it, as plain text
fn print_route(path: &str, base_path: &str) -> String {
    let ctx = RenderContext::new(base_path);
    let page = match Route::resolve(path, base_path) {
        Some(route) => view::render(&route, &ctx),
        None => view::not_found_page(path),
    };
    view::text::to_text(&page, &ctx)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .context("Failed to draw frame")?;

        if input::handle_event(app)? == input::Action::Quit {
            break;
        }
    }
    info!("exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_route_renders_detail() {
        let text = print_route("/registers/zero", "");
        assert!(text.starts_with("Zero"));
        assert!(text.contains("$zero"));
    }

    #[test]
    fn test_print_route_honours_base_path() {
        let text = print_route("/ref/syscalls", "/ref");
        assert!(text.contains("-> /ref/syscalls/"));
    }

    #[test]
    fn test_print_route_unknown_path() {
        let text = print_route("/nowhere", "");
        assert!(text.starts_with("Page not found"));
        assert!(text.contains("Nothing lives at /nowhere."));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["mipsref", "/syscalls", "--print", "--theme", "nord"]);
        assert_eq!(args.route.as_deref(), Some("/syscalls"));
        assert!(args.print);
        assert_eq!(args.theme.as_deref(), Some("nord"));
        assert_eq!(args.base_path, None);
    }
}
