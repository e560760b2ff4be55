pub mod command_bar;
pub mod header;
pub mod help;
pub mod layout;
pub mod page;
pub mod search_bar;
pub mod status_bar;

use crate::app::App;
use ratatui::Frame;

pub fn render(frame: &mut Frame, app: &mut App) {
    layout::render(frame, app);
}
