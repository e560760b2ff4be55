use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub ui: UiColors,
    pub page: PageColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiColors {
    pub background: ThemeColor,
    pub foreground: ThemeColor,
    pub border: ThemeColor,
    pub border_focused: ThemeColor,
    pub title: ThemeColor,
    pub title_focused: ThemeColor,
    pub selection: ThemeColor,
    pub selection_fg: ThemeColor,

    // Status bar
    pub status_bar_bg: ThemeColor,
    pub status_bar_fg: ThemeColor,
    pub mode_browse_bg: ThemeColor,
    pub mode_browse_fg: ThemeColor,
    pub mode_search_bg: ThemeColor,
    pub mode_search_fg: ThemeColor,
    pub mode_command_bg: ThemeColor,
    pub mode_command_fg: ThemeColor,

    // Topic nav bar
    pub nav_active_bg: ThemeColor,
    pub nav_active_fg: ThemeColor,
    pub nav_inactive_bg: ThemeColor,
    pub nav_inactive_fg: ThemeColor,

    pub error: ThemeColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageColors {
    pub heading: ThemeColor,    // section headings
    pub badge: ThemeColor,      // mnemonic, register numbers, syscall codes
    pub pill: ThemeColor,       // encoding kind
    pub label: ThemeColor,      // card labels
    pub link: ThemeColor,
    pub detail: ThemeColor,     // "Usage: ..." lines
    pub code: ThemeColor,
    pub bit_numbers: ThemeColor,
    pub bit_values: ThemeColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Rgb { r: u8, g: u8, b: u8 },
    Named(String),
}

impl ThemeColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        match self {
            ThemeColor::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" => Color::Magenta,
                "cyan" => Color::Cyan,
                "white" => Color::White,
                "gray" | "grey" => Color::Gray,
                "darkgray" | "darkgrey" => Color::DarkGray,
                "lightred" => Color::LightRed,
                "lightgreen" => Color::LightGreen,
                "lightyellow" => Color::LightYellow,
                "lightblue" => Color::LightBlue,
                "lightmagenta" => Color::LightMagenta,
                "lightcyan" => Color::LightCyan,
                _ => parse_hex(name).unwrap_or(Color::White),
            },
        }
    }
}

/// `#RRGGBB`
fn parse_hex(name: &str) -> Option<Color> {
    let hex = name.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: String::from("dark"),
            ui: UiColors {
                background: ThemeColor::rgb(30, 30, 30),
                foreground: ThemeColor::rgb(212, 212, 212),
                border: ThemeColor::rgb(60, 60, 60),
                border_focused: ThemeColor::rgb(100, 149, 237),
                title: ThemeColor::rgb(100, 100, 100),
                title_focused: ThemeColor::rgb(100, 149, 237),
                selection: ThemeColor::rgb(70, 70, 120),
                selection_fg: ThemeColor::rgb(255, 255, 255),

                status_bar_bg: ThemeColor::rgb(25, 25, 25),
                status_bar_fg: ThemeColor::rgb(150, 150, 150),
                mode_browse_bg: ThemeColor::rgb(86, 156, 214),
                mode_browse_fg: ThemeColor::rgb(30, 30, 30),
                mode_search_bg: ThemeColor::rgb(214, 157, 86),
                mode_search_fg: ThemeColor::rgb(30, 30, 30),
                mode_command_bg: ThemeColor::rgb(220, 220, 170),
                mode_command_fg: ThemeColor::rgb(30, 30, 30),

                nav_active_bg: ThemeColor::rgb(45, 45, 45),
                nav_active_fg: ThemeColor::rgb(212, 212, 212),
                nav_inactive_bg: ThemeColor::rgb(30, 30, 30),
                nav_inactive_fg: ThemeColor::rgb(128, 128, 128),

                error: ThemeColor::rgb(244, 71, 71),
            },
            page: PageColors {
                heading: ThemeColor::rgb(197, 134, 192),     // Purple
                badge: ThemeColor::rgb(86, 156, 214),        // Blue
                pill: ThemeColor::rgb(78, 201, 176),         // Teal
                label: ThemeColor::rgb(156, 220, 254),       // Light blue
                link: ThemeColor::rgb(100, 149, 237),        // Cornflower
                detail: ThemeColor::rgb(150, 150, 150),      // Gray
                code: ThemeColor::rgb(206, 145, 120),        // Orange/brown
                bit_numbers: ThemeColor::rgb(106, 153, 85),  // Green
                bit_values: ThemeColor::rgb(181, 206, 168),  // Light green
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: String::from("light"),
            ui: UiColors {
                background: ThemeColor::rgb(255, 255, 255),
                foreground: ThemeColor::rgb(30, 30, 30),
                border: ThemeColor::rgb(200, 200, 200),
                border_focused: ThemeColor::rgb(0, 122, 204),
                title: ThemeColor::rgb(120, 120, 120),
                title_focused: ThemeColor::rgb(0, 122, 204),
                selection: ThemeColor::rgb(173, 214, 255),
                selection_fg: ThemeColor::rgb(0, 0, 0),

                status_bar_bg: ThemeColor::rgb(240, 240, 240),
                status_bar_fg: ThemeColor::rgb(80, 80, 80),
                mode_browse_bg: ThemeColor::rgb(0, 122, 204),
                mode_browse_fg: ThemeColor::rgb(255, 255, 255),
                mode_search_bg: ThemeColor::rgb(234, 88, 12),
                mode_search_fg: ThemeColor::rgb(255, 255, 255),
                mode_command_bg: ThemeColor::rgb(180, 140, 0),
                mode_command_fg: ThemeColor::rgb(255, 255, 255),

                nav_active_bg: ThemeColor::rgb(255, 255, 255),
                nav_active_fg: ThemeColor::rgb(30, 30, 30),
                nav_inactive_bg: ThemeColor::rgb(240, 240, 240),
                nav_inactive_fg: ThemeColor::rgb(128, 128, 128),

                error: ThemeColor::rgb(185, 28, 28),
            },
            page: PageColors {
                heading: ThemeColor::rgb(175, 0, 219),     // Purple
                badge: ThemeColor::rgb(0, 0, 255),         // Blue
                pill: ThemeColor::rgb(38, 127, 153),       // Teal
                label: ThemeColor::rgb(0, 128, 128),       // Teal
                link: ThemeColor::rgb(0, 122, 204),        // Blue
                detail: ThemeColor::rgb(100, 100, 100),    // Gray
                code: ThemeColor::rgb(163, 21, 21),        // Red/brown
                bit_numbers: ThemeColor::rgb(0, 128, 0),   // Green
                bit_values: ThemeColor::rgb(9, 134, 88),   // Green
            },
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: String::from("dracula"),
            ui: UiColors {
                background: ThemeColor::rgb(40, 42, 54),
                foreground: ThemeColor::rgb(248, 248, 242),
                border: ThemeColor::rgb(68, 71, 90),
                border_focused: ThemeColor::rgb(189, 147, 249),
                title: ThemeColor::rgb(98, 114, 164),
                title_focused: ThemeColor::rgb(189, 147, 249),
                selection: ThemeColor::rgb(68, 71, 90),
                selection_fg: ThemeColor::rgb(248, 248, 242),

                status_bar_bg: ThemeColor::rgb(33, 34, 44),
                status_bar_fg: ThemeColor::rgb(248, 248, 242),
                mode_browse_bg: ThemeColor::rgb(189, 147, 249),
                mode_browse_fg: ThemeColor::rgb(40, 42, 54),
                mode_search_bg: ThemeColor::rgb(255, 184, 108),
                mode_search_fg: ThemeColor::rgb(40, 42, 54),
                mode_command_bg: ThemeColor::rgb(241, 250, 140),
                mode_command_fg: ThemeColor::rgb(40, 42, 54),

                nav_active_bg: ThemeColor::rgb(68, 71, 90),
                nav_active_fg: ThemeColor::rgb(248, 248, 242),
                nav_inactive_bg: ThemeColor::rgb(40, 42, 54),
                nav_inactive_fg: ThemeColor::rgb(98, 114, 164),

                error: ThemeColor::rgb(255, 85, 85),
            },
            page: PageColors {
                heading: ThemeColor::rgb(255, 121, 198),    // Pink
                badge: ThemeColor::rgb(139, 233, 253),      // Cyan
                pill: ThemeColor::rgb(80, 250, 123),        // Green
                label: ThemeColor::rgb(189, 147, 249),      // Purple
                link: ThemeColor::rgb(139, 233, 253),       // Cyan
                detail: ThemeColor::rgb(98, 114, 164),      // Comment gray
                code: ThemeColor::rgb(241, 250, 140),       // Yellow
                bit_numbers: ThemeColor::rgb(98, 114, 164), // Comment gray
                bit_values: ThemeColor::rgb(189, 147, 249), // Purple
            },
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: String::from("gruvbox"),
            ui: UiColors {
                background: ThemeColor::rgb(40, 40, 40),
                foreground: ThemeColor::rgb(235, 219, 178),
                border: ThemeColor::rgb(80, 73, 69),
                border_focused: ThemeColor::rgb(215, 153, 33),
                title: ThemeColor::rgb(146, 131, 116),
                title_focused: ThemeColor::rgb(215, 153, 33),
                selection: ThemeColor::rgb(80, 73, 69),
                selection_fg: ThemeColor::rgb(235, 219, 178),

                status_bar_bg: ThemeColor::rgb(50, 48, 47),
                status_bar_fg: ThemeColor::rgb(168, 153, 132),
                mode_browse_bg: ThemeColor::rgb(131, 165, 152),
                mode_browse_fg: ThemeColor::rgb(40, 40, 40),
                mode_search_bg: ThemeColor::rgb(254, 128, 25),
                mode_search_fg: ThemeColor::rgb(40, 40, 40),
                mode_command_bg: ThemeColor::rgb(250, 189, 47),
                mode_command_fg: ThemeColor::rgb(40, 40, 40),

                nav_active_bg: ThemeColor::rgb(60, 56, 54),
                nav_active_fg: ThemeColor::rgb(235, 219, 178),
                nav_inactive_bg: ThemeColor::rgb(40, 40, 40),
                nav_inactive_fg: ThemeColor::rgb(146, 131, 116),

                error: ThemeColor::rgb(251, 73, 52),
            },
            page: PageColors {
                heading: ThemeColor::rgb(251, 73, 52),       // Red
                badge: ThemeColor::rgb(250, 189, 47),        // Yellow
                pill: ThemeColor::rgb(254, 128, 25),         // Orange
                label: ThemeColor::rgb(131, 165, 152),       // Aqua
                link: ThemeColor::rgb(131, 165, 152),        // Aqua
                detail: ThemeColor::rgb(146, 131, 116),      // Gray
                code: ThemeColor::rgb(184, 187, 38),         // Green
                bit_numbers: ThemeColor::rgb(146, 131, 116), // Gray
                bit_values: ThemeColor::rgb(211, 134, 155),  // Purple
            },
        }
    }

    pub fn nord() -> Self {
        Self {
            name: String::from("nord"),
            ui: UiColors {
                background: ThemeColor::rgb(46, 52, 64),
                foreground: ThemeColor::rgb(236, 239, 244),
                border: ThemeColor::rgb(67, 76, 94),
                border_focused: ThemeColor::rgb(136, 192, 208),
                title: ThemeColor::rgb(76, 86, 106),
                title_focused: ThemeColor::rgb(136, 192, 208),
                selection: ThemeColor::rgb(67, 76, 94),
                selection_fg: ThemeColor::rgb(236, 239, 244),

                status_bar_bg: ThemeColor::rgb(59, 66, 82),
                status_bar_fg: ThemeColor::rgb(229, 233, 240),
                mode_browse_bg: ThemeColor::rgb(136, 192, 208),
                mode_browse_fg: ThemeColor::rgb(46, 52, 64),
                mode_search_bg: ThemeColor::rgb(208, 135, 112),
                mode_search_fg: ThemeColor::rgb(46, 52, 64),
                mode_command_bg: ThemeColor::rgb(235, 203, 139),
                mode_command_fg: ThemeColor::rgb(46, 52, 64),

                nav_active_bg: ThemeColor::rgb(67, 76, 94),
                nav_active_fg: ThemeColor::rgb(236, 239, 244),
                nav_inactive_bg: ThemeColor::rgb(46, 52, 64),
                nav_inactive_fg: ThemeColor::rgb(76, 86, 106),

                error: ThemeColor::rgb(191, 97, 106),
            },
            page: PageColors {
                heading: ThemeColor::rgb(180, 142, 173),    // Purple
                badge: ThemeColor::rgb(129, 161, 193),      // Blue
                pill: ThemeColor::rgb(208, 135, 112),       // Orange
                label: ThemeColor::rgb(136, 192, 208),      // Cyan
                link: ThemeColor::rgb(136, 192, 208),       // Cyan
                detail: ThemeColor::rgb(76, 86, 106),       // Gray
                code: ThemeColor::rgb(163, 190, 140),       // Green
                bit_numbers: ThemeColor::rgb(76, 86, 106),  // Gray
                bit_values: ThemeColor::rgb(235, 203, 139), // Yellow
            },
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::dark(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["dark", "light", "dracula", "gruvbox", "nord"]
    }

    pub fn is_known(name: &str) -> bool {
        Self::available_themes().contains(&name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        for name in Theme::available_themes() {
            assert_eq!(Theme::from_name(name).name, name);
        }
        assert_eq!(Theme::from_name("no-such-theme").name, "dark");
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(ThemeColor::Named("Cyan".into()).to_color(), Color::Cyan);
        assert_eq!(
            ThemeColor::Named("#ff8000".into()).to_color(),
            Color::Rgb(255, 128, 0)
        );
        assert_eq!(ThemeColor::Named("#zz".into()).to_color(), Color::White);
    }

    #[test]
    fn test_theme_color_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            a: ThemeColor,
            b: ThemeColor,
        }
        let w: Wrapper = toml::from_str("a = { r = 1, g = 2, b = 3 }\nb = \"red\"").unwrap();
        assert_eq!(w.a.to_color(), Color::Rgb(1, 2, 3));
        assert_eq!(w.b.to_color(), Color::Red);
    }
}
