use ratatui::style::Color;

pub const COFFEE_ACCENT: Color = Color::Rgb(0xc0, 0x6b, 0x2c);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0x92, 0x87);
pub const ERROR_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTED_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
