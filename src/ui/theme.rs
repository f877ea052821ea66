use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const CARD_BORDER: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ERROR_BG: Color = Color::Rgb(0x45, 0x0a, 0x0a);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const BUTTON_BG: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const BUTTON_DISABLED_BG: Color = Color::Rgb(0x93, 0xc5, 0xfd);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);

pub const LINK: Color = Color::Rgb(0x60, 0xa5, 0xfa);

// Tag chips: types, topics, levels.
pub const TAG_BLUE_BG: Color = Color::Rgb(0xdb, 0xea, 0xfe);
pub const TAG_BLUE_FG: Color = Color::Rgb(0x1e, 0x40, 0xaf);
pub const TAG_GREEN_BG: Color = Color::Rgb(0xdc, 0xfc, 0xe7);
pub const TAG_GREEN_FG: Color = Color::Rgb(0x16, 0x65, 0x34);
pub const TAG_PURPLE_BG: Color = Color::Rgb(0xf3, 0xe8, 0xff);
pub const TAG_PURPLE_FG: Color = Color::Rgb(0x6b, 0x21, 0xa8);
