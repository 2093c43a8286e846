use ratatui::style::Color;

pub const BACKDROP: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const PANEL: Color = Color::Rgb(0x14, 0x14, 0x14);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const CONTENT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const LOGO_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_OFFLINE: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

// Progress bar gradient stops, left to right.
pub const BAR_CYAN: Color = Color::Rgb(0x00, 0xf5, 0xff);
pub const BAR_BLUE: Color = Color::Rgb(0x1e, 0x90, 0xff);
pub const BAR_CORAL: Color = Color::Rgb(0xff, 0x6b, 0x6b);

pub const BAR_TRACK: Color = Color::Rgb(0x1a, 0x1a, 0x2e);
pub const PARTICLE_BRIGHT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const PARTICLE_FAINT: Color = Color::Rgb(0x7f, 0xdb, 0xff);
