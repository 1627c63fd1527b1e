use crossterm::style::Color;

// Palette shared by every command's output
pub fn title_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn favourite_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn header_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
