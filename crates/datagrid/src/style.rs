//! Minimal ANSI text styling.
//!
//! A cut-down style type for coloring and emphasizing rendered table text.
//! Attributes compose through a builder; `render` wraps a string in the
//! corresponding SGR escape sequence, or returns it unchanged when no
//! attribute is set.
//!
//! # Example
//!
//! ```rust
//! use datagrid::style::Style;
//!
//! let header = Style::new().bold().foreground("212");
//! let plain = Style::new();
//!
//! assert!(header.render("Title").contains("Title"));
//! assert_eq!(plain.render("Title"), "Title");
//! ```

/// A terminal color: an ANSI-256 index or a 24-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// ANSI-256 palette index.
    Ansi(u8),
    /// 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Color {
    fn fg_code(self) -> String {
        match self {
            Self::Ansi(n) => format!("38;5;{n}"),
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    fn bg_code(self) -> String {
        match self {
            Self::Ansi(n) => format!("48;5;{n}"),
            Self::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
        }
    }
}

impl From<u8> for Color {
    fn from(n: u8) -> Self {
        Self::Ansi(n)
    }
}

impl From<&str> for Color {
    /// Parses "#rrggbb" hex strings and decimal ANSI-256 indices.
    /// Unparseable input falls back to the default foreground index 7.
    fn from(s: &str) -> Self {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return Self::Rgb(r, g, b);
                }
            }
            return Self::Ansi(7);
        }
        s.parse::<u8>().map_or(Self::Ansi(7), Self::Ansi)
    }
}

/// A composable text style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    bold: bool,
    faint: bool,
    underline: bool,
    reverse: bool,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl Style {
    /// Creates an empty style that renders text unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enables faint.
    #[must_use]
    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Enables underline.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Enables reverse video.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Renders the string with this style applied.
    #[must_use]
    pub fn render(&self, s: &str) -> String {
        let mut codes: Vec<String> = Vec::new();
        if self.bold {
            codes.push("1".to_string());
        }
        if self.faint {
            codes.push("2".to_string());
        }
        if self.underline {
            codes.push("4".to_string());
        }
        if self.reverse {
            codes.push("7".to_string());
        }
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.bg_code());
        }

        if codes.is_empty() {
            return s.to_string();
        }
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_ansi_index() {
        assert_eq!(Color::from("212"), Color::Ansi(212));
        assert_eq!(Color::from("0"), Color::Ansi(0));
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from("#ff00ff"), Color::Rgb(255, 0, 255));
        assert_eq!(Color::from("#000000"), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_color_from_invalid() {
        assert_eq!(Color::from("mauve"), Color::Ansi(7));
        assert_eq!(Color::from("#abc"), Color::Ansi(7));
    }

    #[test]
    fn test_render_plain_passthrough() {
        assert_eq!(Style::new().render("hello"), "hello");
    }

    #[test]
    fn test_render_bold() {
        assert_eq!(Style::new().bold().render("hi"), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn test_render_combined() {
        let styled = Style::new().bold().foreground("212").render("hi");
        assert_eq!(styled, "\x1b[1;38;5;212mhi\x1b[0m");
    }

    #[test]
    fn test_render_rgb_background() {
        let styled = Style::new().background("#102030").render("x");
        assert_eq!(styled, "\x1b[48;2;16;32;48mx\x1b[0m");
    }
}
