//! Markup tags and their terminal styles.

use console::Style;

/// ANSI sequence that clears every attribute.
pub const RESET: &str = "\x1b[0m";

/// A markup tag understood by [`ConsoleTextTemplate`](super::ConsoleTextTemplate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Section heading: bold yellow on blue.
    Banner,
    /// `<b>`
    Bold,
    Red,
    Green,
    Yellow,
}

impl Tag {
    /// Parse a tag name as written between angle brackets.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "banner" => Some(Tag::Banner),
            "b" => Some(Tag::Bold),
            "red" => Some(Tag::Red),
            "green" => Some(Tag::Green),
            "yellow" => Some(Tag::Yellow),
            _ => None,
        }
    }

    fn apply(self, style: Style) -> Style {
        match self {
            Tag::Banner => style.yellow().on_blue().bold(),
            Tag::Bold => style.bold(),
            Tag::Red => style.red().bold(),
            Tag::Green => style.green().bold(),
            Tag::Yellow => style.yellow().bold(),
        }
    }
}

/// Peridot's console theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeridotTheme {
    colors: bool,
}

impl Default for PeridotTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PeridotTheme {
    /// Colored theme.
    pub fn new() -> Self {
        Self { colors: true }
    }

    /// Theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self { colors: false }
    }

    /// Colored if colors should be used on this terminal, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Style `text` with every tag in `active`, outermost first.
    pub fn paint(&self, active: &[Tag], text: &str) -> String {
        if !self.colors || active.is_empty() || text.is_empty() {
            return text.to_string();
        }
        let style = active
            .iter()
            .fold(Style::new().force_styling(true), |style, tag| tag.apply(style));
        style.apply_to(text).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
