//! Console text templates.
//!
//! A template is plain text with `{{name}}` placeholders and a handful of
//! markup tags: `<banner>`, `<b>`, `<red>`, `<green>`, `<yellow>`, each closed
//! by its `</...>` counterpart. Tags nest. Anything that looks like a tag but
//! is not one of these is printed as is.

use crate::error::Result;
use crate::ui::theme::{PeridotTheme, Tag};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A renderable piece of console text.
#[derive(Debug, Clone, Default)]
pub struct ConsoleTextTemplate {
    text: String,
    vars: BTreeMap<String, String>,
}

impl ConsoleTextTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            vars: BTreeMap::new(),
        }
    }

    /// Load template text from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Bind a value to `{{name}}`.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// The text with placeholders replaced. Unbound placeholders are kept.
    pub fn substitute(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let name = after[..end].trim();
                    match self.vars.get(name) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&rest[start..start + 2 + end + 2]),
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Substitute placeholders and turn markup into terminal styling.
    pub fn render(&self, theme: &PeridotTheme) -> String {
        render_markup(&self.substitute(), theme)
    }
}

/// Render markup text with `theme`. With a plain theme, tags are stripped.
pub fn render_markup(text: &str, theme: &PeridotTheme) -> String {
    let mut out = String::with_capacity(text.len());
    let mut active: Vec<Tag> = Vec::new();
    let mut segment = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        segment.push_str(&rest[..open]);
        let candidate = &rest[open..];
        match parse_tag(candidate) {
            Some((closing, tag, len)) => {
                out.push_str(&theme.paint(&active, &segment));
                segment.clear();
                if closing {
                    if let Some(pos) = active.iter().rposition(|t| *t == tag) {
                        active.remove(pos);
                    }
                } else {
                    active.push(tag);
                }
                rest = &candidate[len..];
            }
            None => {
                segment.push('<');
                rest = &candidate[1..];
            }
        }
    }
    segment.push_str(rest);
    out.push_str(&theme.paint(&active, &segment));
    out
}

/// Parse `<tag>` or `</tag>` at the start of `s`.
///
/// Returns whether it is a closing tag, the tag, and the byte length consumed.
fn parse_tag(s: &str) -> Option<(bool, Tag, usize)> {
    let end = s.find('>')?;
    let inner = &s[1..end];
    let (closing, name) = match inner.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, inner),
    };
    Tag::from_name(name).map(|tag| (closing, tag, end + 1))
}
