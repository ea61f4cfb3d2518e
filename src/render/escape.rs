//! The one place text becomes markup.
//!
//! View-models only carry [`Html`] for text fields, and the only way to get an
//! [`Html`] from a string is [`Html::escape`], so backend data cannot inject
//! tags or break out of attributes.

use serde::{Serialize, Serializer};
use std::fmt;

/// A string that is safe to place in element content or a quoted attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn escape(raw: &str) -> Self {
        Html(escape_html(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Html {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('1')">&"#),
            "&lt;img src=x onerror=&quot;alert(&#39;1&#39;)&quot;&gt;&amp;"
        );
    }

    #[test]
    fn urls_are_left_readable() {
        assert_eq!(
            Html::escape("http://cars.local/static/images/a.png?w=1&h=2").as_str(),
            "http://cars.local/static/images/a.png?w=1&amp;h=2"
        );
    }
}
