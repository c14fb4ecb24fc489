//! HTML fragment construction.
//!
//! Every server-supplied string enters a fragment through [`Element::text`] or
//! [`Element::attr`], both of which escape. A [`Markup`] value can only be made
//! from escaped text, static literals, or other `Markup`, so untrusted data is
//! never interpreted as markup.

pub mod dashboard;
pub mod files;

use std::fmt;

/// Escaped HTML fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Fragment holding `text` as a text node.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Markup(escape(text))
    }

    /// Fragment from a static literal written in this crate.
    #[must_use]
    pub fn literal(html: &'static str) -> Self {
        Markup(html.to_string())
    }

    #[must_use]
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        Markup(parts.into_iter().map(|m| m.0).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in a text node or a quoted attribute value.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builder for one element. Tag and attribute names are static; values escape.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Markup>,
}

impl Element {
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, escape(value)));
        self
    }

    #[must_use]
    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Markup::text(text));
        self
    }

    #[must_use]
    pub fn child(mut self, child: Markup) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn build(self) -> Markup {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            html.push_str(&format!(" {name}=\"{value}\""));
        }
        html.push('>');
        for child in self.children {
            html.push_str(&child.0);
        }
        html.push_str(&format!("</{}>", self.tag));
        Markup(html)
    }
}
