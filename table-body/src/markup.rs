use std::collections::BTreeMap;
use std::fmt::Write;

pub type Attributes = BTreeMap<String, String>;

/// Elements without a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

/// A tree of markup elements and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element {
        tag: String,
        attrs: Attributes,
        children: Vec<Markup>,
    },
    Text(String),
}

impl Markup {
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Set an attribute, replacing any previous value. No-op on text.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.insert(name.into(), value.into());
        }
        self
    }

    /// Merge attributes; later values win.
    pub fn attrs<'a>(mut self, extra: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.extend(extra.into_iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        self
    }

    pub fn child(mut self, child: Markup) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn children(mut self, items: impl IntoIterator<Item = Markup>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(items);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag.as_str()),
            Self::Text(_) => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            Self::Text(_) => None,
        }
    }

    pub fn child_nodes(&self) -> &[Markup] {
        match self {
            Self::Element { children, .. } => children.as_slice(),
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Element { children, .. } => children.iter().map(Markup::text_content).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(&escape(s)),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    if !is_attribute_name(name) {
                        log::warn!("[markup] dropping invalid attribute name {name:?}");
                        continue;
                    }
                    let _ = write!(out, " {name}=\"{}\"", escape(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

/// Whether `name` can be written as an HTML attribute name as-is.
pub fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=' | '&')
        })
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
