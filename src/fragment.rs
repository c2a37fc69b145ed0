//! Detached markup that has not been attached to any display yet.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub styles: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            styles: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.styles.push((property.to_string(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Own text followed by the text of every descendant.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", html_escape(&self.class_attr()));
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(p, v)| format!("{}: {};", p, v))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(out, " style=\"{}\"", html_escape(&style));
        }
        out.push('>');
        if let Some(ref text) = self.text {
            out.push_str(&html_escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// An ordered batch of top-level elements, inserted into a display wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Element>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, element: Element) {
        self.nodes.push(element);
    }

    pub fn nodes(&self) -> &[Element] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }

    /// `(label text, label class, value text)` for each label/value pair,
    /// in display order. A trailing label without a value is skipped.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        self.nodes
            .chunks(2)
            .filter(|pair| pair.len() == 2)
            .map(|pair| {
                (
                    pair[0].text_content(),
                    pair[0].class_attr(),
                    pair[1].text_content(),
                )
            })
            .collect()
    }
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
