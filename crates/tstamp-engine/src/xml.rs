//! Minimal XML element tree with an indenting serializer.
//!
//! Only what the RDF export needs: qualified element names, attributes in
//! insertion order, nested children. Text nodes are not supported.

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value for the same name in place.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serialize with one element per line and four spaces per nesting level.
    ///
    /// Lines are joined with `\n` and there is no trailing newline.
    pub fn to_pretty_string(&self) -> String {
        let mut lines = Vec::new();
        self.write_lines(0, &mut lines);
        lines.join("\n")
    }

    fn write_lines(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        let mut open = format!("{}<{}", indent, self.name);
        for (name, value) in &self.attributes {
            open.push(' ');
            open.push_str(name);
            open.push_str("=\"");
            open.push_str(&escape_attribute(value));
            open.push('"');
        }

        if self.children.is_empty() {
            open.push_str("/>");
            lines.push(open);
            return;
        }

        open.push('>');
        lines.push(open);
        for child in &self.children {
            child.write_lines(depth + 1, lines);
        }
        lines.push(format!("{}</{}>", indent, self.name));
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
