use crate::serialize::scalar::{self, Style};

/// Document tree produced by the template walker and rendered by [`render`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node {
    /// Pre-rendered scalar text (numbers, booleans, dimensions).
    Raw(String),
    /// String value; quoting or block form is chosen at render time.
    Str(String),
    /// Keys in emission order. Keys are plain identifiers.
    Map(Vec<(&'static str, Node)>),
    List(Vec<Node>),
}

impl Node {
    pub(crate) fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    pub(crate) fn bool(v: bool) -> Self {
        Self::Raw(if v { "true" } else { "false" }.to_owned())
    }

    pub(crate) fn int(v: impl Into<i64>) -> Self {
        Self::Raw(v.into().to_string())
    }

    pub(crate) fn number(v: f64) -> Self {
        Self::Raw(scalar::number(v))
    }
}

/// Collects map entries; optional values are skipped when absent.
#[derive(Default)]
pub(crate) struct MapBuilder {
    entries: Vec<(&'static str, Node)>,
}

impl MapBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn put(mut self, key: &'static str, value: Node) -> Self {
        self.entries.push((key, value));
        self
    }

    pub(crate) fn put_opt<T>(
        mut self,
        key: &'static str,
        value: Option<T>,
        f: impl FnOnce(T) -> Node,
    ) -> Self {
        if let Some(v) = value {
            self.entries.push((key, f(v)));
        }
        self
    }

    pub(crate) fn build(self) -> Node {
        Node::Map(self.entries)
    }
}

/// Render a top-level map. Every line, including the last, ends with `\n`.
pub(crate) fn render(root: &Node, indent: usize) -> String {
    let mut r = Renderer {
        out: String::new(),
        indent: indent.clamp(1, 8),
    };
    match root {
        Node::Map(entries) => r.map(entries, 0, false),
        Node::List(items) => r.list(items, 0),
        Node::Raw(s) => r.line(s),
        Node::Str(s) => r.line(&scalar::inline(s)),
    }
    r.out
}

struct Renderer {
    out: String,
    indent: usize,
}

impl Renderer {
    fn pad(&mut self, col: usize) {
        self.out.extend(std::iter::repeat_n(' ', col));
    }

    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    /// Keys at `col`. With `inline_first`, the caller already wrote the first key's prefix.
    fn map(&mut self, entries: &[(&'static str, Node)], col: usize, inline_first: bool) {
        for (i, (key, value)) in entries.iter().enumerate() {
            if !(inline_first && i == 0) {
                self.pad(col);
            }
            self.out.push_str(key);
            self.out.push(':');
            self.value(value, col);
        }
    }

    /// Value of a key sitting at `col`; the cursor is right after the colon.
    fn value(&mut self, value: &Node, col: usize) {
        match value {
            Node::Raw(s) => {
                self.out.push(' ');
                self.line(s);
            }
            Node::Str(s) => match scalar::style_for(s) {
                Style::Literal => self.literal(s, col),
                _ => {
                    self.out.push(' ');
                    self.line(&scalar::inline(s));
                }
            },
            Node::Map(entries) if entries.is_empty() => self.line(" {}"),
            Node::Map(entries) => {
                self.out.push('\n');
                self.map(entries, col + self.indent, false);
            }
            Node::List(items) if items.is_empty() => self.line(" []"),
            Node::List(items) => {
                self.out.push('\n');
                self.list(items, col + self.indent);
            }
        }
    }

    fn list(&mut self, items: &[Node], col: usize) {
        for item in items {
            self.pad(col);
            self.out.push('-');
            match item {
                Node::Map(entries) if !entries.is_empty() => {
                    self.out.push(' ');
                    self.map(entries, col + 2, true);
                }
                Node::Map(_) => self.line(" {}"),
                Node::List(inner) if !inner.is_empty() => {
                    self.out.push('\n');
                    self.list(inner, col + self.indent);
                }
                Node::List(_) => self.line(" []"),
                Node::Raw(s) => {
                    self.out.push(' ');
                    self.line(s);
                }
                Node::Str(s) => {
                    self.out.push(' ');
                    self.line(&scalar::inline(s));
                }
            }
        }
    }

    /// `|` block for a key at `col`, content lines at `col + indent`.
    fn literal(&mut self, s: &str, col: usize) {
        let (body, chomp) = match s.strip_suffix('\n') {
            Some(body) => (body, '+'),
            None => (s, '-'),
        };
        let needs_indicator = body
            .split('\n')
            .find(|l| !l.is_empty())
            .is_some_and(|l| l.starts_with([' ', '\t']));

        self.out.push_str(" |");
        if needs_indicator {
            self.out.push_str(&self.indent.to_string());
        }
        self.out.push(chomp);
        self.out.push('\n');

        let content_col = col + self.indent;
        for l in body.split('\n') {
            if !l.is_empty() {
                self.pad(content_col);
                self.out.push_str(l);
            }
            self.out.push('\n');
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/emit.rs"]
mod tests;
