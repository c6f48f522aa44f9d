//! Element tree

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::xml::attr::Attr;

/// An element with ordered, uniquely named attributes and ordered children
///
/// There is no text content: a node is either a leaf or holds only child
/// elements.
#[derive(Clone, Debug, Default)]
pub struct Node {
    name: String,
    attrs: IndexMap<String, String>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute. A repeated name overwrites the value and keeps the
    /// position of the first insert.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Add a child at the end and return it
    #[allow(clippy::indexing_slicing)]
    pub fn append_child(&mut self, child: Self) -> &mut Self {
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    /// Builder form of [`append`](Self::append)
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// Builder form of [`append_child`](Self::append_child)
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Remove an attribute, keeping the order of the others
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.shift_remove(name)
    }

    pub fn attrs(&self) -> impl ExactSizeIterator<Item = Attr<'_>> + '_ {
        self.attrs
            .iter()
            .map(|(name, value)| Attr::new(name.as_str(), value.as_str()))
    }

    pub fn attr(&self, name: &str) -> Option<Attr<'_>> {
        self.attrs
            .get_key_value(name)
            .map(|(name, value)| Attr::new(name.as_str(), value.as_str()))
    }

    /// Decoded value of attribute `name`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn attr_count(&self) -> usize {
        self.attrs.len()
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// First child named `name`
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialize without indentation: one element tag per line
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.write_open_tag(out)?;
        if self.children.is_empty() {
            return out.write_str(" />\n");
        }
        out.write_str(">\n")?;
        for child in &self.children {
            child.write_to(out)?;
        }
        writeln!(out, "</{}>", self.name)
    }

    /// Indented form used for logging: `2 * indent` leading spaces, children
    /// one level deeper
    pub fn log_string(&self, indent: usize) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_log(&mut out, indent);
        out
    }

    /// Emit [`log_string`](Self::log_string) line by line at debug level
    pub fn log(&self, indent: usize) {
        for line in self.log_string(indent).lines() {
            debug!("{line}");
        }
    }

    fn write_log<W: fmt::Write>(&self, out: &mut W, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent * 2);
        out.write_str(&pad)?;
        self.write_open_tag(out)?;
        if self.children.is_empty() {
            return out.write_str(" />\n");
        }
        out.write_str(">\n")?;
        for child in &self.children {
            child.write_log(out, indent + 1)?;
        }
        writeln!(out, "{pad}</{}>", self.name)
    }

    fn write_open_tag<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<{}", self.name)?;
        for attr in self.attrs() {
            write!(out, " {attr}")?;
        }
        Ok(())
    }
}

// Attribute order is significant, which IndexMap's own PartialEq ignores
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.attrs.iter().eq(other.attrs.iter())
            && self.children == other.children
    }
}

impl Eq for Node {}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_overwrites_in_place() {
        let mut node = Node::new("a");
        node.append("x", "1").append("y", "2").append("x", "3");
        assert_eq!(node.attr_count(), 2);
        assert_eq!(node.value("x"), Some("3"));
        let names: Vec<_> = node.attrs().map(|a| a.name()).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn test_remove_attr_keeps_order() {
        let mut node = Node::new("a")
            .with_attr("x", "1")
            .with_attr("y", "2")
            .with_attr("z", "3");
        assert_eq!(node.remove_attr("y").as_deref(), Some("2"));
        assert_eq!(node.remove_attr("y"), None);
        let names: Vec<_> = node.attrs().map(|a| a.name()).collect();
        assert_eq!(names, ["x", "z"]);
    }

    #[test]
    fn test_children_queries() {
        let mut root = Node::new("root");
        root.append_child(Node::new("item")).append("id", "1");
        root.append_child(Node::new("other"));
        root.append_child(Node::new("item")).append("id", "2");

        assert_eq!(root.child_count(), 3);
        assert!(!root.is_leaf());
        assert_eq!(root.child("item").and_then(|c| c.value("id")), Some("1"));
        let ids: Vec<_> = root
            .children_named("item")
            .filter_map(|c| c.value("id"))
            .collect();
        assert_eq!(ids, ["1", "2"]);
        assert!(root.child("missing").is_none());
    }

    #[test]
    fn test_typed_attr_lookup() {
        let node = Node::new("a").with_attr("n", "0x10");
        assert_eq!(node.attr("n").map(|a| a.int_value()), Some(16));
        assert!(node.has_attr("n"));
        assert!(node.attr("m").is_none());
    }

    #[test]
    fn test_serialize_leaf() {
        let node = Node::new("a").with_attr("k", "v & w");
        assert_eq!(node.to_string(), "<a k=\"v &amp; w\" />\n");
    }

    #[test]
    fn test_serialize_nested() {
        let node = Node::new("a")
            .with_child(Node::new("b").with_attr("x", "1"))
            .with_child(Node::new("c"));
        assert_eq!(node.to_string(), "<a>\n<b x=\"1\" />\n<c />\n</a>\n");
    }

    #[test]
    fn test_log_string_indents_two_spaces_per_level() {
        let node = Node::new("a").with_child(Node::new("b").with_child(Node::new("c")));
        assert_eq!(
            node.log_string(0),
            "<a>\n  <b>\n    <c />\n  </b>\n</a>\n"
        );
        assert_eq!(node.log_string(1), "  <a>\n    <b>\n      <c />\n    </b>\n  </a>\n");
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Node::new("n").with_attr("x", "1").with_attr("y", "2");
        let b = Node::new("n").with_attr("y", "2").with_attr("x", "1");
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}
