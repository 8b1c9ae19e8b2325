//! The markup tree
//!
//! [`Node`] is the narrow surface the converters mutate: create a root,
//! append named children, set text. Child order equals append order.
//! Rendering the tree to XML text is a collaborator's job, not ours; the
//! only parsing done here is of the configured template string (an
//! optional `<?xml ...?>` preamble plus one empty root element).

use crate::error::{XmlError, XmlResult};

/// A markup tree node with a name, optional text content, and ordered
/// children
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a root node from a template string
    ///
    /// The template is a preamble (zero or more `<?...?>` processing
    /// instructions) followed by a single empty root element, either
    /// self-closing (`<response/>`) or an open/close pair
    /// (`<response></response>`).
    pub fn from_template(template: &str) -> XmlResult<Self> {
        let mut rest = template.trim();
        while let Some(stripped) = rest.strip_prefix("<?") {
            let end = stripped.find("?>").ok_or_else(|| {
                XmlError::invalid_template("unterminated processing instruction")
            })?;
            rest = stripped[end + 2..].trim_start();
        }

        let name = parse_empty_element(rest)
            .ok_or_else(|| XmlError::invalid_template("expected a single empty root element"))?;
        Ok(Self::new(name))
    }

    /// The element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text content, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Append an empty named child and return a mutable reference to it
    pub fn append_child(&mut self, name: impl Into<String>) -> &mut Node {
        self.children.push(Node::new(name));
        self.children.last_mut().expect("child was just pushed")
    }

    /// The children, in append order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// All descendants matching a slash-separated path of element names,
    /// relative to this node
    pub fn find_all(&self, path: &str) -> Vec<&Node> {
        let mut current: Vec<&Node> = vec![self];
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .into_iter()
                .flat_map(|node| node.children.iter().filter(|child| child.name == segment))
                .collect();
        }
        current
    }

    /// The first descendant matching a slash-separated path, if any
    pub fn find(&self, path: &str) -> Option<&Node> {
        self.find_all(path).into_iter().next()
    }
}

/// Extract the element name from `<name/>` or `<name></name>`.
fn parse_empty_element(body: &str) -> Option<&str> {
    let body = body.trim();

    if let Some(name) = body
        .strip_prefix('<')
        .and_then(|b| b.strip_suffix("/>"))
    {
        let name = name.trim();
        return is_valid_name(name).then_some(name);
    }

    let rest = body.strip_prefix('<')?;
    let close = rest.find('>')?;
    let name = rest[..close].trim();
    let tail = rest[close + 1..].trim();
    let closing = tail.strip_prefix("</")?.strip_suffix('>')?;
    (is_valid_name(name) && closing.trim() == name).then_some(name)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order_is_preserved() {
        let mut root = Node::new("response");
        root.append_child("b");
        root.append_child("a");
        root.append_child("b");

        let names: Vec<&str> = root.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_find_walks_paths() {
        let mut root = Node::new("response");
        let outer = root.append_child("outer");
        outer.append_child("inner").set_text("1");
        outer.append_child("inner").set_text("2");

        assert_eq!(root.find("outer/inner").unwrap().text(), Some("1"));
        assert_eq!(root.find_all("outer/inner").len(), 2);
        assert!(root.find("outer/missing").is_none());
        assert!(root.find_all("missing").is_empty());
    }

    #[test]
    fn test_template_with_preamble() {
        let node =
            Node::from_template("<?xml version=\"1.0\" encoding=\"UTF-8\"?><response/>").unwrap();
        assert_eq!(node.name(), "response");
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_template_open_close_pair() {
        let node = Node::from_template("<feed></feed>").unwrap();
        assert_eq!(node.name(), "feed");
    }

    #[test]
    fn test_template_without_preamble() {
        let node = Node::from_template("  <root/> ").unwrap();
        assert_eq!(node.name(), "root");
    }

    #[test]
    fn test_malformed_templates() {
        for template in [
            "",
            "plain text",
            "<?xml version=\"1.0\"",
            "<a><b/></a>",
            "<1bad/>",
            "<a></b>",
        ] {
            let err = Node::from_template(template).unwrap_err();
            assert!(matches!(err, XmlError::InvalidTemplate(_)), "{template:?}");
        }
    }
}
