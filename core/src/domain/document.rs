//! Parsed document tree
//!
//! An owned, read-only element tree produced by the wire parser. Entities are
//! built from it through `domain::coercion`; nothing in the domain layer knows
//! about the wire format itself.

/// One element of a parsed API response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    /// Content of the element's first child, when that child is non-empty text
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty element
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create the unnamed document root holding the top-level elements
    pub fn document(children: Vec<Node>) -> Self {
        Self {
            name: String::new(),
            text: None,
            children,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.is_empty() { None } else { Some(text) };
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All elements named `name` below this node, in document order.
    ///
    /// Matches are not searched for nested matches, so a `project` element
    /// embedded inside another `project` is never reported separately.
    pub fn find_all<'a>(&'a self, name: &'a str) -> FindAll<'a> {
        FindAll {
            name,
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Iterator returned by [`Node::find_all`]
pub struct FindAll<'a> {
    name: &'a str,
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for FindAll<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.name == self.name {
                return Some(node);
            }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}
