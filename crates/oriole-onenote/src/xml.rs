//! In-memory element tree for hierarchy snapshots.
//!
//! The parser needs two traversal directions over the same document:
//! downward (notebook to pages) and upward (page back to its notebook,
//! skipping section-group wrappers). A streaming read can't do the second,
//! so events from quick-xml are first materialized into a small arena of
//! nodes with parent links. Element and attribute names are matched by
//! local name; the host's `one:` namespace prefix is ignored.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::Result;

/// A parsed XML document: an arena of elements with parent/child links.
#[derive(Debug)]
pub struct XmlTree {
    nodes: Vec<XmlNode>,
}

#[derive(Debug)]
struct XmlNode {
    /// Local element name (namespace prefix stripped). Empty for the
    /// synthetic document root.
    name: String,
    attrs: Vec<(String, String)>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// A borrowed reference to one element in an [`XmlTree`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t XmlTree,
    index: usize,
}

impl XmlTree {
    /// Parse a document. Text content is ignored; the hierarchy schema
    /// carries everything in attributes.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        // Index 0 is the synthetic document root.
        let mut nodes = vec![XmlNode {
            name: String::new(),
            attrs: Vec::new(),
            parent: None,
            children: Vec::new(),
        }];
        let mut stack: Vec<usize> = vec![0];

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let index = push_element(&mut nodes, &stack, &start)?;
                    stack.push(index);
                }
                Event::Empty(start) => {
                    push_element(&mut nodes, &stack, &start)?;
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { nodes })
    }

    /// The synthetic document root. Its children are the document's
    /// top-level elements.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            index: 0,
        }
    }
}

fn push_element(nodes: &mut Vec<XmlNode>, stack: &[usize], start: &BytesStart<'_>) -> Result<usize> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }

    let parent = *stack.last().unwrap_or(&0);
    let index = nodes.len();
    nodes.push(XmlNode {
        name,
        attrs,
        parent: Some(parent),
        children: Vec::new(),
    });
    nodes[parent].children.push(index);
    Ok(index)
}

impl<'t> NodeRef<'t> {
    /// Local element name.
    pub fn name(&self) -> &'t str {
        &self.tree.nodes[self.index].name
    }

    /// Look up an attribute by local name.
    pub fn attribute(&self, name: &str) -> Option<&'t str> {
        self.tree.nodes[self.index]
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct children, in document order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        self.tree.nodes[self.index]
            .children
            .iter()
            .map(move |&index| NodeRef { tree, index })
    }

    /// Direct children with the given local name.
    pub fn children_named(&self, name: &'t str) -> impl Iterator<Item = NodeRef<'t>> + 't {
        self.children().filter(move |child| child.name() == name)
    }

    /// All descendants with the given local name, in document order.
    pub fn descendants_named(&self, name: &str) -> Vec<NodeRef<'t>> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants(&self, name: &str, found: &mut Vec<NodeRef<'t>>) {
        for child in self.children() {
            if child.name() == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Parent element. `None` for the document root and for top-level
    /// elements (whose parent is the synthetic root).
    pub fn parent(&self) -> Option<NodeRef<'t>> {
        let parent = self.tree.nodes[self.index].parent?;
        if parent == 0 {
            return None;
        }
        Some(NodeRef {
            tree: self.tree,
            index: parent,
        })
    }
}
