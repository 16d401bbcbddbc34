use std::collections::BTreeMap;
use std::fmt;

/// Handle to one element in a [`crate::Page`].
///
/// Ids are minted by [`crate::Page::create`] and index the page's arena.
/// Nodes are never deallocated (detach only), so a minted id stays valid for
/// the life of its page. Ids are meaningless across pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element kind.
///
/// `Document` is the page root; `Fragment` is a detached container whose
/// children move into the target on append, the rest mirror the handful of
/// element kinds the views produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Document,
    Fragment,
    Select,
    Option,
    Main,
    Article,
    Section,
    Button,
    Paragraph,
    H2,
    H3,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Document => "#document",
            Tag::Fragment => "#fragment",
            Tag::Select => "select",
            Tag::Option => "option",
            Tag::Main => "main",
            Tag::Article => "article",
            Tag::Section => "section",
            Tag::Button => "button",
            Tag::Paragraph => "p",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element: tag, text, classes, attributes, tree links.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub tag: Tag,
    pub text: String,
    /// Unique lookup id, the `element_by_id` key. Not every node has one.
    pub element_id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Interaction lock, only meaningful on `Select` and `Button` nodes.
    pub disabled: bool,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: Tag) -> Self {
        Self {
            tag,
            text: String::new(),
            element_id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            disabled: false,
            children: Vec::new(),
            parent: None,
        }
    }
}
