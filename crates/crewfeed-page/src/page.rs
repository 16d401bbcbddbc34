use std::collections::BTreeMap;

use crate::node::{Node, NodeId, Tag};

/// Arena-backed element tree.
///
/// One `Page` owns every node it ever created. Append moves a node (a node
/// has at most one parent); appending a [`Tag::Fragment`] moves the
/// fragment's children instead, leaving the fragment empty. Detached nodes
/// stay allocated but are invisible to queries, which walk the tree from the
/// root.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Page {
    pub fn new() -> Self {
        let root = Node::new(Tag::Document);
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a new detached element.
    pub fn create(&mut self, tag: Tag) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // ==========================================
    // Content and identity
    // ==========================================

    pub fn tag(&self, id: NodeId) -> Tag {
        self.node(id).tag
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.node_mut(id).text = text.into();
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    pub fn set_element_id(&mut self, id: NodeId, element_id: impl Into<String>) {
        self.node_mut(id).element_id = Some(element_id.into());
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.node(id).element_id.as_deref()
    }

    /// Find the attached element carrying this lookup id.
    pub fn element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .find(|&id| self.node(id).element_id.as_deref() == Some(element_id))
    }

    // ==========================================
    // Classes and attributes
    // ==========================================

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let node = self.node_mut(id);
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    /// Flip a class; returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        let node = self.node_mut(id);
        if let Some(pos) = node.classes.iter().position(|c| c == class) {
            node.classes.remove(pos);
            false
        } else {
            node.classes.push(class.to_string());
            true
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.node(id).classes
    }

    pub fn set_attribute(&mut self, id: NodeId, key: &str, value: impl Into<String>) {
        self.node_mut(id)
            .attributes
            .insert(key.to_string(), value.into());
    }

    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.node(id).attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self, id: NodeId) -> &BTreeMap<String, String> {
        &self.node(id).attributes
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        self.node_mut(id).disabled = disabled;
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.node(id).disabled
    }

    // ==========================================
    // Tree structure
    // ==========================================

    /// Attach `child` as the last child of `parent`.
    ///
    /// A node already in the tree is moved, not duplicated. Appending a
    /// fragment moves the fragment's children and leaves the fragment
    /// itself detached and empty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(child).tag == Tag::Fragment {
            let grandchildren = std::mem::take(&mut self.node_mut(child).children);
            for grandchild in grandchildren {
                self.node_mut(grandchild).parent = Some(parent);
                self.node_mut(parent).children.push(grandchild);
            }
            return;
        }
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.node(child).parent {
            self.node_mut(old_parent).children.retain(|&c| c != child);
            self.node_mut(child).parent = None;
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Detach every child of `parent`, leaving their subtrees intact.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self.node_mut(parent).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
    }

    /// Depth-first preorder walk of everything below `id` (excluding `id`).
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack = self.node(id).children.to_vec();
        stack.reverse();
        Descendants { page: self, stack }
    }

    // ==========================================
    // Queries
    // ==========================================

    /// First attached element (document order) with this tag and attribute
    /// value.
    pub fn find_by_attribute(&self, tag: Tag, key: &str, value: &str) -> Option<NodeId> {
        self.descendants(self.root).find(|&id| {
            let node = self.node(id);
            node.tag == tag && node.attributes.get(key).map(String::as_str) == Some(value)
        })
    }

    /// Every element with this tag below `scope`, in document order.
    pub fn find_all(&self, scope: NodeId, tag: Tag) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|&id| self.node(id).tag == tag)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Descendants<'a> {
    page: &'a Page,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        for &child in self.page.node(next).children.iter().rev() {
            self.stack.push(child);
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_builds_ordered_children() {
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);
        let a = page.create(Tag::Article);
        let b = page.create(Tag::Article);
        page.append_child(main, a);
        page.append_child(main, b);
        assert_eq!(page.children(main), &[a, b]);
    }

    #[test]
    fn appending_fragment_moves_its_children() {
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);

        let fragment = page.create(Tag::Fragment);
        let a = page.create(Tag::Article);
        let b = page.create(Tag::Article);
        page.append_child(fragment, a);
        page.append_child(fragment, b);

        page.append_child(main, fragment);
        assert_eq!(page.children(main), &[a, b]);
        assert!(page.children(fragment).is_empty());
    }

    #[test]
    fn append_moves_rather_than_duplicates() {
        let mut page = Page::new();
        let first = page.create(Tag::Section);
        let second = page.create(Tag::Section);
        let child = page.create(Tag::Paragraph);
        page.append_child(page.root(), first);
        page.append_child(page.root(), second);
        page.append_child(first, child);
        page.append_child(second, child);
        assert!(page.children(first).is_empty());
        assert_eq!(page.children(second), &[child]);
    }

    #[test]
    fn clear_children_detaches_whole_subtrees() {
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);
        let article = page.create(Tag::Article);
        let heading = page.create(Tag::H2);
        page.append_child(main, article);
        page.append_child(article, heading);

        page.clear_children(main);
        assert!(page.children(main).is_empty());
        // The detached article keeps its own subtree.
        assert_eq!(page.children(article), &[heading]);
    }

    #[test]
    fn toggle_class_flips_and_reports_presence() {
        let mut page = Page::new();
        let section = page.create(Tag::Section);
        page.add_class(section, "comments");
        assert!(page.toggle_class(section, "hide"));
        assert!(page.has_class(section, "hide"));
        assert!(!page.toggle_class(section, "hide"));
        assert!(!page.has_class(section, "hide"));
        assert!(page.has_class(section, "comments"));
    }

    #[test]
    fn add_class_is_idempotent() {
        let mut page = Page::new();
        let section = page.create(Tag::Section);
        page.add_class(section, "comments");
        page.add_class(section, "comments");
        assert_eq!(page.classes(section), &["comments".to_string()]);
    }

    #[test]
    fn element_by_id_sees_only_attached_nodes() {
        let mut page = Page::new();
        let select = page.create(Tag::Select);
        page.set_element_id(select, "selectMenu");
        assert_eq!(page.element_by_id("selectMenu"), None);

        page.append_child(page.root(), select);
        assert_eq!(page.element_by_id("selectMenu"), Some(select));
    }

    #[test]
    fn attribute_queries_match_tag_and_value() {
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);
        let section = page.create(Tag::Section);
        let button = page.create(Tag::Button);
        page.set_attribute(section, "data-post-id", "7");
        page.set_attribute(button, "data-post-id", "7");
        page.append_child(main, button);
        page.append_child(main, section);

        assert_eq!(
            page.find_by_attribute(Tag::Section, "data-post-id", "7"),
            Some(section)
        );
        assert_eq!(
            page.find_by_attribute(Tag::Button, "data-post-id", "7"),
            Some(button)
        );
        assert_eq!(page.find_by_attribute(Tag::Button, "data-post-id", "8"), None);
    }

    #[test]
    fn find_all_walks_in_document_order() {
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);
        let first_article = page.create(Tag::Article);
        let second_article = page.create(Tag::Article);
        let first_button = page.create(Tag::Button);
        let second_button = page.create(Tag::Button);
        page.append_child(main, first_article);
        page.append_child(first_article, first_button);
        page.append_child(main, second_article);
        page.append_child(second_article, second_button);

        assert_eq!(page.find_all(main, Tag::Button), vec![first_button, second_button]);
    }

    #[test]
    fn detached_nodes_are_invisible_to_queries() {
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);
        let button = page.create(Tag::Button);
        page.set_attribute(button, "data-post-id", "3");
        page.append_child(main, button);

        page.clear_children(main);
        assert_eq!(page.find_by_attribute(Tag::Button, "data-post-id", "3"), None);
    }
}
