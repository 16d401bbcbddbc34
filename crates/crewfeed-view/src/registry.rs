use std::collections::BTreeMap;

use crewfeed_page::NodeId;
use crewfeed_types::PostId;

/// Click bindings for the current render: post id to toggle button.
///
/// Rebuilt on every refresh. The previous cycle's bindings are cleared
/// wholesale before the region is rebuilt, so a click can only ever reach a
/// button that exists in the tree right now. Clicks for unregistered post
/// ids are dropped by the dispatcher.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    bindings: BTreeMap<PostId, NodeId>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, post: PostId, button: NodeId) {
        self.bindings.insert(post, button);
    }

    /// Drop every binding. Called at the start of each refresh.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn contains(&self, post: PostId) -> bool {
        self.bindings.contains_key(&post)
    }

    pub fn button(&self, post: PostId) -> Option<NodeId> {
        self.bindings.get(&post).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Registered post ids in ascending order.
    pub fn post_ids(&self) -> impl Iterator<Item = PostId> + '_ {
        self.bindings.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewfeed_page::{Page, Tag};

    #[test]
    fn clear_drops_every_binding() {
        let mut page = Page::new();
        let first = page.create(Tag::Button);
        let second = page.create(Tag::Button);

        let mut registry = ListenerRegistry::new();
        registry.register(PostId::new(1), first);
        registry.register(PostId::new(2), second);
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.contains(PostId::new(1)));
    }

    #[test]
    fn register_overwrites_a_stale_binding() {
        let mut page = Page::new();
        let old = page.create(Tag::Button);
        let new = page.create(Tag::Button);

        let mut registry = ListenerRegistry::new();
        registry.register(PostId::new(7), old);
        registry.register(PostId::new(7), new);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.button(PostId::new(7)), Some(new));
    }

    #[test]
    fn post_ids_come_back_in_ascending_order() {
        let mut page = Page::new();
        let a = page.create(Tag::Button);
        let b = page.create(Tag::Button);
        let c = page.create(Tag::Button);

        let mut registry = ListenerRegistry::new();
        registry.register(PostId::new(30), a);
        registry.register(PostId::new(10), b);
        registry.register(PostId::new(20), c);

        let ids: Vec<u64> = registry.post_ids().map(|id| id.as_u64()).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
