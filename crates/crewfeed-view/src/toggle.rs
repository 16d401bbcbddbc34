//! The comment toggle protocol.
//!
//! Each post renders a button and a sibling section joined by a
//! `data-post-id` attribute value. A click flips both in one synchronous
//! step: the section's `hide` class and the button's label. Nothing can
//! observe the pair mid-flip, so label and visibility stay in lockstep as
//! long as both halves exist.

use crewfeed_page::{NodeId, Page, Tag};
use crewfeed_types::PostId;

use crate::build::HIDE_CLASS;

/// Attribute joining a post's button and comment section.
pub const POST_ID_ATTR: &str = "data-post-id";
/// Button label while the section is hidden.
pub const SHOW_COMMENTS: &str = "Show Comments";
/// Button label while the section is revealed.
pub const HIDE_COMMENTS: &str = "Hide Comments";

/// What one click actually touched.
///
/// A missing half is reported as `None` for that half; the other half is
/// still applied. Both `None` means the post id matched nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub section: Option<NodeId>,
    pub button: Option<NodeId>,
}

impl ToggleOutcome {
    /// Both halves were found and flipped.
    pub fn complete(&self) -> bool {
        self.section.is_some() && self.button.is_some()
    }
}

/// Flip the comment section's visibility for one post.
pub fn toggle_section(page: &mut Page, post: PostId) -> Option<NodeId> {
    let section = page.find_by_attribute(Tag::Section, POST_ID_ATTR, &post.to_string())?;
    page.toggle_class(section, HIDE_CLASS);
    Some(section)
}

/// Swap the toggle button's label for one post.
pub fn toggle_button(page: &mut Page, post: PostId) -> Option<NodeId> {
    let button = page.find_by_attribute(Tag::Button, POST_ID_ATTR, &post.to_string())?;
    let next = if page.text(button) == SHOW_COMMENTS {
        HIDE_COMMENTS
    } else {
        SHOW_COMMENTS
    };
    page.set_text(button, next);
    Some(button)
}

/// Apply one click: both halves, one step.
pub fn toggle(page: &mut Page, post: PostId) -> ToggleOutcome {
    ToggleOutcome {
        section: toggle_section(page, post),
        button: toggle_button(page, post),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::COMMENTS_CLASS;

    fn page_with_pair(post: PostId) -> (Page, NodeId, NodeId) {
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);

        let button = page.create(Tag::Button);
        page.set_text(button, SHOW_COMMENTS);
        page.set_attribute(button, POST_ID_ATTR, post.to_string());
        page.append_child(main, button);

        let section = page.create(Tag::Section);
        page.add_class(section, COMMENTS_CLASS);
        page.add_class(section, HIDE_CLASS);
        page.set_attribute(section, POST_ID_ATTR, post.to_string());
        page.append_child(main, section);

        (page, button, section)
    }

    #[test]
    fn click_flips_both_facets_together() {
        let post = PostId::new(5);
        let (mut page, button, section) = page_with_pair(post);

        let outcome = toggle(&mut page, post);
        assert_eq!(outcome.section, Some(section));
        assert_eq!(outcome.button, Some(button));
        assert!(!page.has_class(section, HIDE_CLASS));
        assert_eq!(page.text(button), HIDE_COMMENTS);
    }

    #[test]
    fn even_click_counts_restore_the_initial_state() {
        let post = PostId::new(5);
        let (mut page, button, section) = page_with_pair(post);

        for _ in 0..4 {
            toggle(&mut page, post);
        }
        assert!(page.has_class(section, HIDE_CLASS));
        assert_eq!(page.text(button), SHOW_COMMENTS);

        toggle(&mut page, post);
        assert!(!page.has_class(section, HIDE_CLASS));
        assert_eq!(page.text(button), HIDE_COMMENTS);
    }

    #[test]
    fn facets_never_disagree_across_many_clicks() {
        let post = PostId::new(9);
        let (mut page, button, section) = page_with_pair(post);

        for _ in 0..7 {
            toggle(&mut page, post);
            let hidden = page.has_class(section, HIDE_CLASS);
            let label = page.text(button);
            assert_eq!(hidden, label == SHOW_COMMENTS);
        }
    }

    #[test]
    fn missing_section_still_flips_the_button() {
        let post = PostId::new(3);
        let mut page = Page::new();
        let main = page.create(Tag::Main);
        page.append_child(page.root(), main);
        let button = page.create(Tag::Button);
        page.set_text(button, SHOW_COMMENTS);
        page.set_attribute(button, POST_ID_ATTR, post.to_string());
        page.append_child(main, button);

        let outcome = toggle(&mut page, post);
        assert_eq!(outcome.section, None);
        assert_eq!(outcome.button, Some(button));
        assert!(!outcome.complete());
        assert_eq!(page.text(button), HIDE_COMMENTS);
    }

    #[test]
    fn unknown_post_id_touches_nothing() {
        let (mut page, button, section) = page_with_pair(PostId::new(5));

        let outcome = toggle(&mut page, PostId::new(99));
        assert_eq!(outcome.section, None);
        assert_eq!(outcome.button, None);
        assert!(page.has_class(section, HIDE_CLASS));
        assert_eq!(page.text(button), SHOW_COMMENTS);
    }
}
