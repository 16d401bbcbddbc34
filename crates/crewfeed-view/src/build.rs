//! Element builders.
//!
//! Each builder allocates into the caller's [`Page`] and returns the new
//! node. Builders taking a collection accept `Option`: `None` (upstream
//! fetch failed or id was missing) propagates as `None`, an empty collection
//! still builds its (empty) container. The distinction matters to the
//! controller, which renders a placeholder for `None`.

use crewfeed_api::FeedSource;
use crewfeed_types::{Comment, Employee, Post};
use crewfeed_page::{NodeId, Page, Tag};

use crate::fetch;
use crate::toggle::{POST_ID_ATTR, SHOW_COMMENTS};

/// Class marking a comment section.
pub const COMMENTS_CLASS: &str = "comments";
/// Class hiding an element from the rendered output.
pub const HIDE_CLASS: &str = "hide";
/// Class for the no-selection placeholder paragraph.
pub const DEFAULT_TEXT_CLASS: &str = "default-text";
/// Placeholder shown when there are no posts to display.
pub const NO_SELECTION_TEXT: &str = "Select an Employee to display their posts.";

/// Allocate one element with text and an optional class.
pub fn labeled_element(page: &mut Page, tag: Tag, text: &str, class: Option<&str>) -> NodeId {
    let id = page.create(tag);
    page.set_text(id, text);
    if let Some(class) = class {
        page.add_class(id, class);
    }
    id
}

/// One `option` per employee, value = id, label = name, input order kept.
pub fn option_list(page: &mut Page, employees: Option<&[Employee]>) -> Option<NodeId> {
    let employees = employees?;
    let fragment = page.create(Tag::Fragment);
    for employee in employees {
        let option = page.create(Tag::Option);
        page.set_attribute(option, "value", employee.id.to_string());
        page.set_text(option, &employee.name);
        page.append_child(fragment, option);
    }
    Some(fragment)
}

/// One `article` per comment: author heading, body, "From:" line.
pub fn comment_fragment(page: &mut Page, comments: Option<&[Comment]>) -> Option<NodeId> {
    let comments = comments?;
    let fragment = page.create(Tag::Fragment);
    for comment in comments {
        let article = page.create(Tag::Article);
        let heading = labeled_element(page, Tag::H3, &comment.name, None);
        let body = labeled_element(page, Tag::Paragraph, &comment.body, None);
        let from = labeled_element(page, Tag::Paragraph, &format!("From: {}", comment.email), None);
        page.append_child(article, heading);
        page.append_child(article, body);
        page.append_child(article, from);
        page.append_child(fragment, article);
    }
    Some(fragment)
}

/// The collapsed comment section for one post.
///
/// Comments are fetched now, shown later via the toggle. A failed fetch
/// leaves the section empty; the section itself always exists so the toggle
/// has something to reveal.
pub async fn comment_section(page: &mut Page, source: &dyn FeedSource, post: &Post) -> NodeId {
    let section = page.create(Tag::Section);
    page.set_attribute(section, POST_ID_ATTR, post.id.to_string());
    page.add_class(section, COMMENTS_CLASS);
    page.add_class(section, HIDE_CLASS);

    let comments = fetch::comments_for_post(source, Some(post.id)).await;
    if let Some(fragment) = comment_fragment(page, comments.as_deref()) {
        page.append_child(section, fragment);
    }
    section
}

/// One full `article` per post, in input order.
///
/// The author profile is fetched before the block is built and the comment
/// section after the button, one request at a time. A failed author or
/// comment fetch costs that post its author lines or its comment content,
/// nothing more; sibling posts are unaffected.
pub async fn post_fragment(
    page: &mut Page,
    source: &dyn FeedSource,
    posts: Option<&[Post]>,
) -> Option<NodeId> {
    let posts = posts?;
    let fragment = page.create(Tag::Fragment);
    for post in posts {
        let article = page.create(Tag::Article);
        let title = labeled_element(page, Tag::H2, &post.title, None);
        let body = labeled_element(page, Tag::Paragraph, &post.body, None);
        let id_line = labeled_element(page, Tag::Paragraph, &format!("Post ID: {}", post.id), None);
        page.append_child(article, title);
        page.append_child(article, body);
        page.append_child(article, id_line);

        if let Some(author) = fetch::employee_profile(source, Some(post.employee_id)).await {
            let byline = labeled_element(
                page,
                Tag::Paragraph,
                &format!("Author: {} with {}", author.name, author.company.name),
                None,
            );
            let catch_phrase =
                labeled_element(page, Tag::Paragraph, &author.company.catch_phrase, None);
            page.append_child(article, byline);
            page.append_child(article, catch_phrase);
        }

        let button = labeled_element(page, Tag::Button, SHOW_COMMENTS, None);
        page.set_attribute(button, POST_ID_ATTR, post.id.to_string());
        page.append_child(article, button);

        let section = comment_section(page, source, post).await;
        page.append_child(article, section);

        page.append_child(fragment, article);
    }
    Some(fragment)
}
