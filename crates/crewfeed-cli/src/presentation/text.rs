//! Plain-text rendering of the element tree.

use std::fmt;

use owo_colors::OwoColorize;

use crewfeed_page::{NodeId, Page};

/// Indented dump of a page, one element per line.
///
/// Lines look like `<select id="selectMenu">` with text after the closing
/// bracket; children are indented two spaces per level. Colors are off by
/// default so piped output stays clean.
pub struct PageView<'a> {
    page: &'a Page,
    color: bool,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self { page, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: NodeId, depth: usize) -> fmt::Result {
        let page = self.page;

        write!(f, "{}", "  ".repeat(depth))?;
        if self.color {
            write!(f, "<{}", page.tag(node).cyan())?;
        } else {
            write!(f, "<{}", page.tag(node))?;
        }
        if let Some(id) = page.element_id(node) {
            write!(f, " id=\"{}\"", id)?;
        }
        if !page.classes(node).is_empty() {
            write!(f, " class=\"{}\"", page.classes(node).join(" "))?;
        }
        for (key, value) in page.attributes(node) {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        if page.is_disabled(node) {
            write!(f, " disabled")?;
        }
        write!(f, ">")?;
        if !page.text(node).is_empty() {
            write!(f, " {}", page.text(node))?;
        }
        writeln!(f)?;

        for &child in page.children(node) {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &child in self.page.children(self.page.root()) {
            self.write_node(f, child, 0)?;
        }
        Ok(())
    }
}
