//! Browse screen layout: employee pane, post pane, footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crewfeed_page::{NodeId, Page, Tag};
use crewfeed_view::build::HIDE_CLASS;
use crewfeed_view::ViewController;

use crate::handlers::browse::{BrowseApp, Focus};

pub fn draw(f: &mut Frame, controller: &ViewController, app: &mut BrowseApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[0]);

    render_employees(f, panes[0], controller, app);
    render_posts(f, panes[1], controller, app);
    render_footer(f, chunks[1], app);
}

fn render_employees(f: &mut Frame, area: Rect, controller: &ViewController, app: &mut BrowseApp) {
    let title = if controller.page().is_disabled(controller.selector()) {
        " Employees (loading) "
    } else {
        " Employees "
    };

    let items: Vec<ListItem> = controller
        .employees()
        .iter()
        .map(|employee| ListItem::new(Line::from(employee.name.as_str())))
        .collect();

    let list = List::new(items)
        .block(pane_block(title, app.focus == Focus::Employees))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.employee_list);
}

fn render_posts(f: &mut Frame, area: Rect, controller: &ViewController, app: &mut BrowseApp) {
    let page = controller.page();

    let items: Vec<ListItem> = page
        .children(controller.region())
        .iter()
        .map(|&block| region_item(page, block))
        .collect();

    let list = List::new(items)
        .block(pane_block(" Posts ", app.focus == Focus::Posts))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.post_list);
}

fn render_footer(f: &mut Frame, area: Rect, app: &BrowseApp) {
    let footer_text = vec![
        Line::from("Tab: switch pane | Up/Down: move | Enter: load posts / toggle comments | q: quit"),
        Line::from(app.status.as_str()),
    ];

    let footer_widget = Paragraph::new(Text::from(footer_text)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(footer_widget, area);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
}

/// One top-level block of the rendered region as a list item.
///
/// Post articles expand into their headings, paragraphs, button label, and
/// (when revealed) comment lines. The no-posts placeholder paragraph comes
/// through as a single dim line.
fn region_item(page: &Page, block: NodeId) -> ListItem<'_> {
    match page.tag(block) {
        Tag::Article => ListItem::new(Text::from(article_lines(page, block))),
        _ => ListItem::new(Line::from(Span::styled(
            page.text(block),
            Style::default().fg(Color::DarkGray),
        ))),
    }
}

fn article_lines(page: &Page, article: NodeId) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for &child in page.children(article) {
        match page.tag(child) {
            Tag::H2 => lines.push(Line::from(Span::styled(
                page.text(child),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            Tag::Paragraph => lines.push(Line::from(page.text(child))),
            Tag::Button => lines.push(Line::from(Span::styled(
                format!("[ {} ]", page.text(child)),
                Style::default().fg(Color::Cyan),
            ))),
            Tag::Section => {
                if !page.has_class(child, HIDE_CLASS) {
                    lines.extend(comment_lines(page, child));
                }
            }
            _ => {}
        }
    }
    lines.push(Line::from(""));
    lines
}

fn comment_lines(page: &Page, section: NodeId) -> Vec<Line<'_>> {
    let comments = page.children(section);
    if comments.is_empty() {
        return vec![Line::from(Span::styled(
            "  (no comments)",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::new();
    for &comment in comments {
        for &part in page.children(comment) {
            let style = match page.tag(part) {
                Tag::H3 => Style::default().add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", page.text(part)),
                style,
            )));
        }
    }
    lines
}
