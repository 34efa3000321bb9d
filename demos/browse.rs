//! Browse Demo - drive a sample page from the terminal.
//!
//! Builds the engine's view of a small marketing page and maps terminal
//! keys onto the page event stream:
//!
//! - Up/Down: scroll by a line
//! - PageUp/PageDown: scroll by a viewport
//! - m: click the hamburger (toggle the mobile menu)
//! - 1/2/3: click a nav link (home/about/contact)
//! - Tab: keyboard-navigation mode (any other key leaves it via mousedown)
//! - q: quit
//!
//! Run with: cargo run --example browse

use std::io;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use scrollkit::{
    ClassSet, Document, Event, Key, Node, NodeKind, Page, Rect, Viewport, BODY, HAMBURGER_ID,
    HEADER_ID, NAV_MENU_ID,
};

const LINE_SCROLL: i32 = 40;
const PAGE_SCROLL: i32 = 700;
const PAGE_BOTTOM: i32 = 2400;

fn sample_page() -> io::Result<Page> {
    let mut doc = Document::new();

    doc.insert(
        Node::new(NodeKind::Header)
            .with_id(HEADER_ID)
            .with_rect(Rect::new(0, 0, 1280, 80))
            .with_parent(BODY),
    );
    doc.insert(
        Node::new(NodeKind::Hamburger)
            .with_id(HAMBURGER_ID)
            .with_parent(BODY),
    );
    let nav_menu = doc.insert(
        Node::new(NodeKind::NavMenu)
            .with_id(NAV_MENU_ID)
            .with_parent(BODY),
    );
    for href in ["#home", "#about", "#contact"] {
        doc.insert(
            Node::new(NodeKind::NavLink)
                .with_href(href)
                .with_parent(nav_menu),
        );
    }

    let sections = [("home", 0, 800), ("about", 800, 800), ("contact", 1600, 800)];
    for (id, top, height) in sections {
        doc.insert(
            Node::new(NodeKind::Section)
                .with_id(id)
                .with_rect(Rect::new(0, top, 1280, height))
                .with_parent(BODY),
        );
        // One reveal card per section, a bit below the section top.
        doc.insert(
            Node::new(NodeKind::Block)
                .with_classes(ClassSet::REVEAL)
                .with_rect(Rect::new(0, top + 300, 600, 200))
                .with_parent(BODY),
        );
    }

    Page::new(doc, Viewport::new(1280, 800)).map_err(io::Error::other)
}

fn status(page: &Page) -> String {
    let doc = page.document();
    let revealable = doc.nodes_with_class(ClassSet::REVEAL);
    let revealed = revealable
        .iter()
        .filter(|&&index| doc.has_class(index, ClassSet::ACTIVE))
        .count();
    let active_link = doc
        .nodes_of_kind(NodeKind::NavLink)
        .into_iter()
        .find(|&index| doc.has_class(index, ClassSet::ACTIVE))
        .and_then(|index| doc.node(index).and_then(|node| node.href.clone()))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "scroll {:>4}  header {}  menu {}  kbd {}  link {:<8}  revealed {}/{}",
        page.viewport().scroll_y,
        if doc.has_class(doc.get_index(HEADER_ID).unwrap_or(BODY), ClassSet::SCROLLED) {
            "sticky"
        } else {
            "top   "
        },
        if doc.body_scroll_locked() { "open  " } else { "closed" },
        if doc.has_class(BODY, ClassSet::KEYBOARD_NAV) { "on " } else { "off" },
        active_link,
        revealed,
        revealable.len(),
    )
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrollkit=debug".into()),
        )
        .init();

    let mut page = sample_page()?;
    page.handle_event(Event::Load);

    let nav_links = page.document().nodes_of_kind(NodeKind::NavLink);
    let hamburger = page
        .document()
        .get_index(HAMBURGER_ID)
        .ok_or_else(|| io::Error::other("hamburger vanished"))?;

    enable_raw_mode()?;
    print!("browse: arrows scroll, m menu, 1-3 nav, Tab kbd, q quit\r\n");
    print!("{}\r\n", status(&page));

    loop {
        let TermEvent::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let scroll_y = page.viewport().scroll_y;
        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Up => page.handle_event(Event::Scroll {
                scroll_y: (scroll_y - LINE_SCROLL).max(0),
            }),
            KeyCode::Down => page.handle_event(Event::Scroll {
                scroll_y: (scroll_y + LINE_SCROLL).min(PAGE_BOTTOM),
            }),
            KeyCode::PageUp => page.handle_event(Event::Scroll {
                scroll_y: (scroll_y - PAGE_SCROLL).max(0),
            }),
            KeyCode::PageDown => page.handle_event(Event::Scroll {
                scroll_y: (scroll_y + PAGE_SCROLL).min(PAGE_BOTTOM),
            }),
            KeyCode::Char('m') => page.handle_event(Event::Click { target: hamburger }),
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                if let Some(&link) = nav_links.get(index) {
                    page.handle_event(Event::Click { target: link });
                }
            }
            KeyCode::Tab => page.handle_event(Event::KeyDown { key: Key::Tab }),
            _ => page.handle_event(Event::MouseDown),
        }

        print!("{}\r\n", status(&page));
    }

    disable_raw_mode()?;
    Ok(())
}
