//! Hash-based switching between the page sections already present in the markup.
//!
//! [`Navigator`] decides; it never touches the document. Each decision is a
//! [`PageView`] that a [`PageSurface`] applies.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE;

/// Payload stored with every history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub page: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    Push,
    Replace,
    Untouched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: String,
    /// False when only history is written and the sections are left as rendered.
    pub reveal: bool,
    pub history: HistoryUpdate,
    pub scroll_to_top: bool,
    pub close_menu: bool,
}

/// Where a [`PageView`] gets applied.
pub trait PageSurface {
    fn show_only(&mut self, page: &str);
    fn mark_active_link(&mut self, page: &str);
    fn push_history(&mut self, state: &HistoryState);
    fn replace_history(&mut self, state: &HistoryState);
    fn scroll_to_top(&mut self);
}

pub fn apply<S: PageSurface + ?Sized>(view: &PageView, surface: &mut S) {
    if view.reveal {
        surface.show_only(&view.page);
        surface.mark_active_link(&view.page);
    }
    let state = HistoryState { page: view.page.clone() };
    match view.history {
        HistoryUpdate::Push => surface.push_history(&state),
        HistoryUpdate::Replace => surface.replace_history(&state),
        HistoryUpdate::Untouched => {}
    }
    if view.scroll_to_top {
        surface.scroll_to_top();
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    sections: Vec<String>,
    current: String,
}

impl Navigator {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            current: DEFAULT_PAGE.to_string(),
        }
    }

    pub fn current_page(&self) -> &str {
        &self.current
    }

    pub fn has_section(&self, page: &str) -> bool {
        self.sections.iter().any(|s| s == page)
    }

    /// User-initiated navigation. Unknown or already-current pages are a no-op.
    pub fn navigate(&mut self, page: &str) -> Option<PageView> {
        if page == self.current {
            return None;
        }
        if !self.has_section(page) {
            debug!("No section named {:?}, staying on {}", page, self.current);
            return None;
        }
        self.current = page.to_string();
        info!("Navigated to: {}", page);
        Some(PageView {
            page: page.to_string(),
            reveal: true,
            history: HistoryUpdate::Push,
            scroll_to_top: true,
            close_menu: true,
        })
    }

    /// Back/forward navigation. History already holds the entry, so nothing is pushed.
    pub fn restore(&mut self, page: &str) -> Option<PageView> {
        if !self.has_section(page) {
            debug!("History entry names unknown section {:?}", page);
            return None;
        }
        self.current = page.to_string();
        Some(PageView {
            page: page.to_string(),
            reveal: true,
            history: HistoryUpdate::Untouched,
            scroll_to_top: false,
            close_menu: false,
        })
    }

    /// Page load. `hash` is the URL fragment without the leading `#`.
    pub fn initial(&mut self, hash: &str) -> PageView {
        if hash != self.current && self.has_section(hash) {
            self.current = hash.to_string();
            info!("Navigated to: {}", hash);
            return PageView {
                page: hash.to_string(),
                reveal: true,
                history: HistoryUpdate::Replace,
                scroll_to_top: true,
                close_menu: false,
            };
        }
        PageView {
            page: self.current.clone(),
            reveal: false,
            history: HistoryUpdate::Replace,
            scroll_to_top: false,
            close_menu: false,
        }
    }
}
