//! Applies decided views to the live document.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::blog::filter::{CategoryFilter, FilterView, PostVisibility};
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;
use crate::effects::hover::LIFTS;
use crate::effects::scroll_reveal::{RevealGroup, CARD_GROUP, PROFESSIONAL_GROUP, REVEALED};
use crate::markup;
use crate::navigation::menu::MenuStyles;
use crate::navigation::router::{HistoryState, PageSurface};

/// The `.page-content` sections and nav links of the real document.
pub struct DomPages {
    sections: Vec<Element>,
    nav_links: Vec<Element>,
}

impl DomPages {
    pub fn collect() -> Self {
        Self {
            sections: dom::query_all(markup::PAGE_SECTION),
            nav_links: dom::query_all(markup::NAV_LINK),
        }
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(Element::id).filter(|id| !id.is_empty()).collect()
    }

    fn write_history(state: &HistoryState, replace: bool) {
        let Some(history) = dom::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let payload = match serde_wasm_bindgen::to_value(state) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Could not encode history state: {}", e);
                return;
            }
        };
        let url = format!("#{}", state.page);
        let _ = if replace {
            history.replace_state_with_url(&payload, "", Some(&url))
        } else {
            history.push_state_with_url(&payload, "", Some(&url))
        };
    }
}

impl PageSurface for DomPages {
    fn show_only(&mut self, page: &str) {
        for section in &self.sections {
            let _ = section.class_list().toggle_with_force(markup::ACTIVE_CLASS, section.id() == page);
        }
    }

    fn mark_active_link(&mut self, page: &str) {
        mark_active_links(&self.nav_links, page);
    }

    fn push_history(&mut self, state: &HistoryState) {
        Self::write_history(state, false);
    }

    fn replace_history(&mut self, state: &HistoryState) {
        Self::write_history(state, true);
    }

    fn scroll_to_top(&mut self) {
        if let Some(window) = dom::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

pub fn mark_active_links(links: &[Element], page: &str) {
    for link in links {
        let is_current = link.get_attribute(markup::PAGE_ATTR).as_deref() == Some(page);
        let _ = link.class_list().toggle_with_force(markup::ACTIVE_CLASS, is_current);
    }
}

pub fn apply_menu_styles(styles: &MenuStyles) {
    match dom::query(markup::NAV_LIST) {
        Some(nav_list) => dom::set_styles(&nav_list, styles.nav_list.iter().copied()),
        None => debug!("No nav list to restyle"),
    }
    if let Some(toggle) = dom::query(markup::MENU_TOGGLE) {
        let bars = dom::query_within(&toggle, "span");
        for (bar, style) in bars.iter().zip(styles.bars.iter().copied()) {
            dom::set_styles(bar, [style]);
        }
    }
}

pub fn apply_filter_view(buttons: &[Element], filter: &CategoryFilter, view: &FilterView) {
    for (index, button) in buttons.iter().enumerate() {
        let _ = button.class_list().toggle_with_force(markup::ACTIVE_CLASS, filter.is_active(index));
    }
    match view.posts {
        PostVisibility::All => {
            for post in dom::query_all(markup::BLOG_POST) {
                dom::set_styles(&post, [("display", "block")]);
            }
        }
    }
}

pub fn show_input_error(input: &Element, message: &str) {
    dom::set_styles(input, [("border-color", "var(--color-error)")]);
    let (Some(parent), Some(document)) = (input.parent_element(), dom::document()) else {
        return;
    };
    remove_input_error(&parent);
    let Ok(error) = document.create_element("div") else {
        return;
    };
    error.set_class_name(markup::INPUT_ERROR_CLASS);
    error.set_text_content(Some(message));
    dom::set_styles(
        &error,
        [
            ("color", "var(--color-error)"),
            ("font-size", "var(--font-size-xs)"),
            ("margin-top", "var(--space-4)"),
        ],
    );
    let _ = parent.append_child(&error);
}

pub fn clear_input_error(input: &Element) {
    dom::set_styles(input, [("border-color", "")]);
    if let Some(parent) = input.parent_element() {
        remove_input_error(&parent);
    }
}

fn remove_input_error(parent: &Element) {
    if let Ok(Some(existing)) = parent.query_selector(&format!(".{}", markup::INPUT_ERROR_CLASS)) {
        existing.remove();
    }
}

fn sibling_index(el: &Element) -> usize {
    let Some(parent) = el.parent_element() else {
        return 0;
    };
    let children = parent.children();
    (0..children.length())
        .position(|i| children.item(i).as_ref() == Some(el))
        .unwrap_or(0)
}

fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn observe_group(group: RevealGroup) {
    let elements = dom::query_all(&group.selector());
    if elements.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            dom::set_styles(&target, REVEALED);
            let classes = class_names(&target);
            if let Some(delay) = group.stagger_delay(classes.iter().map(String::as_str), sibling_index(&target)) {
                dom::set_styles(&target, [("transition-delay", delay)]);
            }
            // Revealed once; scrolling away never hides it again.
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            debug!("IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();

    for el in &elements {
        dom::set_styles(el, group.hidden_styles().iter().map(|(p, v)| (*p, v.as_str())));
        observer.observe(el);
    }
}

pub fn setup_scroll_reveal() {
    observe_group(CARD_GROUP);
    observe_group(PROFESSIONAL_GROUP);
}

pub fn setup_hover_effects() {
    for lift in LIFTS {
        for el in dom::query_all(lift.selector) {
            let Some(target) = el.dyn_ref::<HtmlElement>() else {
                continue;
            };
            let hovered = el.clone();
            dom::listen(target, "mouseenter", move |_: web_sys::Event| {
                dom::set_styles(&hovered, lift.enter_styles());
            });
            let left = el.clone();
            dom::listen(target, "mouseleave", move |_: web_sys::Event| {
                dom::set_styles(&left, lift.leave_styles());
            });
        }
    }
}
