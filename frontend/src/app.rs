use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{
    Clipboard, Element, Event, FormData, HtmlFormElement, HtmlInputElement, MouseEvent, PopStateEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::blog::filter::CategoryFilter;
use crate::blog::share::{self, Capabilities, ShareBackend, ShareError, ShareRequest};
use crate::components::notification::{self, notify};
use crate::dom;
use crate::forms::contact::{self, FormRecord};
use crate::forms::newsletter;
use crate::forms::validation::FieldKind;
use crate::markup;
use crate::navigation::menu::MobileMenu;
use crate::navigation::router::{self, HistoryState, Navigator, PageSurface, PageView};
use crate::render::{self, DomPages};

/// Page-lifetime state shared by every handler.
pub struct Site {
    navigator: RefCell<Navigator>,
    pages: RefCell<DomPages>,
    menu: RefCell<MobileMenu>,
    filter: RefCell<CategoryFilter>,
    category_buttons: Vec<Element>,
}

impl Site {
    fn new() -> Self {
        let pages = DomPages::collect();
        let navigator = Navigator::new(pages.section_ids());
        Self {
            navigator: RefCell::new(navigator),
            pages: RefCell::new(pages),
            menu: RefCell::new(MobileMenu::new()),
            filter: RefCell::new(CategoryFilter::new()),
            category_buttons: dom::query_all(markup::CATEGORY_BUTTON),
        }
    }

    pub fn current_page(&self) -> String {
        self.navigator.borrow().current_page().to_string()
    }

    fn apply_view(&self, view: &PageView) {
        router::apply(view, &mut *self.pages.borrow_mut());
        if view.close_menu {
            self.close_menu();
        }
    }

    pub fn navigate_to_page(&self, page: &str) {
        let view = self.navigator.borrow_mut().navigate(page);
        if let Some(view) = view {
            self.apply_view(&view);
        }
    }

    fn handle_navigation(&self, event: &MouseEvent) {
        event.prevent_default();
        let page = dom::event_element(event).and_then(|el| el.get_attribute(markup::PAGE_ATTR));
        match page {
            Some(page) => self.navigate_to_page(&page),
            None => debug!("Navigation trigger without a {} attribute", markup::PAGE_ATTR),
        }
    }

    fn handle_popstate(&self, event: &PopStateEvent) {
        let state = event.state();
        if state.is_null() || state.is_undefined() {
            debug!("popstate without a page payload");
            return;
        }
        let Ok(HistoryState { page }) = serde_wasm_bindgen::from_value::<HistoryState>(state) else {
            debug!("popstate payload is not a page entry");
            return;
        };
        let view = self.navigator.borrow_mut().restore(&page);
        if let Some(view) = view {
            self.apply_view(&view);
        }
    }

    fn handle_initial_load(&self) {
        let hash = dom::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let view = self.navigator.borrow_mut().initial(hash.trim_start_matches('#'));
        self.apply_view(&view);
    }

    fn toggle_menu(&self) {
        let styles = self.menu.borrow_mut().toggle();
        render::apply_menu_styles(&styles);
    }

    fn close_menu(&self) {
        let styles = self.menu.borrow_mut().close();
        render::apply_menu_styles(&styles);
    }

    fn handle_resize(&self) {
        let width = dom::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64());
        let Some(width) = width else {
            return;
        };
        let styles = self.menu.borrow_mut().on_resize(width);
        if let Some(styles) = styles {
            render::apply_menu_styles(&styles);
        }
    }

    fn handle_document_click(&self, event: &Event) {
        if !self.menu.borrow().is_open() {
            return;
        }
        let inside = dom::target_element(event).map_or(false, |target| {
            dom::closest(&target, markup::NAV_REGION).is_some()
                || dom::closest(&target, markup::MENU_TOGGLE).is_some()
        });
        let styles = self.menu.borrow_mut().on_document_click(inside);
        if let Some(styles) = styles {
            render::apply_menu_styles(&styles);
        }
    }

    fn handle_form_submit(&self, event: &Event, form: &HtmlFormElement) {
        event.prevent_default();
        let record = read_form(form);
        let outcome = contact::submit(&record);
        notify(outcome.notice);
        if outcome.reset_form {
            form.reset();
            debug!(
                "Form submitted: {}",
                serde_json::to_string(&record).unwrap_or_default()
            );
        }
    }

    pub fn handle_newsletter_subscription(&self, event: &Event) {
        event.prevent_default();
        let input = dom::event_element(event)
            .or_else(|| dom::target_element(event))
            .and_then(|el| dom::closest(&el, markup::NEWSLETTER_FORM))
            .and_then(|form| form.query_selector(markup::NEWSLETTER_INPUT).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let Some(input) = input else {
            debug!("Newsletter button outside a newsletter form");
            return;
        };

        let outcome = newsletter::handle(&input.value());
        notify(outcome.notice);
        if outcome.clear_input {
            input.set_value("");
        }
        if let Some(email) = outcome.email {
            info!("Newsletter subscription: {}", email);
        }
    }

    pub fn handle_category_filter(&self, event: &Event) {
        event.prevent_default();
        let Some(button) = dom::event_element(event).or_else(|| dom::target_element(event)) else {
            return;
        };
        let Some(index) = self.category_buttons.iter().position(|b| *b == button) else {
            debug!("Category click from an unknown button");
            return;
        };
        let category = button.get_attribute(markup::CATEGORY_ATTR);
        let view = self.filter.borrow_mut().select(index, category.as_deref());
        render::apply_filter_view(&self.category_buttons, &self.filter.borrow(), &view);
        notify(view.notice);
    }

    fn handle_social_share(&self, event: &Event) {
        event.prevent_default();
        let title = dom::event_element(event)
            .and_then(|el| dom::closest(&el, markup::BLOG_POST))
            .and_then(|post| post.query_selector(markup::BLOG_POST_TITLE).ok().flatten())
            .and_then(|title| title.text_content());
        let Some(title) = title else {
            debug!("Share button outside a blog post");
            return;
        };
        let url = dom::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let request = ShareRequest::for_post(&title, &url);

        spawn_local(async move {
            if let Some(notice) = share::share(&BrowserShare, &request).await {
                notify(notice);
            }
        });
    }
}

fn read_form(form: &HtmlFormElement) -> FormRecord {
    let Ok(data) = FormData::new_with_form(form) else {
        return FormRecord::new();
    };
    let Ok(Some(entries)) = web_sys::js_sys::try_iter(&data) else {
        return FormRecord::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = entry.dyn_into::<web_sys::js_sys::Array>().ok()?;
            // File inputs yield Blob values; only text fields are kept.
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// `navigator.share` and `navigator.clipboard`, probed at call time.
struct BrowserShare;

impl BrowserShare {
    fn navigator_member(name: &str) -> Option<(web_sys::Navigator, wasm_bindgen::JsValue)> {
        let navigator = dom::window()?.navigator();
        let member = Reflect::get(&navigator, &name.into()).ok()?;
        (!member.is_undefined() && !member.is_null()).then_some((navigator, member))
    }
}

impl ShareBackend for BrowserShare {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            native_share: Self::navigator_member("share").is_some(),
            clipboard: Self::navigator_member("clipboard").is_some(),
        }
    }

    async fn native_share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        let rejected = |e: wasm_bindgen::JsValue| ShareError::Rejected(format!("{:?}", e));
        let (navigator, share) = Self::navigator_member("share")
            .ok_or_else(|| ShareError::Rejected("navigator.share missing".into()))?;
        let share = share.dyn_into::<Function>().map_err(rejected)?;
        let data = serde_wasm_bindgen::to_value(request)
            .map_err(|e| ShareError::Rejected(e.to_string()))?;
        let promise = share.call1(&navigator, &data).map_err(rejected)?;
        let promise = promise.dyn_into::<Promise>().map_err(rejected)?;
        JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
    }

    async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
        let failed = |e: wasm_bindgen::JsValue| ShareError::Clipboard(format!("{:?}", e));
        let (_, clipboard) = Self::navigator_member("clipboard")
            .ok_or_else(|| ShareError::Clipboard("navigator.clipboard missing".into()))?;
        let clipboard = clipboard.dyn_into::<Clipboard>().map_err(failed)?;
        JsFuture::from(clipboard.write_text(text)).await.map(|_| ()).map_err(failed)
    }
}

fn scroll_to_anchor(anchor: &Element, event: &Event) {
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    if href == "#" {
        return;
    }
    event.prevent_default();
    // An href that isn't a valid selector just finds nothing.
    if let Some(target) = dom::query(&href) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn setup_event_listeners(site: &Rc<Site>) {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    for selector in markup::NAVIGATION_TRIGGERS {
        for trigger in dom::query_all(selector) {
            let site = site.clone();
            dom::listen(&trigger, "click", move |e: MouseEvent| site.handle_navigation(&e));
        }
    }

    for button in &site.category_buttons {
        let site = site.clone();
        dom::listen(button, "click", move |e: Event| site.handle_category_filter(&e));
    }

    for button in dom::query_all(markup::NEWSLETTER_BUTTONS) {
        let site = site.clone();
        dom::listen(&button, "click", move |e: Event| site.handle_newsletter_subscription(&e));
    }

    for button in dom::query_all(markup::SHARE_BUTTON) {
        let site = site.clone();
        dom::listen(&button, "click", move |e: Event| site.handle_social_share(&e));
    }

    if let Some(toggle) = dom::query(markup::MENU_TOGGLE) {
        let site = site.clone();
        dom::listen(&toggle, "click", move |_: MouseEvent| site.toggle_menu());
    }

    {
        let site = site.clone();
        dom::listen(&document, "click", move |e: Event| site.handle_document_click(&e));
    }
    {
        let site = site.clone();
        dom::listen(&window, "resize", move |_: Event| site.handle_resize());
    }
    {
        let site = site.clone();
        dom::listen(&window, "popstate", move |e: PopStateEvent| site.handle_popstate(&e));
    }

    // Page triggers carry data-page and are routed above instead.
    for anchor in dom::query_all(markup::IN_PAGE_ANCHOR) {
        if anchor.has_attribute(markup::PAGE_ATTR) {
            continue;
        }
        let target = anchor.clone();
        dom::listen(&anchor, "click", move |e: Event| scroll_to_anchor(&target, &e));
    }
}

fn setup_form_handling(site: &Rc<Site>) {
    if let Some(form) = dom::query(markup::CONTACT_FORM).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
        let site = site.clone();
        let submitted = form.clone();
        dom::listen(&form, "submit", move |e: Event| site.handle_form_submit(&e, &submitted));
    }

    for (selector, kind) in [(markup::EMAIL_INPUT, FieldKind::Email), (markup::PHONE_INPUT, FieldKind::Phone)] {
        for input in dom::query_all(selector) {
            let Ok(field) = input.clone().dyn_into::<HtmlInputElement>() else {
                continue;
            };
            {
                let field = field.clone();
                dom::listen(&input, "blur", move |_: Event| {
                    if let Some(message) = kind.check(&field.value()) {
                        render::show_input_error(&field, message);
                    }
                });
            }
            dom::listen(&input, "input", move |_: Event| render::clear_input_error(&field));
        }
    }
}

/// Wires the page: notification host, every handler, the initial hash, and animations.
pub fn start() -> Option<Rc<Site>> {
    let document = dom::document()?;
    let host = document.create_element("div").ok()?;
    host.set_id(markup::NOTIFICATION_ROOT_ID);
    document.body()?.append_child(&host).ok()?;
    notification::mount(host);

    let site = Rc::new(Site::new());
    setup_event_listeners(&site);
    setup_form_handling(&site);
    site.pages.borrow_mut().mark_active_link(&site.current_page());
    site.handle_initial_load();
    render::setup_scroll_reveal();
    render::setup_hover_effects();
    crate::api::expose(&site);

    info!("Maxcare Hospital website initialized");
    Some(site)
}
