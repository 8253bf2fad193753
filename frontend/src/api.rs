//! `window.MaxcareHospital`, for calling the handlers from outside the crate.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::js_sys::{Object, Reflect};
use web_sys::Event;

use crate::app::Site;
use crate::components::notification::{self, Severity};
use crate::dom;

pub const NAMESPACE: &str = "MaxcareHospital";

fn set_member(target: &Object, name: &str, value: &JsValue) {
    if Reflect::set(target, &JsValue::from_str(name), value).is_err() {
        debug!("Could not expose {}.{}", NAMESPACE, name);
    }
}

pub fn expose(site: &Rc<Site>) {
    let Some(window) = dom::window() else {
        return;
    };
    let api = Object::new();

    let navigate = {
        let site = site.clone();
        Closure::wrap(Box::new(move |page: String| site.navigate_to_page(&page)) as Box<dyn Fn(String)>)
    };
    set_member(&api, "navigateToPage", navigate.as_ref());
    navigate.forget();

    let show = Closure::wrap(Box::new(|message: String, kind: Option<String>| {
        let severity = kind.as_deref().map_or(Severity::Info, Severity::from_name);
        notification::show(&message, severity);
    }) as Box<dyn Fn(String, Option<String>)>);
    set_member(&api, "showNotification", show.as_ref());
    show.forget();

    let current = {
        let site = site.clone();
        Closure::wrap(Box::new(move || site.current_page()) as Box<dyn Fn() -> String>)
    };
    set_member(&api, "currentPage", current.as_ref());
    current.forget();

    let filter = {
        let site = site.clone();
        Closure::wrap(Box::new(move |e: Event| site.handle_category_filter(&e)) as Box<dyn Fn(Event)>)
    };
    set_member(&api, "handleCategoryFilter", filter.as_ref());
    filter.forget();

    let subscribe = {
        let site = site.clone();
        Closure::wrap(Box::new(move |e: Event| site.handle_newsletter_subscription(&e)) as Box<dyn Fn(Event)>)
    };
    set_member(&api, "handleNewsletterSubscription", subscribe.as_ref());
    subscribe.forget();

    set_member(&window, NAMESPACE, &api);
}
