use log::info;

mod api;
mod app;
mod config;
mod dom;
mod markup;
mod render;

mod components {
    pub mod notification;
}
mod navigation {
    pub mod router;
    pub mod menu;
}
mod forms {
    pub mod validation;
    pub mod contact;
    pub mod newsletter;
}
mod blog {
    pub mod filter;
    pub mod share;
}
mod effects {
    pub mod scroll_reveal;
    pub mod hover;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site scripts", config::SITE_NAME);
    let Some(document) = dom::document() else {
        log::warn!("No document available, page enhancements skipped");
        return;
    };
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web_sys::Event| boot());
    } else {
        boot();
    }
}

fn boot() {
    if app::start().is_none() {
        log::warn!("Page markup incomplete, page enhancements skipped");
    }
}
