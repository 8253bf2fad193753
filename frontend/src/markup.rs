//! Selectors and class names the pre-rendered page markup is expected to carry.

pub const PAGE_SECTION: &str = ".page-content";
pub const NAV_LINK: &str = ".nav-link";
pub const NAV_REGION: &str = ".nav";
pub const NAV_LIST: &str = ".nav-list";
pub const MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const ACTIVE_CLASS: &str = "active";
pub const PAGE_ATTR: &str = "data-page";
pub const CATEGORY_ATTR: &str = "data-category";

/// Every control that switches the visible page section.
pub const NAVIGATION_TRIGGERS: &[&str] = &[
    ".nav-link",
    ".footer-links a[data-page]",
    ".hero-buttons .btn[data-page]",
    ".blog-link[data-page]",
    ".doctor-card .btn[data-page]",
    ".btn-appointment, .btn-profile, .btn-read-more, .btn-read-featured",
];

pub const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";

pub const CONTACT_FORM: &str = ".contact-form";

pub const NEWSLETTER_BUTTONS: &str = ".newsletter-subscribe-btn, .newsletter-btn";
pub const NEWSLETTER_FORM: &str = ".newsletter-form, .newsletter-form-blog";
pub const NEWSLETTER_INPUT: &str =
    "input[type=\"email\"], .newsletter-email-input, .newsletter-input";

pub const CATEGORY_BUTTON: &str = ".category-btn";
pub const BLOG_POST: &str = ".blog-post-professional";
pub const BLOG_POST_TITLE: &str = ".blog-post-title";
pub const SHARE_BUTTON: &str = ".share-btn";

pub const EMAIL_INPUT: &str = "input[type=\"email\"]";
pub const PHONE_INPUT: &str = "input[type=\"tel\"]";
pub const INPUT_ERROR_CLASS: &str = "input-error";

pub const NOTIFICATION_ROOT_ID: &str = "notification-root";
