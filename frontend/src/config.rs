use log::Level;

pub const SITE_NAME: &str = "Maxcare Hospitals";
pub const DEFAULT_PAGE: &str = "home";

/// Above this viewport width the nav list is always visible.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 10;
pub const NOTIFICATION_DISPLAY_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 250;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
