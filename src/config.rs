use log::Level;

/// Height of the fixed nav bar. Added to the scroll position when probing
/// for the active section and subtracted when scrolling to one.
pub const NAV_OFFSET_PX: f64 = 100.0;

/// Scroll handling runs at most once per frame-ish interval.
pub const SCROLL_THROTTLE_MS: u32 = 16;

/// Nav switches to its solid background past this point.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 40.0;

pub const OWNER_NAME: &str = "Maya Lindqvist";
pub const CONTACT_EMAIL: &str = "hello@mayalindqvist.design";
pub const SCHEDULING_URL: &str = "https://calendly.com/mayalindqvist/intro";
pub const RESUME_URL: &str = "https://drive.google.com/file/d/1mLindqvistResume/view";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mayalindqvist";
pub const DRIBBBLE_URL: &str = "https://dribbble.com/mayalindqvist";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
