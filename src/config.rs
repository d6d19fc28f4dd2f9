use log::Level;

/// Delay before the hero and nav play their entrance animation.
pub const LOAD_DELAY_MS: u32 = 80;

/// Page content, compiled into the bundle.
pub const CONTENT_JSON: &str = include_str!("../content/portfolio.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
