use log::Level;

/// localStorage key holding the JSON array of collected emails.
pub const STORAGE_KEY: &str = "vrolympics_signups";

/// How long the "You're In!" confirmation stays up after a submit.
pub const CONFIRMATION_WINDOW_MS: u32 = 3_000;

/// Fraction of a section that has to be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
