use log::Level;

/// Directory screenshots are served from, relative to the tour pages.
pub const IMAGE_DIR: &str = "assets/images/";

/// Delay before the typing effects start, so the rest of the layout settles first.
pub const TYPE_IN_START_DELAY_MS: u32 = 300;
/// Per-character speed the tour pages use.
pub const TYPE_IN_SPEED_MS: u32 = 20;
pub const DEFAULT_TYPE_IN_SPEED_MS: u32 = 25;

pub const WORKFLOW_START_DELAY_MS: u32 = 500;
pub const DEFAULT_WORKFLOW_STEP_MS: u32 = 800;

pub const CONFIDENCE_METER_DELAY_MS: u32 = 600;
pub const BAR_CHART_DELAY_MS: u32 = 400;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
