//! Application-wide constants.

use std::time::Duration;

// ============================================================================
// Identity & Paths
// ============================================================================

/// Application name used for configuration, cache and log directories.
pub const APP_NAME: &str = "assetdesk";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.json";

/// Log file name.
pub const LOG_FILE: &str = "assetdesk.log";

/// API base used when no configuration exists.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:10007/api/example/";

// ============================================================================
// Timing
// ============================================================================

/// Main loop tick.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How long a toast stays visible, in ticks.
pub const TOAST_TICKS: u8 = 20;

// ============================================================================
// Tests
// ============================================================================
