//! Application-wide constants and configuration values

// Batch limits
pub const MAX_REQUESTS_LIMIT: usize = 100_000;

// Channel and buffer constants
pub const CHANNEL_BUFFER_SIZE: usize = 1_024;

// Progress indication
pub const PROGRESS_DOT_INTERVAL_MS: u64 = 500;
pub const DEBUG_LOG_INTERVAL: usize = 100;

// Report precision (decimal places)
pub const MILLIS_PRECISION: u32 = 2;
pub const TIMESTAMP_PRECISION: u32 = 3;

// Console output
pub const REPORT_BANNER_WIDTH: usize = 60;
