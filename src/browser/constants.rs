//! Constants for the catalog browser
//!
//! Timing, layout and service defaults live here so the state machine and
//! the widgets agree on them.

// Catalog behavior
/// Items per grid page
pub const PAGE_SIZE: usize = 50;

/// Quiet period before a typed query is evaluated
pub const SEARCH_DEBOUNCE_MS: u64 = 200;

/// Queries shorter than this (after trimming) reset the search
pub const MIN_QUERY_CHARS: usize = 2;

/// Rows shown in the suggestion dropdown
pub const MAX_SUGGESTIONS: usize = 8;

// Service defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Width of one grid cell including its border
pub const GRID_CELL_WIDTH: u16 = 30;

/// Height of one grid cell including its border
pub const GRID_CELL_HEIGHT: u16 = 5;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
