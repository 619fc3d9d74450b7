//! Application constants

pub const APP_NAME: &str = "ASSETI";
pub const FOOTER_TEXT: &str = "© 2025 Asseti - Portfolio Management on Base";

pub const DEFAULT_MOCK_LATENCY_MS: u32 = 800;

/// Decimals shown for the native balance
pub const BALANCE_PRECISION: u32 = 4;

// Chart palette
pub const SERIES_COLORS: [&str; 4] = ["#0052FF", "#00D4FF", "#4CAF50", "#FFC107"];
pub const PRIMARY_COLOR: &str = "#0052FF";
pub const DEPOSIT_COLOR: &str = "#4CAF50";
pub const WITHDRAWAL_COLOR: &str = "#FF5252";
pub const GRID_COLOR: &str = "#2a2d33";
pub const AXIS_LABEL_COLOR: &str = "#9ca3af";
pub const CHART_BACKGROUND: &str = "#141619";
