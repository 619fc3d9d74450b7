//! UI Components

pub mod banner;
pub mod charts;
pub mod error_boundary;
pub mod layout;
pub mod loading;
pub mod navbar;
pub mod stat_card;

pub use banner::{ErrorBanner, NetworkNotice, RetryBanner};
pub use charts::{BarChart, BarSeries, ChartLegend, LineChart, PieChart};
pub use error_boundary::AppErrorBoundary;
pub use layout::Layout;
pub use loading::{CardSkeleton, Loading};
pub use navbar::Navbar;
pub use stat_card::StatCard;
