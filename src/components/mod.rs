//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert_card;
pub mod chart;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use alert_card::AlertCard;
pub use chart::{BarChart, PieChart, SeriesPoint, TrendChart};
pub use loading::{CardSkeleton, ListSkeleton};
pub use nav::Navbar;
pub use stat_card::{StatCard, StatTone};
pub use toast::Toast;
