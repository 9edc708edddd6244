//! Application use cases / business logic

pub mod accounts;
pub mod analytics;
pub mod classify;
pub mod render;
pub mod reorder;
pub mod save_order;

pub use accounts::AccountLinks;
pub use analytics::AnalyticsTracker;
pub use classify::{ClassifyRule, RULES, classify_link, classify_with_rule};
pub use render::{Avatar, LinkView, ProfileRenderer, ProfileView, RenderConfig};
pub use reorder::{ReorderError, apply_swaps, plan_reorder};
pub use save_order::{SaveOrderConfig, SaveOrderError, SaveOrderReport, SaveOrderUseCase};
