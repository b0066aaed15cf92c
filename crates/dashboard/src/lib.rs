//! Dashboard controller for ImpactEcho.
//!
//! This crate provides:
//! - Dashboard: the controller reacting to page load and user actions
//! - DashboardState: causes, running totals and the recent-donations log
//! - DashboardView / Presenter: seams to whatever UI surface renders the page
//! - CauseBackend: the HTTP collaborator serving causes and logging donations

mod amount;
mod backend;
mod config;
mod controller;
mod diagnostics;
mod presenter;
mod session;
mod state;
mod view;

#[cfg(test)]
mod testing;

pub use amount::parse_amount;
pub use backend::CauseBackend;
#[cfg(feature = "http")]
pub use backend::{HttpBackend, HttpBackendConfig};
pub use config::DashboardConfig;
pub use controller::{Dashboard, FundOutcome, FundReceipt};
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use presenter::{
    CARD_FILL_BASE_DELAY_MS, CARD_FILL_STAGGER_MS, Immediate, NumberTween, OVERALL_FILL_DELAY_MS,
    Presenter, RECENT_EXIT_MS, SUCCESS_FLASH_MS, StatFormat, TWEEN_DURATION_MS, TWEEN_STEPS,
    displayed_value,
};
pub use session::{MemoryStore, SessionStore};
pub use state::{AppliedDonation, DashboardState, RecentDonation, RecentDonations, StatsSnapshot};
pub use view::{
    CauseCard, DashboardView, FundControl, LOAD_FAILURE_MESSAGE, Stat, amount_prompt,
};

use thiserror::Error;

/// Errors from dashboard operations.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Response decoding failed: {0}")]
    Decode(String),

    #[error("Unknown cause: {0}")]
    UnknownCause(u64),
}

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
