//! The dashboard controller.

use std::cell::RefCell;

use impact_types::{
    Cause, DonationLog, LOGOUT_PATH, User, WALLET_ADDRESS_KEY, recent_donation_line,
};

use crate::amount::parse_amount;
use crate::backend::CauseBackend;
use crate::config::DashboardConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::presenter::{Immediate, Presenter, StatFormat};
use crate::session::SessionStore;
use crate::state::{DashboardState, StatsSnapshot};
use crate::view::{CauseCard, DashboardView, FundControl, LOAD_FAILURE_MESSAGE, Stat};
use crate::{DashboardError, Result};

/// A donation that went through.
#[derive(Debug, Clone, PartialEq)]
pub struct FundReceipt {
    pub cause_id: u64,
    pub cause_title: String,
    pub amount: f64,
    pub lives: u64,
    /// Whether the backend accepted the log entry
    pub logged: bool,
}

/// Result of a fund action.
#[derive(Debug, Clone, PartialEq)]
pub enum FundOutcome {
    /// The prompt was dismissed or the amount was not a positive number
    Cancelled,
    Funded(FundReceipt),
}

/// Controller for one dashboard page.
///
/// State lives in a `RefCell` and no borrow is held across an `.await`, so
/// fund actions on different causes may interleave freely on a
/// single-threaded executor.
pub struct Dashboard<B, V, S, P = Immediate, D = TracingSink> {
    config: DashboardConfig,
    backend: B,
    view: V,
    store: S,
    presenter: P,
    diagnostics: D,
    state: RefCell<DashboardState>,
    user: RefCell<User>,
}

impl<B, V, S> Dashboard<B, V, S>
where
    S: SessionStore,
{
    /// Create a dashboard; the wallet address is read from the store once.
    pub fn new(config: DashboardConfig, backend: B, view: V, store: S) -> Self {
        let wallet_address = store.read(WALLET_ADDRESS_KEY).unwrap_or_default();
        let user = User::new(config.initial_username.clone(), wallet_address);
        let state = DashboardState::new(config.recent_capacity, config.lives_unit);

        Self {
            config,
            backend,
            view,
            store,
            presenter: Immediate,
            diagnostics: TracingSink,
            state: RefCell::new(state),
            user: RefCell::new(user),
        }
    }
}

impl<B, V, S, P, D> Dashboard<B, V, S, P, D> {
    /// Swap the presentation layer.
    pub fn with_presenter<P2>(self, presenter: P2) -> Dashboard<B, V, S, P2, D> {
        Dashboard {
            config: self.config,
            backend: self.backend,
            view: self.view,
            store: self.store,
            presenter,
            diagnostics: self.diagnostics,
            state: self.state,
            user: self.user,
        }
    }

    /// Swap the diagnostics sink.
    pub fn with_diagnostics<D2>(self, diagnostics: D2) -> Dashboard<B, V, S, P, D2> {
        Dashboard {
            config: self.config,
            backend: self.backend,
            view: self.view,
            store: self.store,
            presenter: self.presenter,
            diagnostics,
            state: self.state,
            user: self.user,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn user(&self) -> User {
        self.user.borrow().clone()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn causes(&self) -> Vec<Cause> {
        self.state.borrow().causes().to_vec()
    }

    /// Recent-donation lines, newest first.
    pub fn recent_lines(&self) -> Vec<String> {
        self.state.borrow().recent().iter().map(|r| r.line()).collect()
    }
}

impl<B, V, S, P, D> Dashboard<B, V, S, P, D>
where
    B: CauseBackend,
    V: DashboardView + Clone + 'static,
    S: SessionStore,
    P: Presenter,
    D: DiagnosticSink,
{
    /// Page-ready entry point: show the username, then load causes.
    pub async fn init(&self) -> Result<usize> {
        self.render_username();
        self.fetch_causes().await
    }

    /// Load causes and redraw everything.
    ///
    /// On failure the grid shows [`LOAD_FAILURE_MESSAGE`] and stats are left
    /// alone. The error is returned for callers that care; there is no retry.
    pub async fn fetch_causes(&self) -> Result<usize> {
        match self.backend.fetch_causes().await {
            Ok(causes) => {
                let count = causes.len();
                tracing::debug!(count, "loaded causes");
                self.state.borrow_mut().replace_causes(causes);
                self.render_causes();
                self.update_stats();
                Ok(count)
            }
            Err(e) => {
                self.diagnostics.report(Diagnostic::CausesUnavailable {
                    reason: e.to_string(),
                });
                self.view.show_load_error(LOAD_FAILURE_MESSAGE);
                Err(e)
            }
        }
    }

    /// Rebuild the cause grid and refresh the supported-causes counter.
    pub fn render_causes(&self) {
        let (cards, supported) = {
            let state = self.state.borrow();
            let cards: Vec<CauseCard> = state
                .causes()
                .iter()
                .enumerate()
                .map(|(index, cause)| CauseCard::build(index, cause))
                .collect();
            (cards, state.supported_causes().len())
        };

        self.view.render_cause_list(&cards);
        for card in &cards {
            self.presenter.fill_card(&self.view, card);
        }
        self.view
            .update_stat(Stat::CausesSupported, &supported.to_string());
    }

    /// Push the running totals and overall progress to the view.
    pub fn update_stats(&self) {
        let stats = self.stats();

        self.presenter.animate_stat(
            &self.view,
            Stat::TotalImpact,
            stats.total_impact,
            StatFormat::Rupees,
        );
        self.presenter.animate_stat(
            &self.view,
            Stat::DonationsMade,
            stats.donations_made as f64,
            StatFormat::Count,
        );
        self.presenter.animate_stat(
            &self.view,
            Stat::LivesImpacted,
            stats.lives_impacted as f64,
            StatFormat::Count,
        );
        self.view.update_stat(
            Stat::CausesSupported,
            &stats.causes_supported.to_string(),
        );
        self.presenter.fill_overall(&self.view, stats.overall_progress);
    }

    /// Prompt for an amount and fund a cause with it.
    ///
    /// Invalid answers cancel silently. Once the amount is valid the
    /// donation is applied locally before it is logged; a logging failure
    /// goes to the diagnostics sink and leaves the applied state in place.
    pub async fn handle_fund_click(&self, cause_id: u64) -> Result<FundOutcome> {
        let title = self
            .state
            .borrow()
            .cause(cause_id)
            .map(|c| c.title.clone())
            .ok_or(DashboardError::UnknownCause(cause_id))?;

        let response = self.view.prompt_amount(&title);
        let Some(amount) = parse_amount(response.as_deref()) else {
            tracing::debug!(cause_id, ?response, "fund action cancelled");
            return Ok(FundOutcome::Cancelled);
        };

        self.view.set_fund_control(cause_id, FundControl::Processing);
        self.presenter
            .processing_delay(self.config.processing_delay_ms)
            .await;

        let applied = self.state.borrow_mut().apply_donation(cause_id, amount);
        let applied = match applied {
            Ok(applied) => applied,
            Err(e) => {
                // The list was replaced while the donation was processing.
                self.view.set_fund_control(cause_id, FundControl::Ready);
                return Err(e);
            }
        };
        tracing::debug!(cause_id, amount, lives = applied.lives, "donation applied");

        let log = DonationLog {
            wallet_address: self.user.borrow().wallet_address.clone(),
            cause_title: applied.cause_title.clone(),
            amount,
        };
        let logged = match self.backend.log_donation(&log).await {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.report(Diagnostic::DonationLogFailed {
                    cause_title: applied.cause_title.clone(),
                    amount,
                    reason: e.to_string(),
                });
                false
            }
        };

        self.render_causes();
        self.update_stats();
        self.add_recent_donation(&applied.cause_title, amount);
        self.presenter.flash_success(&self.view, cause_id);

        Ok(FundOutcome::Funded(FundReceipt {
            cause_id,
            cause_title: applied.cause_title,
            amount,
            lives: applied.lives,
            logged,
        }))
    }

    /// Prepend a line to the recent log, evicting the oldest past capacity.
    pub fn add_recent_donation(&self, cause_title: &str, amount: f64) {
        let evicted = self.state.borrow_mut().record_recent(cause_title, amount);
        self.view
            .prepend_recent(&recent_donation_line(cause_title, amount));
        if evicted.is_some() {
            self.presenter.retire_oldest_recent(&self.view);
        }
    }

    pub fn render_username(&self) {
        self.view.render_usernames(&self.user.borrow().username);
    }

    /// Apply username input; empty input shows as "anonymous".
    pub fn set_username(&self, input: &str) {
        self.user.borrow_mut().set_username(input);
        self.render_username();
    }

    /// Clear persisted state and leave, if the page offers a logout control.
    pub fn logout(&self) -> bool {
        if !self.view.has_logout_control() {
            return false;
        }
        self.store.clear_all();
        self.view.navigate(LOGOUT_PATH);
        true
    }
}
