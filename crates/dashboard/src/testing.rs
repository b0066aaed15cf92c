//! Test doubles for the controller seams.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use impact_types::{Cause, DonationLog};

use crate::presenter::{Immediate, Presenter, StatFormat};
use crate::view::{CauseCard, DashboardView, FundControl, Stat};
use crate::{CauseBackend, DashboardError, Diagnostic, DiagnosticSink, Result};

/// What the cause grid currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Grid {
    #[default]
    Empty,
    Cards(Vec<CauseCard>),
    Message(String),
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub username_slots: Vec<String>,
    pub grid: Grid,
    pub stats: HashMap<Stat, String>,
    pub stat_updates: Vec<(Stat, String)>,
    pub card_progress: HashMap<u64, f64>,
    pub overall_progress: Option<f64>,
    pub controls: Vec<(u64, FundControl)>,
    pub recent: Vec<String>,
    pub prompts: Vec<String>,
    pub answers: VecDeque<Option<String>>,
    pub has_logout: bool,
    pub navigations: Vec<String>,
}

/// View that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    inner: Rc<RefCell<Recorded>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next amount prompt.
    pub fn answer(&self, response: Option<&str>) {
        self.inner
            .borrow_mut()
            .answers
            .push_back(response.map(str::to_string));
    }

    pub fn with_logout_control(self) -> Self {
        self.inner.borrow_mut().has_logout = true;
        self
    }

    pub fn recorded(&self) -> std::cell::Ref<'_, Recorded> {
        self.inner.borrow()
    }

    pub fn stat(&self, stat: Stat) -> Option<String> {
        self.inner.borrow().stats.get(&stat).cloned()
    }

    pub fn controls_for(&self, cause_id: u64) -> Vec<FundControl> {
        self.inner
            .borrow()
            .controls
            .iter()
            .filter(|(id, _)| *id == cause_id)
            .map(|(_, c)| *c)
            .collect()
    }
}

impl DashboardView for RecordingView {
    fn render_usernames(&self, username: &str) {
        self.inner.borrow_mut().username_slots = vec![username.to_string(); 3];
    }

    fn render_cause_list(&self, cards: &[CauseCard]) {
        let mut inner = self.inner.borrow_mut();
        inner.grid = Grid::Cards(cards.to_vec());
        inner.card_progress.clear();
    }

    fn show_load_error(&self, message: &str) {
        self.inner.borrow_mut().grid = Grid::Message(message.to_string());
    }

    fn update_stat(&self, stat: Stat, text: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.stats.insert(stat, text.to_string());
        inner.stat_updates.push((stat, text.to_string()));
    }

    fn stat_text(&self, stat: Stat) -> String {
        self.inner
            .borrow()
            .stats
            .get(&stat)
            .cloned()
            .unwrap_or_else(|| "0".to_string())
    }

    fn set_card_progress(&self, cause_id: u64, percent: f64) {
        self.inner.borrow_mut().card_progress.insert(cause_id, percent);
    }

    fn set_overall_progress(&self, percent: f64) {
        self.inner.borrow_mut().overall_progress = Some(percent);
    }

    fn set_fund_control(&self, cause_id: u64, control: FundControl) {
        self.inner.borrow_mut().controls.push((cause_id, control));
    }

    fn prepend_recent(&self, line: &str) {
        self.inner.borrow_mut().recent.insert(0, line.to_string());
    }

    fn remove_oldest_recent(&self) {
        self.inner.borrow_mut().recent.pop();
    }

    fn prompt_amount(&self, cause_title: &str) -> Option<String> {
        let mut inner = self.inner.borrow_mut();
        inner.prompts.push(cause_title.to_string());
        inner.answers.pop_front().flatten()
    }

    fn has_logout_control(&self) -> bool {
        self.inner.borrow().has_logout
    }

    fn navigate(&self, path: &str) {
        self.inner.borrow_mut().navigations.push(path.to_string());
    }
}

/// Backend serving a fixed cause list.
#[derive(Debug, Default)]
pub struct FakeBackend {
    causes: Option<Vec<Cause>>,
    fail_logging: bool,
    pub logged: RefCell<Vec<DonationLog>>,
}

impl FakeBackend {
    pub fn serving(causes: Vec<Cause>) -> Self {
        Self {
            causes: Some(causes),
            ..Self::default()
        }
    }

    /// Backend whose cause fetch fails with a network error.
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn failing_logs(mut self) -> Self {
        self.fail_logging = true;
        self
    }
}

impl CauseBackend for FakeBackend {
    async fn fetch_causes(&self) -> Result<Vec<Cause>> {
        self.causes
            .clone()
            .ok_or_else(|| DashboardError::Network("connection refused".to_string()))
    }

    async fn log_donation(&self, log: &DonationLog) -> Result<()> {
        if self.fail_logging {
            return Err(DashboardError::Status {
                status: 500,
                message: "log store unavailable".to_string(),
            });
        }
        self.logged.borrow_mut().push(log.clone());
        Ok(())
    }
}

/// Sink collecting diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub reports: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.reports.borrow_mut().push(diagnostic);
    }
}

/// [`Immediate`] except that the processing delay yields to the executor,
/// letting concurrent fund actions overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yielding;

impl Presenter for Yielding {
    async fn processing_delay(&self, _ms: u64) {
        tokio::task::yield_now().await;
    }

    fn animate_stat<V>(&self, view: &V, stat: Stat, target: f64, format: StatFormat)
    where
        V: DashboardView + Clone + 'static,
    {
        Immediate.animate_stat(view, stat, target, format);
    }

    fn fill_card<V>(&self, view: &V, card: &CauseCard)
    where
        V: DashboardView + Clone + 'static,
    {
        Immediate.fill_card(view, card);
    }

    fn fill_overall<V>(&self, view: &V, percent: f64)
    where
        V: DashboardView + Clone + 'static,
    {
        Immediate.fill_overall(view, percent);
    }

    fn flash_success<V>(&self, view: &V, cause_id: u64)
    where
        V: DashboardView + Clone + 'static,
    {
        Immediate.flash_success(view, cause_id);
    }

    fn retire_oldest_recent<V>(&self, view: &V)
    where
        V: DashboardView + Clone + 'static,
    {
        Immediate.retire_oldest_recent(view);
    }
}

pub fn clean_water() -> Cause {
    let mut cause = Cause::new(1, "Clean Water", 1000.0);
    cause.description = "Wells for villages".to_string();
    cause.image = "https://example.org/water.jpg".to_string();
    cause.raised = 200.0;
    cause
}
