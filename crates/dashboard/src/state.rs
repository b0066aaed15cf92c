//! In-memory dashboard state for one page session.

use std::collections::{BTreeSet, VecDeque};

use impact_types::{Cause, lives_for_amount, recent_donation_line};

use crate::{DashboardError, Result};

/// One entry of the recent-donations log.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentDonation {
    pub cause_title: String,
    pub amount: f64,
}

impl RecentDonation {
    /// Display line, e.g. `Funded ₹300 to "Clean Water"`.
    pub fn line(&self) -> String {
        recent_donation_line(&self.cause_title, self.amount)
    }
}

/// Bounded newest-first log of donations.
#[derive(Debug, Clone)]
pub struct RecentDonations {
    entries: VecDeque<RecentDonation>,
    capacity: usize,
}

impl RecentDonations {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend an entry, returning the evicted oldest entry once over capacity.
    pub fn push(&mut self, entry: RecentDonation) -> Option<RecentDonation> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &RecentDonation> {
        self.entries.iter()
    }
}

/// Result of applying a donation to the state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDonation {
    pub cause_id: u64,
    pub cause_title: String,
    pub amount: f64,
    pub lives: u64,
}

/// Aggregate numbers shown in the stat cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub total_impact: f64,
    pub donations_made: u64,
    pub lives_impacted: u64,
    pub causes_supported: usize,
    /// Mean funding percentage over all causes, capped at 100
    pub overall_progress: f64,
}

/// Causes and running totals owned by one dashboard instance.
#[derive(Debug, Clone)]
pub struct DashboardState {
    causes: Vec<Cause>,
    total_impact: f64,
    donations_made: u64,
    lives_impacted: u64,
    supported_causes: BTreeSet<String>,
    recent: RecentDonations,
    lives_unit: f64,
}

impl DashboardState {
    /// Create an empty state.
    pub fn new(recent_capacity: usize, lives_unit: f64) -> Self {
        Self {
            causes: Vec::new(),
            total_impact: 0.0,
            donations_made: 0,
            lives_impacted: 0,
            supported_causes: BTreeSet::new(),
            recent: RecentDonations::new(recent_capacity),
            lives_unit,
        }
    }

    pub fn causes(&self) -> &[Cause] {
        &self.causes
    }

    pub fn cause(&self, id: u64) -> Option<&Cause> {
        self.causes.iter().find(|c| c.id == id)
    }

    /// Replace the cause list wholesale; running totals are kept.
    pub fn replace_causes(&mut self, causes: Vec<Cause>) {
        self.causes = causes;
    }

    pub fn total_impact(&self) -> f64 {
        self.total_impact
    }

    pub fn donations_made(&self) -> u64 {
        self.donations_made
    }

    pub fn lives_impacted(&self) -> u64 {
        self.lives_impacted
    }

    pub fn supported_causes(&self) -> &BTreeSet<String> {
        &self.supported_causes
    }

    pub fn recent(&self) -> &RecentDonations {
        &self.recent
    }

    /// Apply a validated donation to a cause and the running totals.
    ///
    /// Lives are floored per donation, so the total is the sum of
    /// `floor(amount / unit)` over all donations, saturating at `u64::MAX`.
    pub fn apply_donation(&mut self, cause_id: u64, amount: f64) -> Result<AppliedDonation> {
        let cause = self
            .causes
            .iter_mut()
            .find(|c| c.id == cause_id)
            .ok_or(DashboardError::UnknownCause(cause_id))?;

        let lives = lives_for_amount(amount, self.lives_unit);

        cause.raised += amount;
        self.total_impact += amount;
        self.donations_made += 1;
        self.lives_impacted = self.lives_impacted.saturating_add(lives);
        self.supported_causes.insert(cause.title.clone());

        Ok(AppliedDonation {
            cause_id,
            cause_title: cause.title.clone(),
            amount,
            lives,
        })
    }

    /// Record a donation in the recent log, returning any evicted entry.
    pub fn record_recent(&mut self, cause_title: &str, amount: f64) -> Option<RecentDonation> {
        self.recent.push(RecentDonation {
            cause_title: cause_title.to_string(),
            amount,
        })
    }

    /// Mean of `raised / goal` over all causes in percent, capped at 100.
    ///
    /// An empty list or a NaN mean yields 0.
    pub fn overall_progress(&self) -> f64 {
        if self.causes.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.causes.iter().map(Cause::raw_percent).sum();
        let mean = sum / self.causes.len() as f64;
        if mean.is_nan() { 0.0 } else { mean.min(100.0) }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_impact: self.total_impact,
            donations_made: self.donations_made,
            lives_impacted: self.lives_impacted,
            causes_supported: self.supported_causes.len(),
            overall_progress: self.overall_progress(),
        }
    }
}
