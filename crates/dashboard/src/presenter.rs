//! Presentation layer: delays, tweens and transient effects.
//!
//! Correctness never depends on a presenter. [`Immediate`] applies every
//! final value straight away; timer-backed presenters live with the UI
//! binding that owns an event loop.

use impact_types::format_inr;

use crate::view::{CauseCard, DashboardView, FundControl, Stat};

/// Frames in a number tween.
pub const TWEEN_STEPS: u32 = 30;
/// Total tween duration.
pub const TWEEN_DURATION_MS: u64 = 800;
/// Delay before the first card's progress bar fills.
pub const CARD_FILL_BASE_DELAY_MS: u64 = 100;
/// Extra delay per card index.
pub const CARD_FILL_STAGGER_MS: u64 = 100;
/// Delay before the overall progress bar moves.
pub const OVERALL_FILL_DELAY_MS: u64 = 100;
/// How long the success indicator stays on a fund control.
pub const SUCCESS_FLASH_MS: u64 = 2000;
/// Exit transition of an evicted recent-donation entry.
pub const RECENT_EXIT_MS: u64 = 300;

/// How a stat value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    Count,
    Rupees,
}

impl StatFormat {
    /// Render a whole-number frame value.
    pub fn apply(self, value: f64) -> String {
        match self {
            StatFormat::Count => format!("{value:.0}"),
            StatFormat::Rupees => format_inr(value),
        }
    }
}

/// Numeric value of displayed stat text, reading only its digits.
///
/// `"₹1,200"` reads as 1200; text without digits reads as 0.
pub fn displayed_value(text: &str) -> f64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0.0)
}

/// Linear interpolation between two stat values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberTween {
    from: f64,
    to: f64,
}

impl NumberTween {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Time between frames.
    pub fn frame_interval_ms(&self) -> u64 {
        TWEEN_DURATION_MS / u64::from(TWEEN_STEPS)
    }

    /// Floored value of every frame; the last one is the floored target.
    pub fn frames(&self) -> Vec<f64> {
        let increment = (self.to - self.from) / f64::from(TWEEN_STEPS);
        let mut current = self.from;
        (1..=TWEEN_STEPS)
            .map(|step| {
                current += increment;
                if step == TWEEN_STEPS {
                    current = self.to;
                }
                current.floor()
            })
            .collect()
    }
}

/// Cosmetic timing around view updates.
#[allow(async_fn_in_trait)]
pub trait Presenter {
    /// Simulated processing time before a donation is applied.
    async fn processing_delay(&self, ms: u64);

    /// Move a stat from its displayed value to `target`.
    fn animate_stat<V>(&self, view: &V, stat: Stat, target: f64, format: StatFormat)
    where
        V: DashboardView + Clone + 'static;

    /// Fill a freshly rendered card's progress bar.
    fn fill_card<V>(&self, view: &V, card: &CauseCard)
    where
        V: DashboardView + Clone + 'static;

    /// Move the overall progress bar.
    fn fill_overall<V>(&self, view: &V, percent: f64)
    where
        V: DashboardView + Clone + 'static;

    /// Show the success indicator on a fund control, then make it ready.
    fn flash_success<V>(&self, view: &V, cause_id: u64)
    where
        V: DashboardView + Clone + 'static;

    /// Remove the oldest recent-donation line.
    fn retire_oldest_recent<V>(&self, view: &V)
    where
        V: DashboardView + Clone + 'static;
}

/// Presenter without timing: every update lands at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Presenter for Immediate {
    async fn processing_delay(&self, _ms: u64) {}

    fn animate_stat<V>(&self, view: &V, stat: Stat, target: f64, format: StatFormat)
    where
        V: DashboardView + Clone + 'static,
    {
        view.update_stat(stat, &format.apply(target.floor()));
    }

    fn fill_card<V>(&self, view: &V, card: &CauseCard)
    where
        V: DashboardView + Clone + 'static,
    {
        view.set_card_progress(card.cause_id, card.percent);
    }

    fn fill_overall<V>(&self, view: &V, percent: f64)
    where
        V: DashboardView + Clone + 'static,
    {
        view.set_overall_progress(percent);
    }

    fn flash_success<V>(&self, view: &V, cause_id: u64)
    where
        V: DashboardView + Clone + 'static,
    {
        view.set_fund_control(cause_id, FundControl::Funded);
        view.set_fund_control(cause_id, FundControl::Ready);
    }

    fn retire_oldest_recent<V>(&self, view: &V)
    where
        V: DashboardView + Clone + 'static,
    {
        view.remove_oldest_recent();
    }
}
