//! The UI surface the controller writes to.

use impact_types::{Cause, format_inr};

use crate::presenter::{CARD_FILL_BASE_DELAY_MS, CARD_FILL_STAGGER_MS};

/// Message shown in the cause grid when causes cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Unable to load causes at the moment.";

/// Stat cards on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    TotalImpact,
    DonationsMade,
    LivesImpacted,
    CausesSupported,
}

impl Stat {
    pub const ALL: [Stat; 4] = [
        Stat::TotalImpact,
        Stat::DonationsMade,
        Stat::CausesSupported,
        Stat::LivesImpacted,
    ];

    /// Element id of the stat on the page.
    pub fn element_id(self) -> &'static str {
        match self {
            Stat::TotalImpact => "totalImpact",
            Stat::DonationsMade => "donationsMade",
            Stat::LivesImpacted => "livesImpacted",
            Stat::CausesSupported => "causesSupported",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stat::TotalImpact => "Total Impact",
            Stat::DonationsMade => "Donations Made",
            Stat::LivesImpacted => "Lives Impacted",
            Stat::CausesSupported => "Causes Supported",
        }
    }
}

/// State of a cause card's fund action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FundControl {
    #[default]
    Ready,
    /// Disabled while the donation is processed
    Processing,
    /// Success indicator; the control is usable again
    Funded,
}

impl FundControl {
    pub fn label(self) -> &'static str {
        match self {
            FundControl::Ready => "Fund Cause",
            FundControl::Processing => "Processing...",
            FundControl::Funded => "✓ Funded!",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != FundControl::Processing
    }
}

/// Everything a view needs to draw one cause card.
#[derive(Debug, Clone, PartialEq)]
pub struct CauseCard {
    pub cause_id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub ngo_name: Option<String>,
    /// e.g. `₹500 raised of ₹1,000`
    pub raised_text: String,
    /// Target fill of the progress bar, 0..=100
    pub percent: f64,
    /// Delay before the fill is applied
    pub fill_delay_ms: u64,
}

impl CauseCard {
    /// Build the card for the cause at `index` in the grid.
    pub fn build(index: usize, cause: &Cause) -> Self {
        Self {
            cause_id: cause.id,
            title: cause.title.clone(),
            description: cause.description.clone(),
            image: cause.image.clone(),
            ngo_name: cause.ngo_name.clone(),
            raised_text: format!(
                "{} raised of {}",
                format_inr(cause.raised),
                format_inr(cause.goal)
            ),
            percent: cause.progress_percent(),
            fill_delay_ms: CARD_FILL_BASE_DELAY_MS + index as u64 * CARD_FILL_STAGGER_MS,
        }
    }
}

/// UI operations the controller drives.
///
/// Methods take `&self`: views are shared handles and mutate through
/// interior mutability, since presenters keep clones alive in timers.
pub trait DashboardView {
    /// Write the username into every display slot.
    fn render_usernames(&self, username: &str);

    /// Replace the cause grid with these cards, in order, bars empty.
    fn render_cause_list(&self, cards: &[CauseCard]);

    /// Replace the cause grid with a single message.
    fn show_load_error(&self, message: &str);

    fn update_stat(&self, stat: Stat, text: &str);

    /// Text currently displayed for a stat.
    fn stat_text(&self, stat: Stat) -> String;

    fn set_card_progress(&self, cause_id: u64, percent: f64);

    /// Overall progress bar width and its label.
    fn set_overall_progress(&self, percent: f64);

    fn set_fund_control(&self, cause_id: u64, control: FundControl);

    /// Prepend a line to the recent-donations list.
    fn prepend_recent(&self, line: &str);

    /// Drop the last (oldest) line of the recent-donations list.
    fn remove_oldest_recent(&self);

    /// Ask the user for an amount; `None` when dismissed.
    fn prompt_amount(&self, cause_title: &str) -> Option<String>;

    fn has_logout_control(&self) -> bool;

    fn navigate(&self, path: &str);
}

/// Prompt shown before funding a cause.
pub fn amount_prompt(cause_title: &str) -> String {
    format!("Enter amount to fund \"{cause_title}\" (in ₹):")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_build() {
        let mut cause = Cause::new(3, "Clean Water", 1000.0);
        cause.raised = 500.0;

        let card = CauseCard::build(2, &cause);

        assert_eq!(card.cause_id, 3);
        assert_eq!(card.raised_text, "₹500 raised of ₹1,000");
        assert!((card.percent - 50.0).abs() < 1e-9);
        assert_eq!(card.fill_delay_ms, 300);
    }

    #[test]
    fn test_fund_control_enabled() {
        assert!(FundControl::Ready.is_enabled());
        assert!(!FundControl::Processing.is_enabled());
        assert!(FundControl::Funded.is_enabled());
    }

    #[test]
    fn test_amount_prompt() {
        assert_eq!(
            amount_prompt("Books"),
            "Enter amount to fund \"Books\" (in ₹):"
        );
    }
}
