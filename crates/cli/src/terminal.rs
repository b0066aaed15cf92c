//! Terminal rendering of the dashboard.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use dashboard::{CauseCard, DashboardView, FundControl, Stat, amount_prompt};

#[derive(Debug, Default)]
struct Screen {
    username: String,
    cards: Vec<CauseCard>,
    load_error: Option<String>,
    stats: BTreeMap<Stat, String>,
    card_progress: HashMap<u64, f64>,
    overall_progress: f64,
    recent: VecDeque<String>,
    answers: VecDeque<String>,
    logged_out_to: Option<String>,
}

/// View that keeps the latest screen state and prints on request.
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    screen: Rc<RefCell<Screen>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next amount prompt without reading stdin.
    pub fn queue_answer(&self, answer: impl Into<String>) {
        self.screen.borrow_mut().answers.push_back(answer.into());
    }

    pub fn logged_out_to(&self) -> Option<String> {
        self.screen.borrow().logged_out_to.clone()
    }

    /// Cause grid as printable lines.
    pub fn cause_lines(&self) -> Vec<String> {
        let screen = self.screen.borrow();
        if let Some(message) = &screen.load_error {
            return vec![message.clone()];
        }
        if screen.cards.is_empty() {
            return vec!["No causes yet.".to_string()];
        }
        screen
            .cards
            .iter()
            .map(|card| {
                let progress = screen.card_progress.get(&card.cause_id).copied().unwrap_or(0.0);
                let by = card
                    .ngo_name
                    .as_ref()
                    .map(|ngo| format!(" (by {ngo})"))
                    .unwrap_or_default();
                format!(
                    "[{:>3}] {}{} - {} [{} {:.1}%]",
                    card.cause_id,
                    card.title,
                    by,
                    card.raised_text,
                    progress_bar(progress),
                    progress
                )
            })
            .collect()
    }

    /// Stat cards and overall progress as printable lines.
    pub fn stat_lines(&self) -> Vec<String> {
        let screen = self.screen.borrow();
        let mut lines: Vec<String> = Stat::ALL
            .iter()
            .map(|&stat| {
                let value = screen.stats.get(&stat).map(String::as_str).unwrap_or("0");
                format!("{:<17} {}", format!("{}:", stat.label()), value)
            })
            .collect();
        lines.push(format!(
            "{:<17} {:.1}%",
            "Overall Progress:", screen.overall_progress
        ));
        lines
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.screen.borrow().recent.iter().cloned().collect()
    }

    pub fn username(&self) -> String {
        self.screen.borrow().username.clone()
    }
}

/// Twenty-cell bar for a percentage.
fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 5.0).round()) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

impl DashboardView for TerminalView {
    fn render_usernames(&self, username: &str) {
        self.screen.borrow_mut().username = username.to_string();
    }

    fn render_cause_list(&self, cards: &[CauseCard]) {
        let mut screen = self.screen.borrow_mut();
        screen.cards = cards.to_vec();
        screen.load_error = None;
        screen.card_progress.clear();
    }

    fn show_load_error(&self, message: &str) {
        let mut screen = self.screen.borrow_mut();
        screen.cards.clear();
        screen.load_error = Some(message.to_string());
    }

    fn update_stat(&self, stat: Stat, text: &str) {
        self.screen
            .borrow_mut()
            .stats
            .insert(stat, text.to_string());
    }

    fn stat_text(&self, stat: Stat) -> String {
        self.screen
            .borrow()
            .stats
            .get(&stat)
            .cloned()
            .unwrap_or_default()
    }

    fn set_card_progress(&self, cause_id: u64, percent: f64) {
        self.screen
            .borrow_mut()
            .card_progress
            .insert(cause_id, percent);
    }

    fn set_overall_progress(&self, percent: f64) {
        self.screen.borrow_mut().overall_progress = percent;
    }

    fn set_fund_control(&self, cause_id: u64, control: FundControl) {
        tracing::debug!(cause_id, state = control.label(), "fund control");
    }

    fn prepend_recent(&self, line: &str) {
        println!("{line}");
        self.screen.borrow_mut().recent.push_front(line.to_string());
    }

    fn remove_oldest_recent(&self) {
        self.screen.borrow_mut().recent.pop_back();
    }

    fn prompt_amount(&self, cause_title: &str) -> Option<String> {
        if let Some(answer) = self.screen.borrow_mut().answers.pop_front() {
            return Some(answer);
        }

        print!("{} ", amount_prompt(cause_title));
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn has_logout_control(&self) -> bool {
        true
    }

    fn navigate(&self, path: &str) {
        self.screen.borrow_mut().logged_out_to = Some(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::LOAD_FAILURE_MESSAGE;
    use impact_types::Cause;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0), "....................");
        assert_eq!(progress_bar(50.0), "##########..........");
        assert_eq!(progress_bar(250.0), "####################");
    }

    #[test]
    fn test_cause_lines() {
        let view = TerminalView::new();
        let mut cause = Cause::new(1, "Clean Water", 1000.0);
        cause.raised = 500.0;
        cause.ngo_name = Some("Jal Seva".to_string());

        view.render_cause_list(&[CauseCard::build(0, &cause)]);
        view.set_card_progress(1, 50.0);

        let lines = view.cause_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Clean Water (by Jal Seva)"));
        assert!(lines[0].contains("₹500 raised of ₹1,000"));
        assert!(lines[0].contains("50.0%"));
    }

    #[test]
    fn test_load_error_replaces_grid() {
        let view = TerminalView::new();
        view.show_load_error(LOAD_FAILURE_MESSAGE);
        assert_eq!(view.cause_lines(), vec![LOAD_FAILURE_MESSAGE]);
    }

    #[test]
    fn test_queued_answer_skips_stdin() {
        let view = TerminalView::new();
        view.queue_answer("300");
        assert_eq!(view.prompt_amount("Clean Water").as_deref(), Some("300"));
    }

    #[test]
    fn test_stat_lines_default_to_zero() {
        let view = TerminalView::new();
        view.update_stat(Stat::TotalImpact, "₹300");

        let lines = view.stat_lines();
        assert!(lines[0].starts_with("Total Impact:"));
        assert!(lines[0].ends_with("₹300"));
        assert!(lines[1].ends_with(" 0"));
        assert!(lines[4].ends_with("0.0%"));
    }
}
