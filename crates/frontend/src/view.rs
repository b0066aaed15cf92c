//! View model rendered by the dashboard page.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

use dashboard::{CauseCard, DashboardView, FundControl, Stat, amount_prompt};
use yew::Callback;

/// Contents of the cause grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Grid {
    #[default]
    Loading,
    Cards(Vec<CauseCard>),
    Message(String),
}

/// A line in the recent-donations list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub key: u64,
    pub line: String,
}

/// Everything the dashboard page displays.
#[derive(Debug, Default)]
pub struct ViewModel {
    pub username: String,
    pub grid: Grid,
    pub stats: BTreeMap<Stat, String>,
    pub card_progress: HashMap<u64, f64>,
    pub controls: HashMap<u64, FundControl>,
    pub overall_progress: f64,
    pub recent: VecDeque<RecentEntry>,
    next_recent_key: u64,
}

impl ViewModel {
    pub fn stat(&self, stat: Stat) -> String {
        self.stats.get(&stat).cloned().unwrap_or_else(|| match stat {
            Stat::TotalImpact => "₹0".to_string(),
            _ => "0".to_string(),
        })
    }

    pub fn control(&self, cause_id: u64) -> FundControl {
        self.controls.get(&cause_id).copied().unwrap_or_default()
    }

    pub fn card_progress(&self, cause_id: u64) -> f64 {
        self.card_progress.get(&cause_id).copied().unwrap_or(0.0)
    }
}

/// [`DashboardView`] writing into a shared [`ViewModel`] and asking Yew to
/// redraw after every change.
#[derive(Clone)]
pub struct YewView {
    model: Rc<RefCell<ViewModel>>,
    redraw: Callback<()>,
}

impl YewView {
    pub fn new(model: Rc<RefCell<ViewModel>>, redraw: Callback<()>) -> Self {
        Self { model, redraw }
    }

    fn update(&self, f: impl FnOnce(&mut ViewModel)) {
        f(&mut self.model.borrow_mut());
        self.redraw.emit(());
    }
}

impl DashboardView for YewView {
    fn render_usernames(&self, username: &str) {
        self.update(|m| m.username = username.to_string());
    }

    fn render_cause_list(&self, cards: &[CauseCard]) {
        self.update(|m| {
            m.grid = Grid::Cards(cards.to_vec());
            m.card_progress.clear();
        });
    }

    fn show_load_error(&self, message: &str) {
        self.update(|m| m.grid = Grid::Message(message.to_string()));
    }

    fn update_stat(&self, stat: Stat, text: &str) {
        self.update(|m| {
            m.stats.insert(stat, text.to_string());
        });
    }

    fn stat_text(&self, stat: Stat) -> String {
        self.model.borrow().stat(stat)
    }

    fn set_card_progress(&self, cause_id: u64, percent: f64) {
        self.update(|m| {
            m.card_progress.insert(cause_id, percent);
        });
    }

    fn set_overall_progress(&self, percent: f64) {
        self.update(|m| m.overall_progress = percent);
    }

    fn set_fund_control(&self, cause_id: u64, control: FundControl) {
        self.update(|m| {
            m.controls.insert(cause_id, control);
        });
    }

    fn prepend_recent(&self, line: &str) {
        self.update(|m| {
            let key = m.next_recent_key;
            m.next_recent_key += 1;
            m.recent.push_front(RecentEntry {
                key,
                line: line.to_string(),
            });
        });
    }

    fn remove_oldest_recent(&self) {
        self.update(|m| {
            m.recent.pop_back();
        });
    }

    fn prompt_amount(&self, cause_title: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message(&amount_prompt(cause_title))
            .ok()
            .flatten()
    }

    fn has_logout_control(&self) -> bool {
        // The page always renders #logoutBtn.
        true
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window()
            && let Err(e) = window.location().set_href(path)
        {
            web_sys::console::error_1(&e);
        }
    }
}
