//! Reusable UI components.

mod cause_card;
mod loading;
mod recent_list;
mod stat_card;

pub use cause_card::CauseCardItem;
pub use loading::Loading;
pub use recent_list::RecentList;
pub use stat_card::StatCard;
