//! Recent donations list.

use yew::prelude::*;

use crate::view::RecentEntry;

/// Properties for RecentList component.
#[derive(Properties, PartialEq)]
pub struct RecentListProps {
    pub entries: Vec<RecentEntry>,
    /// Entries past this index are on their way out
    pub capacity: usize,
}

/// Newest-first list of donations made this session.
#[function_component(RecentList)]
pub fn recent_list(props: &RecentListProps) -> Html {
    html! {
        <ul id="recentList" class="recent-list">
            if props.entries.is_empty() {
                <li class="muted">{"No donations yet"}</li>
            } else {
                { for props.entries.iter().enumerate().map(|(i, entry)| {
                    let class = if i >= props.capacity { "recent-item leaving" } else { "recent-item" };
                    html! { <li key={entry.key} {class}>{ &entry.line }</li> }
                })}
            }
        </ul>
    }
}
