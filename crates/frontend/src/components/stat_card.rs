//! One of the four impact counters.

use dashboard::Stat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
    /// Text as last written by the controller, e.g. `₹1,250`
    pub value: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let accent = match props.stat {
        Stat::TotalImpact => "stat-card accent-primary",
        Stat::LivesImpacted => "stat-card accent-success",
        Stat::DonationsMade | Stat::CausesSupported => "stat-card",
    };

    html! {
        <div class={classes!("card", accent)}>
            <div class="stat-value" id={props.stat.element_id()}>{ props.value.clone() }</div>
            <div class="stat-label">{ props.stat.label() }</div>
        </div>
    }
}
