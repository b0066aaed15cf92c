//! Cause card with funding progress and the fund action.

use dashboard::{CauseCard, FundControl};
use yew::prelude::*;

/// Properties for CauseCardItem component.
#[derive(Properties, PartialEq)]
pub struct CauseCardProps {
    pub card: CauseCard,
    /// Current bar fill; starts at 0 and moves to `card.percent`
    pub progress: f64,
    pub control: FundControl,
    pub onfund: Callback<u64>,
}

/// A single cause in the grid.
#[function_component(CauseCardItem)]
pub fn cause_card_item(props: &CauseCardProps) -> Html {
    let card = &props.card;

    let onclick = {
        let onfund = props.onfund.clone();
        let cause_id = card.cause_id;
        Callback::from(move |_: MouseEvent| onfund.emit(cause_id))
    };

    let button_class = match props.control {
        FundControl::Funded => "fund-btn funded",
        _ => "fund-btn",
    };

    html! {
        <div class="cause-card card">
            <img src={card.image.clone()} alt={card.title.clone()} class="cause-img" />
            <h3>{ &card.title }</h3>
            if let Some(ngo) = &card.ngo_name {
                <p class="muted small">{ format!("by {ngo}") }</p>
            }
            <p>{ &card.description }</p>
            <div class="progress-wrap-small">
                <div
                    class="progress-small-fill"
                    style={format!("width: {:.1}%", props.progress)}
                />
            </div>
            <p class="muted small">{ &card.raised_text }</p>
            <button
                class={button_class}
                data-id={card.cause_id.to_string()}
                disabled={!props.control.is_enabled()}
                {onclick}
            >
                { props.control.label() }
            </button>
        </div>
    }
}
