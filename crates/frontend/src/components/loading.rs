//! Loading placeholder for the cause grid.

use yew::prelude::*;

/// Properties for Loading component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_else(|| "Loading causes...".to_string())]
    pub message: String,
}

/// Spinner with a short message.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p class="muted">{ &props.message }</p>
        </div>
    }
}
