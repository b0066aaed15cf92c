//! Donator dashboard page.

use dashboard::{Dashboard, DashboardConfig, Stat};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::browser::{BrowserStore, ConsoleSink, GlooBackend, TimedPresenter};
use crate::components::{CauseCardItem, Loading, RecentList, StatCard};
use crate::view::{Grid, ViewModel, YewView};

type PageController = Dashboard<GlooBackend, YewView, BrowserStore, TimedPresenter, ConsoleSink>;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let model = use_mut_ref(ViewModel::default);
    let force_update = use_force_update();

    let controller: std::rc::Rc<PageController> = {
        let model = model.clone();
        use_memo((), move |_| {
            let redraw = Callback::from(move |_| force_update.force_update());
            Dashboard::new(
                DashboardConfig::default(),
                GlooBackend,
                YewView::new(model, redraw),
                BrowserStore,
            )
            .with_presenter(TimedPresenter)
            .with_diagnostics(ConsoleSink)
        })
    };

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(e) = controller.init().await {
                    web_sys::console::error_1(&format!("Dashboard load failed: {e}").into());
                }
            });
        });
    }

    let on_fund = {
        let controller = controller.clone();
        Callback::from(move |cause_id: u64| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.handle_fund_click(cause_id).await {
                    web_sys::console::error_1(&format!("Fund action failed: {e}").into());
                }
            });
        })
    };

    let on_username_input = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            controller.set_username(&input.value());
        })
    };

    let on_logout = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            controller.logout();
        })
    };

    let vm = model.borrow();
    let capacity = controller.config().recent_capacity;
    let overall = format!("{:.1}%", vm.overall_progress);

    html! {
        <div>
            <header class="topbar">
                <span class="nav-brand">{"ImpactEcho"}</span>
                <span id="username-banner" class="username">{ &vm.username }</span>
                <button id="logoutBtn" class="logout-btn" onclick={on_logout}>
                    {"Logout"}
                </button>
            </header>

            <div class="card welcome">
                <h1>{"Welcome back, "}<span id="welcomeInline">{ &vm.username }</span></h1>
                <input
                    id="usernameInput"
                    type="text"
                    class="search-input"
                    value={vm.username.clone()}
                    oninput={on_username_input}
                />
            </div>

            <div class="stats-grid">
                { for Stat::ALL.iter().map(|&stat| html! {
                    <StatCard {stat} value={vm.stat(stat)} />
                })}
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Overall Progress"}</h2>
                    <span id="impactPercent">{ overall.clone() }</span>
                </div>
                <div class="progress-bar">
                    <div
                        id="impactProgressBar"
                        class="progress-bar-fill"
                        style={format!("width: {overall}")}
                    />
                </div>
            </div>

            <div id="causesGrid" class="causes-grid">
                { match &vm.grid {
                    Grid::Loading => html! { <Loading /> },
                    Grid::Message(message) => html! { <p class="muted">{ message }</p> },
                    Grid::Cards(cards) => html! {
                        { for cards.iter().map(|card| html! {
                            <CauseCardItem
                                key={card.cause_id}
                                card={card.clone()}
                                progress={vm.card_progress(card.cause_id)}
                                control={vm.control(card.cause_id)}
                                onfund={on_fund.clone()}
                            />
                        })}
                    },
                }}
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Recent Donations"}</h2>
                </div>
                <RecentList entries={vm.recent.iter().cloned().collect::<Vec<_>>()} {capacity} />
            </div>
        </div>
    }
}
