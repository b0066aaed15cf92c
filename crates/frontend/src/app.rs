//! Routes for the donator pages.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::DashboardPage;

/// Paths served by the single-page app. Logout leaves the app entirely.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/dash")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! {
            <div class="card empty-state">
                <h2>{"Nothing here"}</h2>
                <Link<Route> to={Route::Dashboard}>{"Go to your dashboard"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <main class="donator-app">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}
