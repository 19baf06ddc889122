mod fetch;
pub mod form;
mod pages;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    pages::{Contact, Home, Waitlist},
    routes::Route,
};

fn switch(route: Route) -> Html {
    match route {
        Route::Contact => {
            html! { <Contact /> }
        }
        Route::Waitlist => {
            html! { <Waitlist /> }
        }
        Route::Home => {
            html! { <Home /> }
        }
    }
}

#[function_component]
pub fn AppRoot() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-host">
                <div class="router">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
