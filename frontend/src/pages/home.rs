use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class="home">
            <div class="title">{"Waveline"}</div>
            <p>{"We are in private beta."}</p>
            <nav class="home-links">
                <Link<Route> to={Route::Waitlist}>{"Join the waitlist"}</Link<Route>>
                <Link<Route> to={Route::Contact}>{"Contact us"}</Link<Route>>
            </nav>
        </div>
    }
}
