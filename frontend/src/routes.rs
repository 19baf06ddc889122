use yew_router::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Routable)]
pub enum Route {
    #[at("/contact")]
    Contact,
    #[at("/waitlist")]
    Waitlist,
    #[at("/")]
    Home,
}
