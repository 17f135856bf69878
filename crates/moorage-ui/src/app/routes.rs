//! Routing definitions for the Moorage UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Deals,
    #[at("/files")]
    Files,
    #[at("/content/:id")]
    Content { id: String },
    #[at("/sign-in")]
    SignIn,
    #[not_found]
    #[at("/404")]
    NotFound,
}
