use yew::prelude::*;

/// Landing page for signed-out visitors. Authentication happens on the API
/// origin, so this only points the visitor at it.
#[function_component(SignInPage)]
pub(crate) fn sign_in_page() -> Html {
    html! {
        <section class="sign-in">
            <h1>{"Moorage"}</h1>
            <p>{"Sign in to view the status of your storage deals."}</p>
            <a class="solid" href="/sign-in/start">{"Sign in"}</a>
        </section>
    }
}
