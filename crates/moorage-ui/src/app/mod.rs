//! Application shell: routing, session gating, and the wasm entrypoint.

use crate::components::auth::SignInPage;
use crate::components::content_page::ContentPage;
use crate::components::deals::DealsPage;
use crate::components::files::FilesPage;
use crate::components::loader::LoaderSpinner;
use gloo::console;
use gloo::utils::window;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;

mod api;
mod routes;

/// Session check outcome driving what the gate renders.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Session {
    Checking,
    SignedIn,
    SignedOut,
}

pub(crate) fn api_base_url() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:3004".to_string())
}

#[function_component(MoorageApp)]
pub(crate) fn moorage_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <SessionGate />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Checks the viewer session once on boot and redirects signed-out visitors
/// to the sign-in page. The sign-in route itself is never gated.
#[function_component(SessionGate)]
fn session_gate() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let session = use_state(|| Session::Checking);

    {
        let api = api.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_viewer().await {
                        Ok(Some(_)) => session.set(Session::SignedIn),
                        Ok(None) => session.set(Session::SignedOut),
                        Err(err) => {
                            console::error!("viewer check failed", err.to_string());
                            session.set(Session::SignedOut);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    if route == Route::SignIn {
        return html! { <SignInPage /> };
    }

    match *session {
        Session::Checking => html! { <LoaderSpinner /> },
        Session::SignedOut => html! { <Redirect<Route> to={Route::SignIn} /> },
        Session::SignedIn => html! {
            <div class="shell">
                <header class="shell-nav">
                    <span class="shell-brand">{"Moorage"}</span>
                    <nav>
                        <Link<Route> to={Route::Deals}>{"Deals"}</Link<Route>>
                        <Link<Route> to={Route::Files}>{"Files"}</Link<Route>>
                    </nav>
                </header>
                <main class="shell-body">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        },
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Deals => html! { <DealsPage /> },
        Route::Files => html! { <FilesPage /> },
        Route::Content { id } => html! { <ContentPage {id} /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::NotFound => html! {
            <section class="empty-state">
                <h2>{"Not found"}</h2>
                <p>{"The page you are looking for does not exist."}</p>
            </section>
        },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MoorageApp>::with_root(root).render();
    } else {
        yew::Renderer::<MoorageApp>::new().render();
    }
}
