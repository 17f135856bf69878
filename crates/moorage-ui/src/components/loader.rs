use yew::prelude::*;

/// Indeterminate spinner shown while a fetch is in flight.
#[function_component(LoaderSpinner)]
pub(crate) fn loader_spinner() -> Html {
    html! {
        <span class="loader" role="status" aria-label="Loading" />
    }
}
