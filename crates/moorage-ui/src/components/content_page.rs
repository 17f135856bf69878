use crate::app::{ApiCtx, api_base_url};
use crate::components::content_card::{ContentCard, ContentStatus};
use crate::components::loader::LoaderSpinner;
use crate::core::format::padded_id;
use crate::services::api::FetchError;
use gloo::console;
use gloo::dialogs::alert;
use moorage_api_models::ContentStatusResponse;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ContentPageProps {
    pub id: String,
}

/// Single-content page. When the item is part of an aggregate bucket the
/// card shown is the parent's, since deals are made per bucket.
#[function_component(ContentPage)]
pub(crate) fn content_page(props: &ContentPageProps) -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let parsed = props.id.parse::<u64>().ok();
    let response = use_state(|| None::<ContentStatusResponse>);

    {
        let api = api.clone();
        let response = response.clone();
        use_effect_with_deps(
            move |parsed: &Option<u64>| {
                if let Some(id) = *parsed {
                    let client = api.client.clone();
                    yew::platform::spawn_local(async move {
                        match client.fetch_content_status(id).await {
                            Ok(payload) => response.set(Some(payload)),
                            Err(FetchError::NotFound | FetchError::Api(_)) => {
                                alert(&format!("Content {id} not found."));
                            }
                            Err(err) => {
                                console::error!("status fetch failed", id, err.to_string());
                            }
                        }
                    });
                }
                || ()
            },
            parsed,
        );
    }

    let Some(id) = parsed else {
        return html! {
            <section class="empty-state">
                <h2>{"Not found"}</h2>
                <p>{format!("\"{}\" is not a content id.", props.id)}</p>
            </section>
        };
    };

    let Some(payload) = (*response).clone() else {
        return html! { <LoaderSpinner /> };
    };

    let parent = payload
        .content
        .as_ref()
        .and_then(moorage_api_models::Content::aggregated_parent);

    html! {
        <section class="content-page">
            <table class="content-identity">
                <tbody>
                    <tr>
                        <th>{"Local ID"}</th>
                        <td>{padded_id(id)}</td>
                    </tr>
                </tbody>
            </table>
            { match parent {
                Some(parent_id) => html! { <ContentStatus id={parent_id} /> },
                None => html! { <ContentCard {id} response={payload} /> },
            } }
        </section>
    }
}
