use crate::app::{ApiCtx, Route, api_base_url};
use crate::components::loader::LoaderSpinner;
use crate::components::status_icon::DealStatusBadge;
use crate::core::card::{
    DealTally, ReplicationNote, aggregation_note, display_name, replication_note, tally,
    visible_rows,
};
use crate::core::format::{bytes_to_size, pluralize};
use crate::core::gateway::{dweb_retrieval_url, moorage_retrieval_url};
use gloo::console;
use moorage_api_models::ContentStatusResponse;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ContentStatusProps {
    pub id: u64,
    #[prop_or_default]
    pub aggregated_files: u64,
}

/// Fetches one content item's status and renders its card. Fetch errors are
/// logged and leave the card in its loading shell.
#[function_component(ContentStatus)]
pub(crate) fn content_status(props: &ContentStatusProps) -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let response = use_state(|| None::<ContentStatusResponse>);

    {
        let api = api.clone();
        let response = response.clone();
        use_effect_with_deps(
            move |&id| {
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_content_status(id).await {
                        Ok(payload) => response.set(Some(payload)),
                        Err(err) => {
                            console::error!("status fetch failed", id, err.to_string());
                        }
                    }
                });
                || ()
            },
            props.id,
        );
    }

    (*response).as_ref().map_or_else(
        || {
            html! {
                <article class="content-card">
                    <LoaderSpinner />
                </article>
            }
        },
        |payload| {
            html! {
                <ContentCard
                    id={props.id}
                    response={payload.clone()}
                    aggregated_files={props.aggregated_files}
                />
            }
        },
    )
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContentCardProps {
    pub id: u64,
    pub response: ContentStatusResponse,
    #[prop_or_default]
    pub aggregated_files: u64,
}

fn render_url(url: Option<String>) -> Html {
    url.map_or_else(
        || html! { <span class="muted">{"..."}</span> },
        |url| html! { <a href={url.clone()} target="_blank">{url}</a> },
    )
}

/// Status card for one content item: identity, retrieval links, deal rows,
/// and replication progress.
#[function_component(ContentCard)]
pub(crate) fn content_card(props: &ContentCardProps) -> Html {
    let show_failures = use_state(|| false);
    let toggle_failures = {
        let show_failures = show_failures.clone();
        Callback::from(move |_| show_failures.set(!*show_failures))
    };

    let content = props.response.content.as_ref();
    let tally: DealTally = tally(&props.response.deals);
    let rows = visible_rows(&tally.rows, *show_failures);
    let cid = content.and_then(moorage_api_models::Content::cid_str);
    let attempts = props.response.deals.len() as u64;

    let deal_rows = rows
        .iter()
        .map(|row| {
            html! {
                <li key={row.key} class="deal-row">
                    <DealStatusBadge status={row.status} />
                    if let Some(chain_id) = row.chain_deal_id {
                        <span class="deal-chain-id">{format!("On-chain ID {chain_id}")}</span>
                    }
                </li>
            }
        })
        .collect::<Html>();

    let note = replication_note(tally.successes, content);

    html! {
        <article class="content-card">
            <header>
                <h3>
                    <Link<Route> to={Route::Content { id: props.id.to_string() }}>
                        {display_name(content)}
                    </Link<Route>>
                </h3>
            </header>
            <table class="content-summary">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Retrieval URL"}</th>
                        <th>{"Backup URL"}</th>
                        <th>{"Local ID"}</th>
                        <th>{"Size"}</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>{display_name(content)}</td>
                        <td>{render_url(moorage_retrieval_url(cid))}</td>
                        <td>{render_url(dweb_retrieval_url(cid))}</td>
                        <td>{props.id.to_string()}</td>
                        <td>{content.map_or_else(|| "...".to_string(), |c| bytes_to_size(c.size, 2))}</td>
                    </tr>
                </tbody>
            </table>
            if let Some(note) = aggregation_note(props.aggregated_files) {
                <p class="aggregation-note">{note}</p>
            }
            if props.response.deals.is_empty() {
                <p class="empty-state">
                    {"Moorage has not performed any deals for this file, yet."}
                </p>
            } else {
                <p class="attempts">
                    {format!("Made {attempts} {}", pluralize("attempt", attempts))}
                    {" "}
                    <a href={format!("/errors/{}", props.id)}>{"(view logs)"}</a>
                    if tally.failures > 0 {
                        {" "}
                        <button class="ghost" onclick={toggle_failures}>
                            { if *show_failures {
                                format!("Hide {} failed", tally.failures)
                            } else {
                                format!("Show {} failed", tally.failures)
                            } }
                        </button>
                    }
                </p>
                <ul class="deal-rows">{deal_rows}</ul>
            }
            if let Some(note) = note {
                <p class="replication-note">
                    if matches!(note, ReplicationNote::InProgress { .. }) {
                        <LoaderSpinner />
                    }
                    {note.message()}
                </p>
            }
        </article>
    }
}
