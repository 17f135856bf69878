use crate::app::{ApiCtx, api_base_url};
use crate::components::content_card::ContentStatus;
use crate::components::loader::LoaderSpinner;
use crate::core::feed::{DealsFeed, FeedPhase, PAGE_INCREMENT};
use gloo::console;
use moorage_api_models::ContentSummary;
use std::rc::Rc;
use yew::prelude::*;

/// Feed transitions dispatched by fetch effects.
pub(crate) enum FeedAction {
    Started,
    InitialLoaded(Vec<ContentSummary>),
    InitialFailed,
    MoreStarted,
    MoreLoaded(Vec<ContentSummary>),
    MoreFailed,
}

impl Reducible for DealsFeed {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FeedAction::Started => {
                let _ = next.begin_initial();
            }
            FeedAction::InitialLoaded(page) => next.apply_initial(page),
            FeedAction::InitialFailed => next.fail_initial(),
            FeedAction::MoreStarted => {
                let _ = next.begin_load_more();
            }
            FeedAction::MoreLoaded(page) => next.apply_more(page),
            FeedAction::MoreFailed => next.fail_more(),
        }
        Rc::new(next)
    }
}

/// Paged listing of every content item with deals, newest first as served.
#[function_component(DealsPage)]
pub(crate) fn deals_page() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let feed = use_reducer(DealsFeed::new);

    {
        let api = api.clone();
        let feed = feed.clone();
        use_effect_with_deps(
            move |_| {
                feed.dispatch(FeedAction::Started);
                let client = api.client.clone();
                let feed = feed.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_deals(0, PAGE_INCREMENT).await {
                        Ok(page) => feed.dispatch(FeedAction::InitialLoaded(page)),
                        Err(err) => {
                            console::error!("deals fetch failed", err.to_string());
                            feed.dispatch(FeedAction::InitialFailed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let load_more = {
        let api = api.clone();
        let feed = feed.clone();
        Callback::from(move |_| {
            if !feed.can_load_more() {
                return;
            }
            let offset = feed.offset + feed.limit;
            let limit = feed.limit;
            feed.dispatch(FeedAction::MoreStarted);
            let client = api.client.clone();
            let feed = feed.clone();
            yew::platform::spawn_local(async move {
                match client.fetch_deals(offset, limit).await {
                    Ok(page) => feed.dispatch(FeedAction::MoreLoaded(page)),
                    Err(err) => {
                        console::error!("deals fetch failed", err.to_string());
                        feed.dispatch(FeedAction::MoreFailed);
                    }
                }
            });
        })
    };

    if feed.phase == FeedPhase::Loading {
        return html! { <LoaderSpinner /> };
    }

    let cards = feed
        .entities
        .iter()
        .map(|summary| {
            html! {
                <ContentStatus
                    key={summary.id}
                    id={summary.id}
                    aggregated_files={summary.aggregated_files}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section class="deals-page">
            <h1>{"Deals"}</h1>
            if feed.phase == FeedPhase::Loaded && feed.entities.is_empty() {
                <p class="empty-state">{"No deals yet."}</p>
            } else {
                <div class="deals-list">{cards}</div>
            }
            if feed.can_load_more() || feed.phase == FeedPhase::LoadingMore {
                <button
                    class="ghost load-more"
                    disabled={feed.is_busy()}
                    onclick={load_more}
                >
                    { if feed.phase == FeedPhase::LoadingMore {
                        html! { <LoaderSpinner /> }
                    } else {
                        html! { {format!("\u{279d} Next {PAGE_INCREMENT}")} }
                    } }
                </button>
            }
        </section>
    }
}
