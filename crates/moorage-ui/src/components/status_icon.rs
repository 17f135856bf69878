use crate::core::status::DealStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DealStatusProps {
    pub status: DealStatus,
}

/// Coloured pill labelling one deal's lifecycle stage.
#[function_component(DealStatusBadge)]
pub(crate) fn deal_status_badge(props: &DealStatusProps) -> Html {
    html! {
        <span class={props.status.tone().css_class()}>{props.status.label()}</span>
    }
}
