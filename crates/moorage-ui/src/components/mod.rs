//! Yew components for the Moorage dashboard.

pub(crate) mod auth;
pub(crate) mod content_card;
pub(crate) mod content_page;
pub(crate) mod deals;
pub(crate) mod files;
pub(crate) mod loader;
pub(crate) mod status_icon;
