//! Browser-side service clients.

pub mod api;
