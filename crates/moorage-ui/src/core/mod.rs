//! Pure presentation logic, testable outside wasm.

pub mod card;
pub mod feed;
pub mod format;
pub mod gateway;
pub mod status;
pub mod table;
