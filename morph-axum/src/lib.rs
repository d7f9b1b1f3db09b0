//! morph-axum: HTTP front end for morph.
//!
//! Builds an axum router around a [`morph_core::Resizer`]:
//!
//! - `GET /health` answers `ok`
//! - `GET /{*key}?options=200x200_cover&response=file` resizes `key`
//!
//! Every route carries `x-request-id` set/propagate layers and a trace layer.

pub mod app;
pub mod response;
pub mod routes;
pub mod settings;
pub mod state;

pub use app::{axum, AxumApp};
pub use response::HttpResponse;
pub use settings::ServerSettings;
pub use state::MorphAxumState;
