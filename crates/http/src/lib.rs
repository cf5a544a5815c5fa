//! HTTP surface for scheduler offer introspection.
//!
//! Serves a read-only JSON view of the offers the scheduler currently
//! holds:
//!
//! | Endpoint   | Method | Description                                  |
//! |------------|--------|----------------------------------------------|
//! | `/offers`  | GET    | Held offers as a JSON array, in pool order   |
//! | `/healthz` | GET    | Liveness probe, carries no offer data        |
//!
//! Each request reads one pool snapshot, optionally appends the diagnostic
//! sample offer, and renders through `offerscope-codec`. The response is
//! either the complete document or an explicit error status (`503` when
//! the pool cannot be read, `500` when a held offer fails to decode),
//! never a partial body.

pub mod config;
pub mod error;
pub mod routes;
pub mod sample;
pub mod server;
pub mod state;

pub use config::{
    DEFAULT_BIND_ADDRESS, ServerConfig, default_config_path, load_config, load_config_from_path,
};
pub use error::ApiError;
pub use routes::router;
pub use sample::sample_offer;
pub use server::{OffersHttpServer, RunningOffersHttpServer, resolve_bind_address};
pub use state::AppState;
