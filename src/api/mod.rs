//! HTTP surface - routing, handlers and shared state

pub mod chat;
pub mod health;
pub mod router;
pub mod state;

pub use router::create_router_with_state;
pub use state::AppState;
