pub mod controller;
pub mod error;
pub mod extract;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;
pub mod status;

pub use controller::{ServerController, shutdown_signal};
pub use server::build_app;
pub use state::AppState;
pub use status::ModelLifecycle;

#[cfg(test)]
mod tests;
