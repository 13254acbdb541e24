mod app_state;
mod errors;
mod focus;

// Re-export all types from submodules
pub use app_state::*;
pub use errors::*;
pub use focus::*;
