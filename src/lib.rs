//! emc2-explorer: An interactive mass-energy equivalence explorer.
//!
//! This library provides the presentation layer around the emc2-core
//! computational crates, including:
//! - The terminal frontend and its event loop
//! - The cancellable fact-rotation timer
//! - The decorative particle-field visualization
//! - Configuration management

pub mod app;
pub mod config;
pub mod events;
pub mod sources;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use config::AppConfig;
pub use events::AppEvent;
pub use sources::FactRotator;
