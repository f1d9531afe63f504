// crates/arena_host/src/input/mod.rs
pub mod config;
pub mod keys;
pub mod map;
pub mod poller;
pub mod registry;

// Re-export core types to keep the API `crate::input::ActionRegistry`
pub use config::InputDefaults;
pub use keys::KeyCode;
pub use map::InputMap;
pub use poller::InputPoller;
pub use registry::ActionRegistry;
