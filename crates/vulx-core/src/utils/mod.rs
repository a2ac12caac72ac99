pub mod spawn;

pub use spawn::{open_path, spawn_detached, spawn_with_fallbacks};
