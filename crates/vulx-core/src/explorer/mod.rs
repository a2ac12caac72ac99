// File explorer core: navigation history, directory listing and the
// explorer window state that ties them together.

mod navigation;
mod types;
mod window;

pub use navigation::History;
pub use types::{listing, Child, Filesystem, HostFs, Listing};
pub use window::{Activation, Explorer};
