// Resume document core: section mutators, derived views, and the per-session
// state container the HTTP handlers write through.

pub mod completeness;
pub mod handlers;
pub mod mutators;
pub mod preview;
pub mod progress;
pub mod session;
