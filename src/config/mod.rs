//! Runtime configuration for poster generation.
//!
//! Two sources feed a run:
//!
//! - [`Settings`]: model, endpoint, aspect ratio, inter-call delay, and output
//!   root. Defaults are fixed constants; CLI flags override them.
//! - [`credentials`]: API key discovery from the flag/environment or from the
//!   first INI config file that carries one.

pub mod credentials;
mod model;


pub use credentials::resolve_api_key;
pub use model::Settings;
