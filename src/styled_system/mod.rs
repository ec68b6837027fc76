pub mod config;
pub mod css;
pub mod error;
pub mod patterns;
pub mod sheet;

pub use config::StyleConfig;
pub use css::{css, Atom, Classes};
pub use error::StyleError;
pub use patterns::{center, CenterOptions};
pub use sheet::Stylesheet;
