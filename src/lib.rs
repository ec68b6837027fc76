pub mod app;
pub mod components;
pub mod markup;
pub mod pages;
pub mod styled_system;

pub use markup::{Element, Node};
pub use pages::home::landing;
