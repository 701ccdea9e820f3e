mod components;
mod layout;
pub mod theme;

pub use layout::render;
