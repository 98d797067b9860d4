pub mod component;
pub mod render;

pub use component::TokenView;
