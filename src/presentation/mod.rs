mod components;
mod view;

pub use view::{FieldHit, UiContext, draw};
