mod binding;
mod inline_ui;
pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod runtime;
mod status;
mod terminal;

pub use binding::FieldBinding;
pub use inline_ui::InlineEditUI;
pub use options::UiOptions;
