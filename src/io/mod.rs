mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{parse_document_str, pointer_label, read_document, string_pointers};
pub use output::{serialize_document, write_document};
