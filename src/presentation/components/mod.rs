mod banner;
mod fields;
mod footer;
mod layout;

pub use banner::render_notices;
pub use fields::render_fields;
pub use footer::render_footer;
