//! Small helpers shared by the metadata, schema and content modules.

pub mod date;
pub mod html;
pub mod plural;
pub mod slug;

pub use plural::plural_count;
