pub mod dom;
pub mod refs;

pub use dom::{bounding_rect, closest, containing_block_offset, is_dark_theme, offset_rect};
pub use refs::{merge_refs, RefSink};
