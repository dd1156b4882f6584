pub mod converters;
pub mod post;

pub use post::{json_post, json_post_with_config};
