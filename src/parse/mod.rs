pub mod frontmatter;

pub use frontmatter::{parse_metadata, read_metadata, render_document, split_frontmatter};
