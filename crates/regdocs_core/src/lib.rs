pub mod config;
pub mod encode;
pub mod fetch;
pub mod frontmatter;
pub mod links;
pub mod output;
pub mod pipeline;
pub mod transform;
