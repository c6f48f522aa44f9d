//! XML tree model, parser and document wrapper

pub mod attr;
pub mod document;
pub mod node;
pub mod parser;

pub use attr::Attr;
pub use document::Document;
pub use node::Node;
pub use parser::{Config, Parser};
