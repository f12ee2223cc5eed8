pub mod classifier;
pub mod discovery;
pub mod extractor;

pub use classifier::{Grouping, classify};
pub use discovery::discover_source_files;
pub use extractor::read_source;
