//! Local content files: reading them and cleaning them up after publishing.

mod cleanup;
mod front_matter;
mod markdown_reader;

pub use cleanup::{CleanupOutcome, SourceCleanup};
pub use front_matter::{FrontMatter, SplitDocument, parse_front_matter, split_document};
pub use markdown_reader::{ContentBatch, MarkdownReader, parse_source};
