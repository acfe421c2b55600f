//! Parser layer for reading delimiter-separated files

mod header;
mod reader;

pub use self::header::{load_header, match_header};
pub use self::reader::DelimitedReader;
