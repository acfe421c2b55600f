//! Data model for header columns, composite keys and numeric tokens

mod header;
mod key;
mod numeric;

pub use header::{Header, HeaderRow};
pub use key::{CompositeKey, KeyBuilder, KeyedRow};
pub use numeric::{is_numeric, parse_numeric};
