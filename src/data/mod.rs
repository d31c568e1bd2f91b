pub mod parser;

pub use parser::{load_records, parse_records, Dataset};
