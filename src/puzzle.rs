pub mod grid;
pub mod path;
pub mod reader;
