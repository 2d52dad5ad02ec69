pub mod constants;
pub mod cursor;
pub mod error;
pub mod node;
