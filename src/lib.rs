//! Single table embedded database: one page based file holding a
//! leaf node of (id, username, email) rows, driven from a tiny REPL.

pub mod btree;
pub mod connection;
pub mod pager;
pub mod row;
pub mod vm;
