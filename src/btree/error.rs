use std::fmt;

use crate::pager::error::PagerError;

/// Failures surfaced by leaf node and cursor operations.
#[derive(Debug)]
pub enum BtreeError {
    Pager(PagerError),
    /// The single leaf core cannot grow past one page. Splitting a
    /// leaf node is the extension point for a multi node tree.
    LeafFull,
}

impl From<PagerError> for BtreeError {
    fn from(error : PagerError) -> Self {
        BtreeError::Pager(error)
    }
}

impl fmt::Display for BtreeError {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BtreeError::Pager(e) => write!(f, "{}", e),
            BtreeError::LeafFull => write!(f, "Need to implement splitting a leaf node."),
        }
    }
}

impl std::error::Error for BtreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BtreeError::Pager(e) => Some(e),
            BtreeError::LeafFull => None,
        }
    }
}
