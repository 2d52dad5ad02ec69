use std::fmt;

use super::constants::TABLE_MAX_PAGES;

/// Storage layer failures. Every variant is fatal to the session,
/// the binary reports it and exits instead of recovering.
#[derive(Debug)]
pub enum PagerError {
    Io(std::io::Error),
    /// File length is not a whole number of pages.
    Corrupt(u64),
    /// Page number past the fixed arena capacity.
    OutOfBounds(u32),
    /// Flush requested for a slot that holds no buffer.
    EmptySlot(u32),
}

impl From<std::io::Error> for PagerError {
    fn from(error : std::io::Error) -> Self {
        PagerError::Io(error)
    }
}

impl fmt::Display for PagerError {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagerError::Io(e) => write!(f, "IO error: {}", e),
            PagerError::Corrupt(length) => {
                write!(f, "db file is not a whole number of pages ({} bytes), corrupt file", length)
            }
            PagerError::OutOfBounds(page_num) => {
                write!(f, "tried to fetch page number out of bounds: {} >= {}", page_num, TABLE_MAX_PAGES)
            }
            PagerError::EmptySlot(page_num) => {
                write!(f, "tried to flush an empty page slot: {}", page_num)
            }
        }
    }
}

impl std::error::Error for PagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PagerError::Io(e) => Some(e),
            _ => None,
        }
    }
}
