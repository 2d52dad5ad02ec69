pub mod constants;
pub mod error;
pub mod operations;

use log::info;
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;

use self::constants::{PAGE_SIZE, TABLE_MAX_PAGES};
use self::error::PagerError;

///
/// Owns the database file and a fixed capacity arena of page
/// buffers indexed by page number. Every read or write of the file
/// goes through here, one slot per page, whole pages only.
///
pub struct Pager {
    file : File,
    pub file_length : u64,
    pub num_pages : u32,
    pages : Vec<Option<Box<[u8; PAGE_SIZE]>>>,
}

impl Pager {
    pub fn open(db_path : &Path) -> Result<Pager, PagerError> {
        let mut file = File::options()
            .read(true)
            .write(true)
            .create(true)
            .open(db_path)?;

        let file_length = file.seek(SeekFrom::End(0))?;
        if file_length % PAGE_SIZE as u64 != 0 {
            return Err(PagerError::Corrupt(file_length));
        }

        let mut pages = Vec::with_capacity(TABLE_MAX_PAGES);
        pages.resize_with(TABLE_MAX_PAGES, || None);

        let num_pages = (file_length / PAGE_SIZE as u64) as u32;
        info!("Opened database file holding {} pages", num_pages);

        Ok(Pager {
            file,
            file_length,
            num_pages,
            pages,
        })
    }

    pub fn allocate_page_buffer() -> Box<[u8; PAGE_SIZE]> {
        Box::new([0u8; PAGE_SIZE])
    }
}
