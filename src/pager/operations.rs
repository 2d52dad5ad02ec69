use log::{debug, info};
use std::io::{Read, Seek, SeekFrom, Write};

use super::Pager;
use super::constants::{PAGE_SIZE, TABLE_MAX_PAGES};
use super::error::PagerError;

impl Pager {
    /// Hands out the in memory buffer for a page, lazily loading it
    /// from the file on a cache miss. Pages past the end of the file
    /// start out zeroed.
    pub fn get_page(&mut self, page_num : u32) -> Result<&mut [u8; PAGE_SIZE], PagerError> {
        if page_num as usize >= TABLE_MAX_PAGES {
            return Err(PagerError::OutOfBounds(page_num));
        }

        if self.pages[page_num as usize].is_none() {
            let mut page_buffer = Self::allocate_page_buffer();

            if (page_num as u64) * (PAGE_SIZE as u64) < self.file_length {
                debug!("Cache miss, reading page {} from disk", page_num);
                self.file.seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
                self.file.read_exact(page_buffer.as_mut_slice())?;
            }

            self.pages[page_num as usize] = Some(page_buffer);
            if page_num >= self.num_pages {
                self.num_pages = page_num + 1;
            }
        }

        match self.pages[page_num as usize].as_deref_mut() {
            Some(page) => Ok(page),
            None => Err(PagerError::EmptySlot(page_num)),
        }
    }

    /// Writes one full page back to its fixed offset in the file.
    pub fn flush_page(&mut self, page_num : u32) -> Result<(), PagerError> {
        let page = match self.pages.get(page_num as usize).and_then(|slot| slot.as_deref()) {
            Some(page) => page,
            None => return Err(PagerError::EmptySlot(page_num)),
        };

        debug!("Writing {} bytes to page {}", PAGE_SIZE, page_num);
        self.file.seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
        self.file.write_all(&page[..])?;

        Ok(())
    }

    /// Flushes every cached page below num_pages and releases the
    /// whole arena. The file handle closes when the pager drops.
    pub fn close(&mut self) -> Result<(), PagerError> {
        for page_num in 0..self.num_pages {
            if self.pages[page_num as usize].is_some() {
                self.flush_page(page_num)?;
                self.pages[page_num as usize] = None;
            }
        }

        for slot in self.pages.iter_mut() {
            *slot = None;
        }

        info!("Flushed cached pages and closed database file");
        Ok(())
    }
}
