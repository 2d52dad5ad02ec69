use log::info;
use std::path::Path;

use crate::btree::cursor::Cursor;
use crate::btree::node::LeafNode;
use crate::pager::Pager;
use crate::pager::constants::PAGE_SIZE;
use crate::pager::error::PagerError;

///
/// User facing handle for one database file: a pager bound to the
/// page number of the table's root node.
///
pub struct Connection {
    pub(crate) pager : Pager,
    root_page_num : u32,
}

impl Connection {
    /// Opens (or creates) the database file. A fresh file gets its
    /// page 0 stamped as an empty leaf before anything else can
    /// observe it.
    pub fn open(db_path : &Path) -> Result<Connection, PagerError> {
        let mut pager = Pager::open(db_path)?;

        if pager.num_pages == 0 {
            let page = pager.get_page(0)?;
            LeafNode::new(page).initialize();
            info!("Initializing database root node");
        } else {
            info!("Database already initialized");
        }

        Ok(Connection {
            pager,
            root_page_num: 0,
        })
    }

    /// Flushes every cached page and releases the file.
    pub fn close(mut self) -> Result<(), PagerError> {
        self.pager.close()
    }

    /// Cursor at the first cell of the table.
    pub fn start(&mut self) -> Result<Cursor<'_>, PagerError> {
        let num_cells = self.root_num_cells()?;
        let page_num = self.root_page_num;

        Ok(Cursor::new(self, page_num, 0, num_cells == 0))
    }

    /// Cursor one past the last cell.
    pub fn end(&mut self) -> Result<Cursor<'_>, PagerError> {
        let num_cells = self.root_num_cells()?;
        let page_num = self.root_page_num;

        Ok(Cursor::new(self, page_num, num_cells, true))
    }

    pub fn root_num_cells(&mut self) -> Result<u32, PagerError> {
        let page = self.pager.get_page(self.root_page_num)?;

        Ok(LeafNode::new(page).num_cells())
    }

    /// Raw root page buffer, used by the tree printing meta command.
    pub fn root_page(&mut self) -> Result<&mut [u8; PAGE_SIZE], PagerError> {
        self.pager.get_page(self.root_page_num)
    }
}
