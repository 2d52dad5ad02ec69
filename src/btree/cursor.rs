use super::error::BtreeError;
use super::node::LeafNode;
use crate::connection::Connection;
use crate::pager::error::PagerError;
use crate::row::Row;

///
/// Ephemeral position inside the root leaf. A cursor borrows the
/// connection mutably for its whole life and an insert consumes it,
/// so a stale cursor can never observe moved cells.
///
pub struct Cursor<'conn> {
    connection : &'conn mut Connection,
    page_num : u32,
    cell_num : u32,
    pub end_of_table : bool,
}

impl<'conn> Cursor<'conn> {
    pub(crate) fn new(
        connection : &'conn mut Connection,
        page_num : u32,
        cell_num : u32,
        end_of_table : bool,
    ) -> Self {
        Cursor {
            connection,
            page_num,
            cell_num,
            end_of_table,
        }
    }

    /// Deserialized row stored in the cell under the cursor.
    pub fn row(&mut self) -> Result<Row, PagerError> {
        let page = self.connection.pager.get_page(self.page_num)?;
        let node = LeafNode::new(page);

        Ok(Row::deserialize(node.value(self.cell_num)))
    }

    /// Steps to the next cell. The single leaf is the whole table,
    /// so advancing never crosses into another page.
    pub fn advance(&mut self) -> Result<(), PagerError> {
        let page = self.connection.pager.get_page(self.page_num)?;
        let num_cells = LeafNode::new(page).num_cells();

        self.cell_num += 1;
        if self.cell_num >= num_cells {
            self.end_of_table = true;
        }

        Ok(())
    }

    /// Inserts a cell at the cursor position, shifting any later
    /// cells one slot right.
    pub fn insert(self, key : u32, row : &Row) -> Result<(), BtreeError> {
        let page = self.connection.pager.get_page(self.page_num)?;

        LeafNode::new(page).insert_cell(self.cell_num, key, row)
    }
}
