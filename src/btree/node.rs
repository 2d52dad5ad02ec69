use bincode::{Decode, Encode};

use super::constants::{
    LEAF_NODE_CELL_SIZE,
    LEAF_NODE_HEADER_SIZE,
    LEAF_NODE_KEY_SIZE,
    LEAF_NODE_MAX_CELLS,
    LEAF_NODE_NUM_CELLS_OFFSET,
    LEAF_NODE_VALUE_SIZE,
    NODE_TYPE_OFFSET,
};
use super::error::BtreeError;
use crate::pager::constants::PAGE_SIZE;
use crate::row::{Row, BINCODE_CONFIG};

/// Tag byte stored at the front of every page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeType {
    Internal = 0,
    Leaf = 1,
}

/// On disk header of a leaf page. The is_root flag and parent
/// pointer are written but never consulted by the single leaf core.
#[derive(Encode, Decode, Debug)]
pub struct LeafHeader {
    pub node_type : u8,
    pub is_root : u8,
    pub parent : u64,
    pub num_cells : u32,
}

///
/// Typed view over one page buffer. Cells live behind the header:
///
///  --------------------------------------------------------
/// | header (14) | key 0 (4) | row 0 (293) | key 1 | row 1 ...
///  --------------------------------------------------------
///
pub struct LeafNode<'a> {
    buffer : &'a mut [u8; PAGE_SIZE],
}

impl<'a> LeafNode<'a> {
    pub fn new(buffer : &'a mut [u8; PAGE_SIZE]) -> Self {
        LeafNode { buffer }
    }

    /// Stamps the page as an empty leaf. The rest of the page is
    /// left untouched.
    pub fn initialize(&mut self) {
        let header = LeafHeader {
            node_type: NodeType::Leaf as u8,
            is_root: 0,
            parent: 0,
            num_cells: 0,
        };

        bincode::encode_into_slice(
            &header,
            &mut self.buffer[..LEAF_NODE_HEADER_SIZE],
            BINCODE_CONFIG,
        ).unwrap();
    }

    pub fn node_type(&self) -> NodeType {
        if self.buffer[NODE_TYPE_OFFSET] == NodeType::Leaf as u8 {
            NodeType::Leaf
        } else {
            NodeType::Internal
        }
    }

    pub fn num_cells(&self) -> u32 {
        self.get_u32(LEAF_NODE_NUM_CELLS_OFFSET)
    }

    fn set_num_cells(&mut self, num_cells : u32) {
        self.set_u32(LEAF_NODE_NUM_CELLS_OFFSET, num_cells);
    }

    pub fn key(&self, cell_num : u32) -> u32 {
        self.get_u32(Self::cell_offset(cell_num))
    }

    fn set_key(&mut self, cell_num : u32, key : u32) {
        self.set_u32(Self::cell_offset(cell_num), key);
    }

    /// Serialized row bytes of one cell.
    pub fn value(&self, cell_num : u32) -> &[u8] {
        let offs = Self::cell_offset(cell_num) + LEAF_NODE_KEY_SIZE;
        &self.buffer[offs..offs + LEAF_NODE_VALUE_SIZE]
    }

    fn value_mut(&mut self, cell_num : u32) -> &mut [u8] {
        let offs = Self::cell_offset(cell_num) + LEAF_NODE_KEY_SIZE;
        &mut self.buffer[offs..offs + LEAF_NODE_VALUE_SIZE]
    }

    /// Writes a cell at cell_num. Cells at and past that position
    /// move one slot right first.
    pub fn insert_cell(&mut self, cell_num : u32, key : u32, row : &Row) -> Result<(), BtreeError> {
        let num_cells = self.num_cells();
        if num_cells >= LEAF_NODE_MAX_CELLS as u32 {
            return Err(BtreeError::LeafFull);
        }

        if cell_num < num_cells {
            // Make room for the new cell, shifting from the tail down
            for i in (cell_num..num_cells).rev() {
                let src = Self::cell_offset(i);
                self.buffer.copy_within(src..src + LEAF_NODE_CELL_SIZE, src + LEAF_NODE_CELL_SIZE);
            }
        }

        self.set_num_cells(num_cells + 1);
        self.set_key(cell_num, key);
        row.serialize(self.value_mut(cell_num));

        Ok(())
    }

    fn cell_offset(cell_num : u32) -> usize {
        LEAF_NODE_HEADER_SIZE + cell_num as usize * LEAF_NODE_CELL_SIZE
    }

    fn get_u32(&self, offs : usize) -> u32 {
        u32::from_le_bytes(self.buffer[offs..offs + 4].try_into().unwrap())
    }

    fn set_u32(&mut self, offs : usize, data : u32) {
        self.buffer[offs..offs + 4].copy_from_slice(&data.to_le_bytes());
    }
}
