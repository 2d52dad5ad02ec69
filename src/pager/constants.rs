pub const PAGE_SIZE : usize = 4096;
pub const TABLE_MAX_PAGES : usize = 100;
