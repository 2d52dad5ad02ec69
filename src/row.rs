use std::borrow::Cow;
use std::fmt;

use bincode::{
    Decode,
    Encode,
    config::{Configuration, Fixint, LittleEndian}
};

/// Everything on disk is encoded with fixed width little endian
/// integers so the layout constants below stay byte exact.
pub const BINCODE_CONFIG : Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

pub const COLUMN_USERNAME_SIZE : usize = 32;
pub const COLUMN_EMAIL_SIZE : usize = 255;

// Field widths include one byte for the NUL terminator
pub const ID_SIZE : usize = 4;
pub const USERNAME_SIZE : usize = COLUMN_USERNAME_SIZE + 1;
pub const EMAIL_SIZE : usize = COLUMN_EMAIL_SIZE + 1;
pub const ID_OFFSET : usize = 0;
pub const USERNAME_OFFSET : usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET : usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE : usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

///
/// A cell value is stored as:
///
///  --------------------------------------------
/// | id (4) | username (33)   | email (256)     |
///  --------------------------------------------
///
/// String fields are NUL terminated, the suffix past the terminator
/// stays zeroed.
///
#[derive(Encode, Decode, Debug, Clone, PartialEq)]
pub struct Row {
    pub id : u32,
    username : [u8; USERNAME_SIZE],
    email : [u8; EMAIL_SIZE],
}

impl Row {
    /// Returns None when a field exceeds its column capacity, so the
    /// terminator byte always fits inside the field.
    pub fn new(id : u32, username : &str, email : &str) -> Option<Row> {
        if username.len() > COLUMN_USERNAME_SIZE || email.len() > COLUMN_EMAIL_SIZE {
            return None;
        }

        let mut row = Row {
            id,
            username: [0u8; USERNAME_SIZE],
            email: [0u8; EMAIL_SIZE],
        };
        row.username[..username.len()].copy_from_slice(username.as_bytes());
        row.email[..email.len()].copy_from_slice(email.as_bytes());

        Some(row)
    }

    /// Writes exactly ROW_SIZE bytes at the documented offsets.
    pub fn serialize(&self, buf : &mut [u8]) {
        bincode::encode_into_slice(self, &mut buf[..ROW_SIZE], BINCODE_CONFIG).unwrap();
    }

    pub fn deserialize(buf : &[u8]) -> Row {
        bincode::decode_from_slice(&buf[..ROW_SIZE], BINCODE_CONFIG).unwrap().0
    }

    pub fn username(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(until_nul(&self.username))
    }

    pub fn email(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(until_nul(&self.email))
    }
}

fn until_nul(field : &[u8]) -> &[u8] {
    match field.iter().position(|b| *b == 0) {
        Some(end) => &field[..end],
        None => field,
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username(), self.email())
    }
}
