use std::fmt;

use crate::btree::constants::LEAF_NODE_MAX_CELLS;
use crate::btree::error::BtreeError;
use crate::connection::Connection;
use crate::pager::error::PagerError;
use crate::row::Row;

pub enum Statement {
    Insert { row : Row },
    Select,
}

/// Recoverable errors in the textual statement parser. The REPL
/// reports these and keeps going.
#[derive(Debug, PartialEq)]
pub enum PrepareError {
    Syntax,
    NegativeId,
    StringTooLong,
    Unrecognized,
}

#[derive(Debug)]
pub enum ExecuteResult {
    Success,
    Rows(Vec<Row>),
}

#[derive(Debug)]
pub enum ExecuteError {
    /// The root leaf has no free cells left.
    TableFull,
    Storage(BtreeError),
}

impl From<BtreeError> for ExecuteError {
    fn from(error : BtreeError) -> Self {
        ExecuteError::Storage(error)
    }
}

impl From<PagerError> for ExecuteError {
    fn from(error : PagerError) -> Self {
        ExecuteError::Storage(BtreeError::Pager(error))
    }
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecuteError::TableFull => write!(f, "table is full"),
            ExecuteError::Storage(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ExecuteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecuteError::TableFull => None,
            ExecuteError::Storage(error) => Some(error),
        }
    }
}

/// Tokenizes one input line into a statement. The first token picks
/// the keyword, tokens after an insert's email are ignored.
pub fn prepare_statement(input : &str) -> Result<Statement, PrepareError> {
    if input.starts_with("insert") {
        let mut parts = input.split_whitespace();
        parts.next();

        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(username), Some(email)) => {
                let id : i64 = id.parse().map_err(|_| PrepareError::Syntax)?;
                if id < 0 {
                    return Err(PrepareError::NegativeId);
                }
                let id = u32::try_from(id).map_err(|_| PrepareError::Syntax)?;

                let row = Row::new(id, username, email).ok_or(PrepareError::StringTooLong)?;
                Ok(Statement::Insert { row })
            }
            _ => Err(PrepareError::Syntax),
        }
    } else if input.starts_with("select") {
        Ok(Statement::Select)
    } else {
        Err(PrepareError::Unrecognized)
    }
}

pub fn execute_statement(
    statement : Statement,
    connection : &mut Connection,
) -> Result<ExecuteResult, ExecuteError> {
    match statement {
        Statement::Insert { row } => execute_insert(row, connection),
        Statement::Select => execute_select(connection),
    }
}

/// Appends through an end cursor after checking capacity, so the
/// leaf overflow exit inside the node stays unreachable.
fn execute_insert(row : Row, connection : &mut Connection) -> Result<ExecuteResult, ExecuteError> {
    if connection.root_num_cells()? >= LEAF_NODE_MAX_CELLS as u32 {
        return Err(ExecuteError::TableFull);
    }

    let cursor = connection.end()?;
    cursor.insert(row.id, &row)?;

    Ok(ExecuteResult::Success)
}

fn execute_select(connection : &mut Connection) -> Result<ExecuteResult, ExecuteError> {
    let mut rows = Vec::new();
    let mut cursor = connection.start()?;

    while !cursor.end_of_table {
        rows.push(cursor.row()?);
        cursor.advance()?;
    }

    Ok(ExecuteResult::Rows(rows))
}
