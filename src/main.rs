use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::process;

use tinytable::btree::constants::{
    COMMON_NODE_HEADER_SIZE,
    LEAF_NODE_CELL_SIZE,
    LEAF_NODE_HEADER_SIZE,
    LEAF_NODE_MAX_CELLS,
    LEAF_NODE_SPACE_FOR_CELLS,
};
use tinytable::btree::node::LeafNode;
use tinytable::connection::Connection;
use tinytable::row::ROW_SIZE;
use tinytable::vm::{
    execute_statement,
    prepare_statement,
    ExecuteError,
    ExecuteResult,
    PrepareError,
};

enum MetaCommand {
    Exit,
    Constants,
    Btree,
    Unrecognized,
}

impl From<&str> for MetaCommand {
    fn from(input : &str) -> Self {
        match input {
            ".exit" => MetaCommand::Exit,
            ".constants" => MetaCommand::Constants,
            ".btree" => MetaCommand::Btree,
            _ => MetaCommand::Unrecognized,
        }
    }
}

fn main() {
    env_logger::init();

    let args : Vec<String> = std::env::args().collect();
    let db_path = match args.get(1) {
        Some(path) => path,
        None => {
            println!("Must supply a database filename.");
            process::exit(1);
        }
    };

    let mut connection = match Connection::open(Path::new(db_path)) {
        Ok(connection) => connection,
        Err(error) => {
            println!("{}", error);
            process::exit(1);
        }
    };

    let mut input = String::new();
    loop {
        print!("db > ");
        if stdout().flush().is_err() {
            process::exit(1);
        }

        input.clear();
        let line = match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => {
                println!("Error reading input");
                process::exit(1);
            }
            Ok(_) => input.trim_end_matches('\n').trim_end_matches('\r'),
        };

        if line.is_empty() {
            continue;
        }

        if line.starts_with('.') {
            match MetaCommand::from(line) {
                MetaCommand::Exit => {
                    if let Err(error) = connection.close() {
                        println!("{}", error);
                        process::exit(1);
                    }
                    println!("byte...");
                    process::exit(0);
                }
                MetaCommand::Constants => {
                    println!("Constants:");
                    println!("ROW_SIZE: {}", ROW_SIZE);
                    println!("COMMON_NODE_HEADER_SIZE: {}", COMMON_NODE_HEADER_SIZE);
                    println!("LEAF_NODE_HEADER_SIZE: {}", LEAF_NODE_HEADER_SIZE);
                    println!("LEAF_NODE_CELL_SIZE: {}", LEAF_NODE_CELL_SIZE);
                    println!("LEAF_NODE_SPACE_FOR_CELLS: {}", LEAF_NODE_SPACE_FOR_CELLS);
                    println!("LEAF_NODE_MAX_CELLS: {}", LEAF_NODE_MAX_CELLS);
                }
                MetaCommand::Btree => match connection.root_page() {
                    Ok(page) => {
                        let node = LeafNode::new(page);
                        println!("Tree:");
                        println!("leaf (size {})", node.num_cells());
                        for i in 0..node.num_cells() {
                            println!("  - {} : {}", i, node.key(i));
                        }
                    }
                    Err(error) => {
                        println!("{}", error);
                        process::exit(1);
                    }
                },
                MetaCommand::Unrecognized => {
                    println!("Unrecognized command '{}'", line);
                }
            }
            continue;
        }

        let statement = match prepare_statement(line) {
            Ok(statement) => statement,
            Err(PrepareError::NegativeId) => {
                println!("ID must be positive.");
                continue;
            }
            Err(PrepareError::StringTooLong) => {
                println!("String is too long.");
                continue;
            }
            Err(PrepareError::Syntax) => {
                println!("Syntax error. Could not parse statement.");
                continue;
            }
            Err(PrepareError::Unrecognized) => {
                println!("Unrecognized keyword at start of '{}'", line);
                continue;
            }
        };

        match execute_statement(statement, &mut connection) {
            Ok(ExecuteResult::Success) => println!("Executed."),
            Ok(ExecuteResult::Rows(rows)) => {
                for row in &rows {
                    println!("{}", row);
                }
                println!("Executed.");
            }
            Err(ExecuteError::TableFull) => println!("Error: Table full."),
            Err(error) => {
                println!("{}", error);
                process::exit(1);
            }
        }
    }
}
