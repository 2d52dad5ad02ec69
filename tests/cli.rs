use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

fn run_script(db_path : &Path, commands : &[&str]) -> (String, ExitStatus) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tinytable"))
        .arg(db_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn database process");

    let mut stdin = child.stdin.take().expect("failed to open stdin");
    for command in commands {
        stdin.write_all(command.as_bytes()).expect("failed to write to stdin");
        stdin.write_all(b"\n").expect("failed to write to stdin");
    }
    drop(stdin);

    let output = child.wait_with_output().expect("failed to read process output");
    (String::from_utf8(output.stdout).expect("stdout was not utf-8"), output.status)
}

#[test]
fn selecting_an_empty_table_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, status) = run_script(&dir.path().join("test.db"), &["select", ".exit"]);

    assert_eq!(stdout, "db > Executed.\ndb > byte...\n");
    assert!(status.success());
}

#[test]
fn inserts_and_retrieves_a_row() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, status) = run_script(
        &dir.path().join("test.db"),
        &["insert 1 alice a@x", "select", ".exit"],
    );

    assert_eq!(
        stdout,
        "db > Executed.\ndb > (1, alice, a@x)\nExecuted.\ndb > byte...\n"
    );
    assert!(status.success());
}

#[test]
fn rejects_a_negative_id() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _) = run_script(&dir.path().join("test.db"), &["insert -7 bob b@x", ".exit"]);

    assert_eq!(stdout, "db > ID must be positive.\ndb > byte...\n");
}

#[test]
fn rejects_overlong_strings() {
    let dir = tempfile::tempdir().unwrap();
    let long_username = format!("insert 2 {} e@x", "u".repeat(33));
    let (stdout, _) = run_script(&dir.path().join("test.db"), &[&long_username, ".exit"]);

    assert_eq!(stdout, "db > String is too long.\ndb > byte...\n");
}

#[test]
fn accepts_strings_at_the_column_limit() {
    let dir = tempfile::tempdir().unwrap();
    let username = "u".repeat(32);
    let email = "e".repeat(255);
    let insert = format!("insert 1 {} {}", username, email);
    let (stdout, _) = run_script(&dir.path().join("test.db"), &[&insert, "select", ".exit"]);

    assert_eq!(
        stdout,
        format!("db > Executed.\ndb > (1, {}, {})\nExecuted.\ndb > byte...\n", username, email)
    );
}

#[test]
fn reports_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _) = run_script(&dir.path().join("test.db"), &["insert 1 alice", ".exit"]);

    assert_eq!(
        stdout,
        "db > Syntax error. Could not parse statement.\ndb > byte...\n"
    );
}

#[test]
fn reports_unrecognized_keywords() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _) = run_script(&dir.path().join("test.db"), &["update 1", ".exit"]);

    assert_eq!(
        stdout,
        "db > Unrecognized keyword at start of 'update 1'\ndb > byte...\n"
    );
}

#[test]
fn reports_unrecognized_meta_commands() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _) = run_script(&dir.path().join("test.db"), &[".tables", ".exit"]);

    assert_eq!(stdout, "db > Unrecognized command '.tables'\ndb > byte...\n");
}

#[test]
fn rows_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");

    let (stdout, status) = run_script(&path, &["insert 1 a a@x", "insert 2 b b@x", ".exit"]);
    assert_eq!(stdout, "db > Executed.\ndb > Executed.\ndb > byte...\n");
    assert!(status.success());

    let (stdout, status) = run_script(&path, &["select", ".exit"]);
    assert_eq!(
        stdout,
        "db > (1, a, a@x)\n(2, b, b@x)\nExecuted.\ndb > byte...\n"
    );
    assert!(status.success());
}

#[test]
fn reports_a_full_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");

    let inserts : Vec<String> = (1..=14)
        .map(|i| format!("insert {} user{} person{}@example.com", i, i, i))
        .collect();
    let mut commands : Vec<&str> = inserts.iter().map(|s| s.as_str()).collect();
    commands.push(".exit");

    let (stdout, _) = run_script(&path, &commands);
    let expected = format!(
        "{}db > Error: Table full.\ndb > byte...\n",
        "db > Executed.\n".repeat(13)
    );
    assert_eq!(stdout, expected);
}

#[test]
fn prints_layout_constants() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _) = run_script(&dir.path().join("test.db"), &[".constants", ".exit"]);

    assert_eq!(
        stdout,
        "db > Constants:\n\
         ROW_SIZE: 293\n\
         COMMON_NODE_HEADER_SIZE: 10\n\
         LEAF_NODE_HEADER_SIZE: 14\n\
         LEAF_NODE_CELL_SIZE: 297\n\
         LEAF_NODE_SPACE_FOR_CELLS: 4082\n\
         LEAF_NODE_MAX_CELLS: 13\n\
         db > byte...\n"
    );
}

#[test]
fn prints_the_tree_in_arrival_order() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _) = run_script(
        &dir.path().join("test.db"),
        &["insert 3 c c@x", "insert 1 a a@x", "insert 2 b b@x", ".btree", ".exit"],
    );

    assert_eq!(
        stdout,
        "db > Executed.\ndb > Executed.\ndb > Executed.\n\
         db > Tree:\n\
         leaf (size 3)\n  - 0 : 3\n  - 1 : 1\n  - 2 : 2\n\
         db > byte...\n"
    );
}

#[test]
fn requires_a_database_filename() {
    let output = Command::new(env!("CARGO_BIN_EXE_tinytable"))
        .stdin(Stdio::null())
        .output()
        .expect("failed to spawn database process");

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Must supply a database filename.\n"
    );
    assert!(!output.status.success());
}

#[test]
fn end_of_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, status) = run_script(&dir.path().join("test.db"), &["select"]);

    assert_eq!(stdout, "db > Executed.\ndb > Error reading input\n");
    assert!(!status.success());
}
