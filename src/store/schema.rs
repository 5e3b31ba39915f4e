//! Table creation and in-place upgrades of older database files.

use rusqlite::Connection;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL,
    name TEXT,
    email TEXT
)";

const CREATE_CONSUMPTION: &str = "CREATE TABLE IF NOT EXISTS consumption (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    electricity REAL DEFAULT 0,
    water REAL DEFAULT 0,
    gas REAL DEFAULT 0,
    entry_date DATE DEFAULT (DATE('now', 'localtime')),
    oil REAL DEFAULT 0,
    cng REAL DEFAULT 0,
    petrol REAL DEFAULT 0,
    FOREIGN KEY(user_id) REFERENCES users(id)
)";

/// Columns added after the first release; older files lack them.
const LATE_COLUMNS: [(&str, &str); 3] = [
    ("oil", "REAL DEFAULT 0"),
    ("cng", "REAL DEFAULT 0"),
    ("petrol", "REAL DEFAULT 0"),
];

pub(super) fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(CREATE_USERS, [])?;
    conn.execute(CREATE_CONSUMPTION, [])?;
    add_missing_columns(conn)
}

fn add_missing_columns(conn: &Connection) -> rusqlite::Result<()> {
    let existing = table_columns(conn, "consumption")?;
    for (column, datatype) in LATE_COLUMNS {
        if existing.iter().any(|c| c == column) {
            continue;
        }
        log::info!("Adding missing column consumption.{}", column);
        conn.execute(
            &format!("ALTER TABLE consumption ADD COLUMN {} {}", column, datatype),
            [],
        )?;
    }
    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}
