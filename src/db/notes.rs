//! Note store operations
//!
//! CRUD plus filtered listing over the `notes` table. All functions take a
//! borrowed connection; callers hold the `Database` lock for the duration
//! of one operation only.

use crate::error::{AppError, Result};
use crate::search::NoteFilter;
use rusqlite::{params, params_from_iter, Connection};

/// A stored note
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS`, preserved verbatim on
    /// edits (caller-supplied on update).
    pub date: String,
    pub sentiment: String,
    pub summary: String,
}

/// Fields for a new note; `date` is assigned by the store
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: String,
    pub sentiment: String,
    pub summary: String,
}

/// Full-replace fields for an update, including the caller-supplied `date`
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: String,
    pub sentiment: String,
    pub summary: String,
}

const NOTE_COLUMNS: &str = "id, title, content, category, date, sentiment, summary";

fn row_to_note(row: &rusqlite::Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        sentiment: row.get(5)?,
        summary: row.get(6)?,
    })
}

/// Insert a note, stamping it with the current local time.
/// Returns the new row id.
pub fn insert_note(conn: &Connection, note: &NewNote) -> Result<i64> {
    let date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    insert_note_at(conn, note, &date)
}

/// Insert a note with an explicit timestamp
pub fn insert_note_at(conn: &Connection, note: &NewNote, date: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO notes (title, content, category, date, sentiment, summary)
         VALUES (?, ?, ?, ?, ?, ?)",
        params![
            note.title,
            note.content,
            note.category,
            date,
            note.sentiment,
            note.summary
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fetch a single note by id
pub fn get_note(conn: &Connection, id: i64) -> Result<Option<Note>> {
    let sql = format!("SELECT {} FROM notes WHERE id = ?", NOTE_COLUMNS);
    match conn.query_row(&sql, [id], row_to_note) {
        Ok(note) => Ok(Some(note)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List notes matching the filter, in storage (insertion) order.
/// No ORDER BY: rowid order is insertion order for this table.
pub fn list_notes(conn: &Connection, filter: &NoteFilter) -> Result<Vec<Note>> {
    let (clause, params) = filter.to_sql();
    let sql = if clause.is_empty() {
        format!("SELECT {} FROM notes", NOTE_COLUMNS)
    } else {
        format!("SELECT {} FROM notes WHERE {}", NOTE_COLUMNS, clause)
    };

    let mut stmt = conn.prepare(&sql)?;
    let notes = stmt
        .query_map(params_from_iter(params.iter()), row_to_note)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(notes)
}

/// Replace every field of a note except its id.
/// Fails with `NotFound` when no row with that id exists.
pub fn update_note(conn: &Connection, id: i64, update: &NoteUpdate) -> Result<()> {
    let affected = conn.execute(
        "UPDATE notes SET title = ?, content = ?, category = ?, date = ?, sentiment = ?, summary = ?
         WHERE id = ?",
        params![
            update.title,
            update.content,
            update.category,
            update.date,
            update.sentiment,
            update.summary,
            id
        ],
    )?;
    if affected == 0 {
        return Err(AppError::NotFound("Note", id));
    }
    Ok(())
}

/// Delete a note by id. Deleting an absent id affects zero rows and is
/// reported as false, not an error.
pub fn delete_note(conn: &Connection, id: i64) -> Result<bool> {
    let affected = conn.execute("DELETE FROM notes WHERE id = ?", params![id])?;
    Ok(affected > 0)
}
