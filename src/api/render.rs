//! Server-rendered HTML pages
//!
//! Pages are assembled by plain string building with escaping; the layout
//! mirrors the original front-end: a listing page carrying the search and
//! add-note forms, an edit form, and a single-note view.

use crate::db::notes::Note;

/// Escape text for safe interpolation into HTML
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// The note listing page, with search forms and the add-note form.
/// `query` echoes the search box contents back to the user.
pub fn listing_page(notes: &[Note], query: &str) -> String {
    let mut body = String::new();
    body.push_str("<h1>Smart Notes Organizer</h1>\n");

    body.push_str(&format!(
        "<form id=\"search-form\" method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"query\" placeholder=\"Search notes\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n</form>\n",
        escape(query)
    ));
    body.push_str(
        "<form method=\"post\" action=\"/nlq_search\">\n\
         <input type=\"text\" name=\"query\" placeholder=\"Try: meeting last monday\">\n\
         <button type=\"submit\">Smart Search</button>\n</form>\n",
    );

    body.push_str(
        "<h2>Add a note</h2>\n\
         <form method=\"post\" action=\"/add_note\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"Title\" required>\n\
         <textarea id=\"content\" name=\"content\" placeholder=\"Content\" required></textarea>\n\
         <input type=\"text\" id=\"category\" name=\"category\" placeholder=\"Category\" required>\n\
         <input type=\"hidden\" name=\"sentiment\" value=\"\">\n\
         <input type=\"hidden\" name=\"summary\" value=\"\">\n\
         <button type=\"submit\">Save</button>\n</form>\n",
    );

    body.push_str("<h2>Notes</h2>\n");
    if notes.is_empty() {
        body.push_str("<p>No notes found.</p>\n");
    } else {
        body.push_str("<ul class=\"notes\">\n");
        for note in notes {
            body.push_str(&note_card(note));
        }
        body.push_str("</ul>\n");
    }

    page("Smart Notes Organizer", &body)
}

fn note_card(note: &Note) -> String {
    let mut card = format!(
        "<li class=\"note\">\n<h3>{}</h3>\n<p>{}</p>\n\
         <p class=\"meta\">Category: {} | Date: {}</p>\n",
        escape(&note.title),
        escape(&note.content),
        escape(&note.category),
        escape(&note.date),
    );
    if !note.sentiment.is_empty() {
        card.push_str(&format!(
            "<p class=\"sentiment\">Sentiment: {}</p>\n",
            escape(&note.sentiment)
        ));
    }
    if !note.summary.is_empty() {
        card.push_str(&format!(
            "<p class=\"summary\">Summary: {}</p>\n",
            escape(&note.summary)
        ));
    }
    card.push_str(&format!(
        "<p class=\"actions\">\
         <a href=\"/view_note/{id}\">View</a> \
         <a href=\"/edit_note/{id}\">Edit</a> \
         <a href=\"/delete_note/{id}\">Delete</a></p>\n</li>\n",
        id = note.id
    ));
    card
}

/// Edit form pre-filled with the note's fields. The stored date travels
/// through a hidden field so an edit preserves it unless the caller
/// rewrites it.
pub fn edit_page(note: &Note) -> String {
    let body = format!(
        "<h1>Edit note</h1>\n\
         <form method=\"post\" action=\"/edit_note/{id}\">\n\
         <input type=\"text\" name=\"title\" value=\"{title}\" required>\n\
         <textarea name=\"content\" required>{content}</textarea>\n\
         <input type=\"text\" name=\"category\" value=\"{category}\" required>\n\
         <input type=\"hidden\" name=\"date\" value=\"{date}\">\n\
         <input type=\"text\" name=\"sentiment\" value=\"{sentiment}\">\n\
         <input type=\"text\" name=\"summary\" value=\"{summary}\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n<p><a href=\"/\">Back to notes</a></p>",
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.content),
        category = escape(&note.category),
        date = escape(&note.date),
        sentiment = escape(&note.sentiment),
        summary = escape(&note.summary),
    );
    page("Edit note", &body)
}

/// Single-note view page
pub fn view_page(note: &Note) -> String {
    let body = format!(
        "<h1>{title}</h1>\n<p>{content}</p>\n\
         <p class=\"meta\">Category: {category} | Date: {date}</p>\n\
         <p class=\"sentiment\">Sentiment: {sentiment}</p>\n\
         <p class=\"summary\">Summary: {summary}</p>\n\
         <p><a href=\"/edit_note/{id}\">Edit</a> <a href=\"/\">Back to notes</a></p>",
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.content),
        category = escape(&note.category),
        date = escape(&note.date),
        sentiment = escape(&note.sentiment),
        summary = escape(&note.summary),
    );
    page(&note.title, &body)
}

/// 404 page for a missing note id
pub fn not_found_page(id: i64) -> String {
    let body = format!(
        "<h1>Note not found</h1>\n<p>No note with id {}.</p>\n<p><a href=\"/\">Back to notes</a></p>",
        id
    );
    page("Note not found", &body)
}
