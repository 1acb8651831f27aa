//! Search filters for note listings
//!
//! Builds the WHERE clause for the two search modes: a plain substring
//! match across every text field, and the natural-language mode that
//! combines keyword tokens with an optional date expression.

pub mod date;

use chrono::NaiveDate;

/// Text fields a keyword can match against
const SEARCH_FIELDS: [&str; 5] = ["title", "content", "category", "sentiment", "summary"];

/// A parsed natural-language query: keyword tokens plus an optional date
#[derive(Debug, Clone, PartialEq)]
pub struct NlqQuery {
    /// Whitespace-separated tokens longer than two characters
    pub keywords: Vec<String>,
    /// Day extracted from the query text, if any
    pub date: Option<NaiveDate>,
}

/// Filter applied when listing notes
#[derive(Debug, Clone, PartialEq)]
pub enum NoteFilter {
    /// No conditions; every note matches
    All,
    /// One case-insensitive substring matched against every field
    Substring(String),
    /// Combined keyword/date conditions
    Nlq(NlqQuery),
}

impl NoteFilter {
    /// Plain substring filter for the listing search box.
    /// A blank query applies no conditions.
    pub fn substring(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            NoteFilter::All
        } else {
            NoteFilter::Substring(trimmed.to_string())
        }
    }

    /// Natural-language filter: tokenize keywords and scan for a date
    /// expression, relative to `today`. A query with no parseable date and
    /// no tokens over two characters applies no conditions, so the listing
    /// falls back to every note rather than none.
    pub fn nlq(raw: &str, today: NaiveDate) -> Self {
        let keywords = tokenize(raw);
        let date = date::parse_date(raw, today);
        if keywords.is_empty() && date.is_none() {
            NoteFilter::All
        } else {
            NoteFilter::Nlq(NlqQuery { keywords, date })
        }
    }

    /// Render the filter as a SQL WHERE fragment plus positional params.
    /// An empty fragment means no conditions.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        match self {
            NoteFilter::All => (String::new(), Vec::new()),
            NoteFilter::Substring(query) => {
                let pattern = like_pattern(query);
                (fields_clause(), vec![pattern; SEARCH_FIELDS.len()])
            }
            NoteFilter::Nlq(nlq) => {
                let mut clauses = Vec::new();
                let mut params = Vec::new();

                if let Some(date) = nlq.date {
                    // Stored dates are "YYYY-MM-DD HH:MM:SS"; compare at
                    // day granularity.
                    clauses.push("substr(date, 1, 10) = ?".to_string());
                    params.push(date.format("%Y-%m-%d").to_string());
                }

                // AND across tokens, OR across fields within a token
                for keyword in &nlq.keywords {
                    clauses.push(fields_clause());
                    let pattern = like_pattern(keyword);
                    for _ in SEARCH_FIELDS {
                        params.push(pattern.clone());
                    }
                }

                (clauses.join(" AND "), params)
            }
        }
    }
}

/// Keep whitespace-separated tokens longer than two characters
fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(|token| token.to_string())
        .collect()
}

fn like_pattern(term: &str) -> String {
    format!("%{}%", term)
}

fn fields_clause() -> String {
    let parts: Vec<String> = SEARCH_FIELDS
        .iter()
        .map(|field| format!("{} LIKE ?", field))
        .collect();
    format!("({})", parts.join(" OR "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("go to the market"), vec!["the", "market"]);
        assert_eq!(tokenize("a an it"), Vec::<String>::new());
        assert_eq!(tokenize("  meeting   notes "), vec!["meeting", "notes"]);
    }

    #[test]
    fn test_substring_blank_is_all() {
        assert_eq!(NoteFilter::substring(""), NoteFilter::All);
        assert_eq!(NoteFilter::substring("   "), NoteFilter::All);
        assert_eq!(
            NoteFilter::substring(" meeting "),
            NoteFilter::Substring("meeting".to_string())
        );
    }

    #[test]
    fn test_substring_sql() {
        let (clause, params) = NoteFilter::substring("meeting").to_sql();
        assert_eq!(
            clause,
            "(title LIKE ? OR content LIKE ? OR category LIKE ? OR sentiment LIKE ? OR summary LIKE ?)"
        );
        assert_eq!(params, vec!["%meeting%"; 5]);
    }

    #[test]
    fn test_all_sql_is_empty() {
        let (clause, params) = NoteFilter::All.to_sql();
        assert!(clause.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_nlq_degenerates_to_all() {
        // Short tokens only, nothing parseable as a date
        assert_eq!(NoteFilter::nlq("an it of", today()), NoteFilter::All);
        assert_eq!(NoteFilter::nlq("", today()), NoteFilter::All);
    }

    #[test]
    fn test_nlq_keywords_only() {
        let filter = NoteFilter::nlq("budget review", today());
        let (clause, params) = filter.to_sql();
        // Two tokens, each OR'd across the five fields, AND'd together
        assert_eq!(clause.matches("LIKE ?").count(), 10);
        assert_eq!(clause.matches(" AND ").count(), 1);
        assert_eq!(params.len(), 10);
        assert_eq!(params[0], "%budget%");
        assert_eq!(params[5], "%review%");
    }

    #[test]
    fn test_nlq_date_only() {
        let filter = NoteFilter::nlq("2024-06-10", today());
        match &filter {
            NoteFilter::Nlq(nlq) => {
                assert_eq!(nlq.date, NaiveDate::from_ymd_opt(2024, 6, 10));
                // The date text itself is still a token
                assert_eq!(nlq.keywords, vec!["2024-06-10"]);
            }
            other => panic!("expected Nlq filter, got {:?}", other),
        }

        let (clause, params) = filter.to_sql();
        assert!(clause.starts_with("substr(date, 1, 10) = ?"));
        assert_eq!(params[0], "2024-06-10");
    }

    #[test]
    fn test_nlq_combined_clause_order() {
        let filter = NoteFilter::nlq("meeting yesterday", today());
        let (clause, params) = filter.to_sql();
        assert!(clause.starts_with("substr(date, 1, 10) = ? AND "));
        assert_eq!(params[0], "2024-06-11");
        assert_eq!(params[1], "%meeting%");
    }
}
