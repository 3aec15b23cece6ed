//! Document operations for the Tracker.

use log::info;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{DayplanError, Result},
    models::{ParsedPlan, StoredDocument},
    params::{Id, ImportDocument, Owner},
    parser::PlanParser,
};

impl Tracker {
    /// Stores a generated document verbatim.
    ///
    /// The body must contain text; the title falls back to the body's first
    /// non-empty line when blank.
    pub async fn import_document(&self, params: &ImportDocument) -> Result<StoredDocument> {
        if params.body.trim().is_empty() {
            return Err(DayplanError::invalid_input("body").with_reason("Document body is empty"));
        }
        if params.day_count == Some(0) {
            return Err(DayplanError::invalid_input("day_count")
                .with_reason("Day count must be at least one"));
        }

        let title = match params.title.trim() {
            "" => fallback_title(&params.body),
            title => title.to_string(),
        };

        let db_path = self.db_path.clone();
        let params = params.clone();

        let document = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_document(
                params.owner_id,
                &title,
                &params.body,
                params.day_count,
                params.status_label.as_deref(),
            )
        })
        .await
        .map_err(DayplanError::join)??;

        info!("Imported document {} for user {}", document.id, document.owner_id);
        Ok(document)
    }

    /// Retrieves a document by its ID.
    pub async fn get_document(&self, params: &Id) -> Result<Option<StoredDocument>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_document(id)
        })
        .await
        .map_err(DayplanError::join)?
    }

    /// Lists a user's documents, newest first.
    pub async fn list_documents(&self, params: &Owner) -> Result<Vec<StoredDocument>> {
        let db_path = self.db_path.clone();
        let owner_id = params.owner_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_documents(owner_id)
        })
        .await
        .map_err(DayplanError::join)?
    }

    /// Parses a stored document into its sections and days.
    ///
    /// Day numbers above the document's requested day count are dropped.
    pub async fn parse_document(&self, params: &Id) -> Result<(StoredDocument, ParsedPlan)> {
        let db_path = self.db_path.clone();
        let parser = self.parser.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let document = db
                .get_document(id)?
                .ok_or(DayplanError::DocumentNotFound { id })?;
            let parsed = parse_stored(&parser, &document);
            Ok((document, parsed))
        })
        .await
        .map_err(DayplanError::join)?
    }
}

/// Parses a stored document bounded by its own day count.
pub(crate) fn parse_stored(parser: &PlanParser, document: &StoredDocument) -> ParsedPlan {
    let options = parser.options().with_day_limit(document.day_count);
    parser.parse_with(&document.body, options)
}

fn fallback_title(body: &str) -> String {
    body.lines()
        .map(|line| line.trim().trim_matches(|c| c == '#' || c == '*').trim())
        .find(|line| !line.is_empty())
        .unwrap_or("Untitled plan")
        .chars()
        .take(80)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_title_uses_first_line() {
        assert_eq!(fallback_title("\n## **AI Plan** \nbody"), "AI Plan");
    }

    #[test]
    fn test_fallback_title_truncates() {
        let long = "x".repeat(200);
        assert_eq!(fallback_title(&long).len(), 80);
    }
}
