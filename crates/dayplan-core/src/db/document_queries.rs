//! Stored document inserts and lookups.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use super::utils::{id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::StoredDocument,
};

const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (owner_id, title, body, day_count, status_label, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_DOCUMENT_SQL: &str = "SELECT id, owner_id, title, body, day_count, status_label, created_at FROM documents WHERE id = ?1";
const SELECT_DOCUMENTS_BY_OWNER_SQL: &str = "SELECT id, owner_id, title, body, day_count, status_label, created_at FROM documents WHERE owner_id = ?1 ORDER BY id DESC";

impl super::Database {
    fn build_document_from_row(row: &rusqlite::Row) -> rusqlite::Result<StoredDocument> {
        Ok(StoredDocument {
            id: id_column(row, 0)?,
            owner_id: id_column(row, 1)?,
            title: row.get(2)?,
            body: row.get(3)?,
            day_count: row.get::<_, Option<i64>>(4)?.map(|n| n as u32),
            status_label: row.get(5)?,
            created_at: timestamp_column(row, 6)?,
        })
    }

    /// Stores a generated document verbatim.
    pub fn insert_document(
        &mut self,
        owner_id: u64,
        title: &str,
        body: &str,
        day_count: Option<u32>,
        status_label: Option<&str>,
    ) -> Result<StoredDocument> {
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_DOCUMENT_SQL,
                params![
                    owner_id as i64,
                    title,
                    body,
                    day_count.map(i64::from),
                    status_label,
                    now.to_string()
                ],
            )
            .db_context("Failed to insert document")?;

        Ok(StoredDocument {
            id: self.connection.last_insert_rowid() as u64,
            owner_id,
            title: title.to_string(),
            body: body.to_string(),
            day_count,
            status_label: status_label.map(String::from),
            created_at: now,
        })
    }

    /// Retrieves a document by its ID.
    pub fn get_document(&self, id: u64) -> Result<Option<StoredDocument>> {
        self.connection
            .query_row(SELECT_DOCUMENT_SQL, params![id as i64], Self::build_document_from_row)
            .optional()
            .db_context("Failed to query document")
    }

    /// Lists a user's documents, newest first.
    pub fn list_documents(&self, owner_id: u64) -> Result<Vec<StoredDocument>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENTS_BY_OWNER_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_map(params![owner_id as i64], Self::build_document_from_row)
            .db_context("Failed to query documents")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read document row")
    }
}
