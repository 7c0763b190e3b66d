//! Persistence operations for URL records.
//!
//! Inserts re-run the validation gate so no row can ever hold a URL the
//! gate would reject, even if a caller skips the API-level check.
//! Concurrent inserts are serialized by the database itself.

use sea_orm::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{QueryOrder, QuerySelect};

use crate::validate::{validate_url, ValidationError};

/// Listings always return the newest slice, at most this many rows.
pub const DEFAULT_LIST_LIMIT: u64 = 20;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The caller's input was rejected. Not a system fault.
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    /// The database could not be reached or the statement failed.
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// Persists a new record and returns it as stored.
///
/// `url` is stored exactly as submitted. `created_at` and `updated_at` are
/// set to the same instant, so `created_at <= updated_at` holds from the
/// first write on.
pub async fn insert(
    db: &DatabaseConnection,
    url: &str,
    summary: Option<String>,
) -> Result<entity::url::Model, StoreError> {
    validate_url(url)?;

    let now = chrono::Utc::now().naive_utc();
    let record = entity::url::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        url: Set(url.to_string()),
        summary: Set(summary),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(record.insert(db).await?)
}

/// Returns the most recently created records, newest first.
///
/// Ties on `created_at` fall back to `id` so two identical queries see the
/// same order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<entity::url::Model>, StoreError> {
    Ok(entity::url::Entity::find()
        .order_by_desc(entity::url::Column::CreatedAt)
        .order_by_desc(entity::url::Column::Id)
        .limit(DEFAULT_LIST_LIMIT)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    fn record(url: &str, summary: Option<&str>, secs: i64) -> entity::url::Model {
        let ts = chrono::DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
        entity::url::Model {
            id: uuid::Uuid::new_v4(),
            url: url.to_string(),
            summary: summary.map(|s| s.to_string()),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn insert_returns_the_persisted_record() {
        let stored = record("https://example.com/article", None, 1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let got = insert(&db, "https://example.com/article", None)
            .await
            .unwrap();
        assert_eq!(got, stored);
        assert_eq!(got.summary, None);
        assert_eq!(got.created_at, got.updated_at);
    }

    #[tokio::test]
    async fn insert_keeps_the_summary() {
        let stored = record("https://example.com", Some("A test page"), 1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let got = insert(&db, "https://example.com", Some("A test page".to_string()))
            .await
            .unwrap();
        assert_eq!(got.summary.as_deref(), Some("A test page"));
    }

    #[tokio::test]
    async fn insert_rejects_non_https_before_touching_the_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = insert(&db, "http://example.com", None).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Rejected(ValidationError::SchemeNotAllowed)
        ));

        // No statement may have reached the (empty) mock.
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn insert_rejects_malformed_input() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = insert(&db, "not-a-url", None).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Rejected(ValidationError::InvalidUrl)
        ));
    }

    #[tokio::test]
    async fn list_preserves_newest_first_order() {
        let c = record("https://example.com/c", None, 3);
        let b = record("https://example.com/b", None, 2);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![c.clone(), b.clone()]])
            .into_connection();

        let got = list(&db).await.unwrap();
        assert_eq!(got, vec![c, b]);
    }

    #[tokio::test]
    async fn list_queries_with_order_and_limit() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::url::Model>::new()])
            .into_connection();

        list(&db).await.unwrap();

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "url"."id", "url"."url", "url"."summary", "url"."created_at", "url"."updated_at" FROM "url" ORDER BY "url"."created_at" DESC, "url"."id" DESC LIMIT $1"#,
                [20u64.into()],
            )]
        );
    }

    /// Pulls the bound `id` value out of a logged INSERT statement.
    fn inserted_id(tx: &Transaction) -> String {
        let stmt = format!("{:?}", tx);
        let start = stmt.find("Uuid(Some(").expect("no uuid bound in statement") + "Uuid(Some(".len();
        let end = stmt[start..].find(')').unwrap() + start;
        stmt[start..end].to_string()
    }

    #[tokio::test]
    async fn concurrent_inserts_both_succeed_with_distinct_ids() {
        let a = record("https://example.com/a", None, 1);
        let b = record("https://example.com/b", None, 2);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![a], vec![b]])
            .into_connection();

        let (first, second) = tokio::join!(
            insert(&db, "https://example.com/a", None),
            insert(&db, "https://example.com/b", None),
        );
        first.unwrap();
        second.unwrap();

        // Two INSERT statements reached the store, each with a freshly
        // generated id.
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        assert_ne!(inserted_id(&log[0]), inserted_id(&log[1]));
    }

    #[tokio::test]
    async fn db_failure_surfaces_as_infrastructure_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Conn(sea_orm::RuntimeErr::Internal(
                "connection refused".to_string(),
            ))])
            .into_connection();

        let err = list(&db).await.unwrap_err();
        assert!(matches!(err, StoreError::Db(_)));
    }
}
