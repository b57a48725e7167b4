use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::debug;
use uuid::Uuid;

use crate::database::QueryExecutor;
use crate::error::DataStoreResult;
use crate::pagination::{PageParams, Paginated, PaginationInfo};
use crate::query_builder::{parse_sort_fields, Projection, QueryBuilder, SortField};

/// Document is one uploaded file moving through a processing workflow.
/// Maps to `public.documents`. `metadata` holds extractor output as jsonb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub file_name: String,
    pub mime_type: String,
    pub status: String,
    pub page_count: Option<i32>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

static PROJECTION: LazyLock<Projection> = LazyLock::new(|| {
    Projection::new("public", "documents", "d")
        .project("id", "id")
        .project("profile_id", "profileId")
        .project("file_name", "fileName")
        .project("mime_type", "mimeType")
        .project("status", "status")
        .project("page_count", "pageCount")
        .project("metadata", "metadata")
        .project("created_at", "createdAt")
        .project("updated_at", "updatedAt")
});

/// Optional list filters for documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub profile_id: Option<Uuid>,
    /// Match any of these statuses; empty means "any status"
    pub statuses: Vec<String>,
    pub search: Option<String>,
}

impl DocumentFilter {
    /// Apply whichever filters are present.
    pub fn apply(&self, builder: QueryBuilder) -> QueryBuilder {
        builder
            .where_equals("profileId", self.profile_id)
            .where_in("status", self.statuses.clone())
            .where_search(self.search.as_deref(), &["fileName"])
    }
}

impl Document {
    /// Shared logical-name projection for document queries.
    pub fn projection() -> &'static Projection {
        &PROJECTION
    }

    fn builder() -> QueryBuilder {
        QueryBuilder::new(Self::projection(), vec![SortField::desc("createdAt")])
    }

    /// List documents with filtering, sorting, and pagination.
    ///
    /// Newest first unless the caller sorts explicitly.
    pub async fn list(
        executor: &QueryExecutor,
        filter: &DocumentFilter,
        sort_spec: &str,
        params: PageParams,
    ) -> DataStoreResult<Paginated<Document>> {
        let params = params.normalize();
        let builder = filter
            .apply(Self::builder())
            .order_by_fields(parse_sort_fields(sort_spec));

        let (count_sql, count_args) = builder.build_count();
        let total_count = executor.fetch_count(&count_sql, &count_args).await?;

        let (page_sql, page_args) = builder.build_page(params.page, params.per_page);
        let items = executor.fetch_all(&page_sql, &page_args).await?;

        debug!(total_count, page = params.page, "listed documents");

        Ok(Paginated {
            items,
            pagination: PaginationInfo::new(params, total_count),
        })
    }

    /// Find one document by id.
    pub async fn find_by_id(
        executor: &QueryExecutor,
        id: Uuid,
    ) -> DataStoreResult<Option<Document>> {
        let (sql, args) = Self::builder().build_single("id", id);
        executor.fetch_optional(&sql, &args).await
    }
}
