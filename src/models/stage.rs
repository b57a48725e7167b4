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

/// Stage is one step of a document's workflow run (classify, extract,
/// summarize, …). Maps to `public.stages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Stage {
    pub id: Uuid,
    pub document_id: Uuid,
    pub name: String,
    pub status: String,
    pub attempt: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

static PROJECTION: LazyLock<Projection> = LazyLock::new(|| {
    Projection::new("public", "stages", "s")
        .project("id", "id")
        .project("document_id", "documentId")
        .project("name", "name")
        .project("status", "status")
        .project("attempt", "attempt")
        .project("started_at", "startedAt")
        .project("completed_at", "completedAt")
        .project("created_at", "createdAt")
});

/// Optional list filters for stages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageFilter {
    pub document_id: Option<Uuid>,
    pub status: Option<String>,
    pub name_contains: Option<String>,
}

impl StageFilter {
    /// Apply whichever filters are present.
    pub fn apply(&self, builder: QueryBuilder) -> QueryBuilder {
        builder
            .where_equals("documentId", self.document_id)
            .where_equals("status", self.status.clone())
            .where_contains("name", self.name_contains.as_deref())
    }
}

impl Stage {
    /// Shared logical-name projection for stage queries.
    pub fn projection() -> &'static Projection {
        &PROJECTION
    }

    fn builder() -> QueryBuilder {
        QueryBuilder::new(Self::projection(), vec![SortField::asc("createdAt")])
    }

    /// List stages with filtering, sorting, and pagination.
    pub async fn list(
        executor: &QueryExecutor,
        filter: &StageFilter,
        sort_spec: &str,
        params: PageParams,
    ) -> DataStoreResult<Paginated<Stage>> {
        let params = params.normalize();
        let builder = filter
            .apply(Self::builder())
            .order_by_fields(parse_sort_fields(sort_spec));

        let (count_sql, count_args) = builder.build_count();
        let total_count = executor.fetch_count(&count_sql, &count_args).await?;

        let (page_sql, page_args) = builder.build_page(params.page, params.per_page);
        let items = executor.fetch_all(&page_sql, &page_args).await?;

        debug!(total_count, page = params.page, "listed stages");

        Ok(Paginated {
            items,
            pagination: PaginationInfo::new(params, total_count),
        })
    }

    /// Find one stage by id.
    pub async fn find_by_id(executor: &QueryExecutor, id: Uuid) -> DataStoreResult<Option<Stage>> {
        let (sql, args) = Self::builder().build_single("id", id);
        executor.fetch_optional(&sql, &args).await
    }
}
