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

/// Profile configures one named workflow for document processing.
/// Maps to `public.profiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub workflow_name: String,
    pub name: String,
    pub description: Option<String>,
    pub model: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

static PROJECTION: LazyLock<Projection> = LazyLock::new(|| {
    Projection::new("public", "profiles", "p")
        .project("id", "id")
        .project("workflow_name", "workflowName")
        .project("name", "name")
        .project("description", "description")
        .project("model", "model")
        .project("created_at", "createdAt")
        .project("updated_at", "updatedAt")
});

/// Optional list filters for profiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFilter {
    pub workflow_name: Option<String>,
    pub search: Option<String>,
}

impl ProfileFilter {
    /// Apply whichever filters are present.
    pub fn apply(&self, builder: QueryBuilder) -> QueryBuilder {
        builder
            .where_equals("workflowName", self.workflow_name.clone())
            .where_search(self.search.as_deref(), &["name", "description"])
    }
}

impl Profile {
    /// Shared logical-name projection for profile queries, built once at
    /// first use.
    pub fn projection() -> &'static Projection {
        &PROJECTION
    }

    fn builder() -> QueryBuilder {
        QueryBuilder::new(Self::projection(), vec![SortField::asc("name")])
    }

    /// List profiles with filtering, sorting, and pagination.
    ///
    /// An empty `sort_spec` falls back to the default name ordering.
    pub async fn list(
        executor: &QueryExecutor,
        filter: &ProfileFilter,
        sort_spec: &str,
        params: PageParams,
    ) -> DataStoreResult<Paginated<Profile>> {
        let params = params.normalize();
        let builder = filter
            .apply(Self::builder())
            .order_by_fields(parse_sort_fields(sort_spec));

        let (count_sql, count_args) = builder.build_count();
        let total_count = executor.fetch_count(&count_sql, &count_args).await?;

        let (page_sql, page_args) = builder.build_page(params.page, params.per_page);
        let items = executor.fetch_all(&page_sql, &page_args).await?;

        debug!(total_count, page = params.page, "listed profiles");

        Ok(Paginated {
            items,
            pagination: PaginationInfo::new(params, total_count),
        })
    }

    /// Find one profile by id.
    pub async fn find_by_id(
        executor: &QueryExecutor,
        id: Uuid,
    ) -> DataStoreResult<Option<Profile>> {
        let (sql, args) = Self::builder().build_single("id", id);
        executor.fetch_optional(&sql, &args).await
    }
}
