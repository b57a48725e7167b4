use super::{Projection, SortField, SqlValue};

/// One WHERE fragment with final placeholder numbers baked in, plus the
/// argument values it binds.
#[derive(Debug, Clone)]
struct Predicate {
    sql: String,
    args: Vec<SqlValue>,
}

/// Declarative builder for the three query shapes every listable resource
/// needs: a row count, a bounded/ordered page, and a single-row exact match.
///
/// A builder is created fresh per request, bound to one [`Projection`] and an
/// optional default sort. Filter and sort calls chain; absent or empty inputs
/// add nothing. Placeholder numbers (`$1`, `$2`, …) are assigned the moment a
/// predicate is added, so `build_count` and `build_page` always emit identical
/// WHERE text and identical argument lists from the same builder state.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    projection: Projection,
    default_sort: Vec<SortField>,
    predicates: Vec<Predicate>,
    sort: Vec<SortField>,
    parameter_count: usize,
}

impl QueryBuilder {
    /// Create a builder over a projection with a default sort.
    ///
    /// The default sort applies only to `build_page`, and only while no
    /// explicit sort has been set via `order_by`/`order_by_fields`.
    pub fn new(projection: &Projection, default_sort: Vec<SortField>) -> Self {
        Self {
            projection: projection.clone(),
            default_sort,
            predicates: Vec::new(),
            sort: Vec::new(),
            parameter_count: 0,
        }
    }

    /// Add `col = $N`. `None` adds nothing.
    pub fn where_equals<V: Into<SqlValue>>(mut self, field: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let sql = format!(
                "{} = ${}",
                self.projection.column(field),
                self.parameter_count + 1
            );
            self.add_predicate(sql, vec![value.into()]);
        }
        self
    }

    /// Add `col ILIKE $N` with a `%text%` argument. `None` or empty text adds
    /// nothing.
    pub fn where_contains(mut self, field: &str, text: Option<&str>) -> Self {
        if let Some(text) = text {
            if !text.is_empty() {
                let sql = format!(
                    "{} ILIKE ${}",
                    self.projection.column(field),
                    self.parameter_count + 1
                );
                self.add_predicate(sql, vec![SqlValue::Text(format!("%{text}%"))]);
            }
        }
        self
    }

    /// Add `col IN ($N, $N+1, …)` with one argument per value.
    ///
    /// An empty collection adds nothing: "no selection" means "no filter",
    /// never an always-false `IN ()`.
    pub fn where_in<V: Into<SqlValue>>(mut self, field: &str, values: Vec<V>) -> Self {
        if values.is_empty() {
            return self;
        }
        let placeholders: Vec<String> = (0..values.len())
            .map(|i| format!("${}", self.parameter_count + 1 + i))
            .collect();
        let sql = format!(
            "{} IN ({})",
            self.projection.column(field),
            placeholders.join(", ")
        );
        self.add_predicate(sql, values.into_iter().map(Into::into).collect());
        self
    }

    /// Add a parenthesized OR group matching `text` against every field:
    /// `(c1 ILIKE $N OR c2 ILIKE $N+1 …)`, one `%text%` argument per field.
    ///
    /// Absent/empty text or an empty field list adds nothing.
    pub fn where_search(mut self, text: Option<&str>, fields: &[&str]) -> Self {
        let text = match text {
            Some(text) if !text.is_empty() && !fields.is_empty() => text,
            _ => return self,
        };
        let pattern = format!("%{text}%");
        let mut clauses = Vec::with_capacity(fields.len());
        let mut args = Vec::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            clauses.push(format!(
                "{} ILIKE ${}",
                self.projection.column(field),
                self.parameter_count + 1 + i
            ));
            args.push(SqlValue::Text(pattern.clone()));
        }
        self.add_predicate(format!("({})", clauses.join(" OR ")), args);
        self
    }

    /// Replace the explicit sort with a single field. An empty field name
    /// clears it, restoring the default-sort fallback.
    pub fn order_by(mut self, field: &str, descending: bool) -> Self {
        if field.is_empty() {
            self.sort.clear();
        } else {
            self.sort = vec![SortField {
                field: field.to_string(),
                descending,
            }];
        }
        self
    }

    /// Replace the explicit sort with a field sequence. An empty sequence
    /// clears it, restoring the default-sort fallback.
    pub fn order_by_fields(mut self, fields: Vec<SortField>) -> Self {
        self.sort = fields;
        self
    }

    /// Emit `SELECT COUNT(*) FROM <table> [WHERE …]`.
    ///
    /// Never carries ORDER BY, LIMIT, or OFFSET: the row count is independent
    /// of ordering and windowing.
    pub fn build_count(&self) -> (String, Vec<SqlValue>) {
        let sql = format!(
            "SELECT COUNT(*) FROM {}{}",
            self.projection.table(),
            self.where_sql()
        );
        (sql, self.arguments())
    }

    /// Emit the page query for a 1-indexed page:
    /// `SELECT <columns> FROM <table> [WHERE …] [ORDER BY …] LIMIT <size>
    /// OFFSET <(page-1)*size>`.
    ///
    /// ORDER BY is present iff the effective sort (explicit, else default) is
    /// non-empty.
    pub fn build_page(&self, page: u32, page_size: u32) -> (String, Vec<SqlValue>) {
        let offset = u64::from(page.saturating_sub(1)) * u64::from(page_size);
        let sql = format!(
            "SELECT {} FROM {}{}{} LIMIT {} OFFSET {}",
            self.projection.columns(),
            self.projection.table(),
            self.where_sql(),
            self.order_by_sql(),
            page_size,
            offset
        );
        (sql, self.arguments())
    }

    /// Emit a fresh exact-match lookup: `SELECT <columns> FROM <table> WHERE
    /// <col> = $1` with args `[value]`.
    ///
    /// Deliberately independent of any chained `where_*` state; this is a
    /// point lookup, not a refinement of the accumulated filter.
    pub fn build_single<V: Into<SqlValue>>(&self, field: &str, value: V) -> (String, Vec<SqlValue>) {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            self.projection.columns(),
            self.projection.table(),
            self.projection.column(field)
        );
        (sql, vec![value.into()])
    }

    /// Record a predicate and advance the placeholder counter by exactly the
    /// number of arguments it binds.
    fn add_predicate(&mut self, sql: String, args: Vec<SqlValue>) {
        self.parameter_count += args.len();
        self.predicates.push(Predicate { sql, args });
    }

    fn where_sql(&self) -> String {
        if self.predicates.is_empty() {
            return String::new();
        }
        let parts: Vec<&str> = self.predicates.iter().map(|p| p.sql.as_str()).collect();
        format!(" WHERE {}", parts.join(" AND "))
    }

    fn order_by_sql(&self) -> String {
        let sort = self.effective_sort();
        if sort.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = sort
            .iter()
            .map(|s| {
                format!(
                    "{} {}",
                    self.projection.column(&s.field),
                    if s.descending { "DESC" } else { "ASC" }
                )
            })
            .collect();
        format!(" ORDER BY {}", parts.join(", "))
    }

    fn effective_sort(&self) -> &[SortField] {
        if self.sort.is_empty() {
            &self.default_sort
        } else {
            &self.sort
        }
    }

    fn arguments(&self) -> Vec<SqlValue> {
        self.predicates
            .iter()
            .flat_map(|p| p.args.iter().cloned())
            .collect()
    }
}
