/// Immutable mapping from logical field names to physically qualified columns
/// for a single table.
///
/// A projection is built once per resource at process startup via chained
/// `project()` calls and then shared read-only across every request touching
/// that resource. Filter and sort inputs always speak logical names; the
/// projection owns the translation to `alias.column` form and produces the
/// SELECT column list.
#[derive(Debug, Clone)]
pub struct Projection {
    schema: String,
    table: String,
    alias: String,
    fields: Vec<FieldMapping>,
}

#[derive(Debug, Clone)]
struct FieldMapping {
    logical: String,
    column: String,
}

impl Projection {
    /// Create an empty projection bound to `schema.table` with the given alias.
    pub fn new(schema: &str, table: &str, alias: &str) -> Self {
        Self {
            schema: schema.to_string(),
            table: table.to_string(),
            alias: alias.to_string(),
            fields: Vec::new(),
        }
    }

    /// Register one logical name → column mapping.
    ///
    /// Chainable. Re-registering a logical name overwrites its column but
    /// keeps the position of the first registration, so the output column
    /// order is governed purely by the order of first `project()` calls.
    pub fn project(mut self, column: &str, logical_name: &str) -> Self {
        match self.fields.iter_mut().find(|f| f.logical == logical_name) {
            Some(existing) => existing.column = column.to_string(),
            None => self.fields.push(FieldMapping {
                logical: logical_name.to_string(),
                column: column.to_string(),
            }),
        }
        self
    }

    /// Resolve a logical name to its qualified `alias.column` form.
    ///
    /// Unregistered names pass through verbatim rather than failing. Callers
    /// rely on this to inject pre-qualified expressions; vocabulary
    /// validation belongs to the API boundary, not here.
    pub fn column(&self, logical_name: &str) -> String {
        match self.fields.iter().find(|f| f.logical == logical_name) {
            Some(field) => format!("{}.{}", self.alias, field.column),
            None => logical_name.to_string(),
        }
    }

    /// All qualified columns joined with `", "`, in registration order.
    pub fn columns(&self) -> String {
        self.column_list().join(", ")
    }

    /// All qualified columns as an ordered list.
    pub fn column_list(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| format!("{}.{}", self.alias, f.column))
            .collect()
    }

    /// The table alias.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The qualified, aliased table reference: `"schema.table alias"`.
    pub fn table(&self) -> String {
        format!("{}.{} {}", self.schema, self.table, self.alias)
    }
}
