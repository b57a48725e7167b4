/// One sort directive: a logical field name plus direction.
///
/// An ordered sequence of these defines a multi-column ORDER BY where later
/// fields break ties left by earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    pub field: String,
    pub descending: bool,
}

impl SortField {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: false,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            descending: true,
        }
    }
}

/// Parse a compact sort specification like `"name,-createdAt"` into ordered
/// sort directives.
///
/// Segments are comma-separated and whitespace-trimmed. A leading `-` marks
/// the field descending and is stripped from the name. An empty spec yields
/// an empty sequence, which callers treat as "use the default sort". Segments
/// left empty after trimming and `-`-stripping carry no sort intent and are
/// skipped.
pub fn parse_sort_fields(spec: &str) -> Vec<SortField> {
    spec.split(',')
        .filter_map(|segment| {
            let segment = segment.trim();
            let (field, descending) = match segment.strip_prefix('-') {
                Some(rest) => (rest, true),
                None => (segment, false),
            };
            if field.is_empty() {
                return None;
            }
            Some(SortField {
                field: field.to_string(),
                descending,
            })
        })
        .collect()
}
