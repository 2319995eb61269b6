//! Client-side text filtering over resource records.

/// Exposes the fields a resource kind is filtered on.
///
/// Filtering is a pure projection: case-insensitive substring match over
/// the configured fields, with the empty query matching everything. The
/// list controllers recompute it on every read and never mutate the
/// underlying items.
pub trait Searchable {
    /// The field values the filter inspects, in display order.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any configured field contains `query`, case-insensitively.
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
