//! SQL WHERE clause builder for the customer search.
//!
//! Tracks `$n` placeholder indices so that the caller can bind values in the
//! same order the conditions were added.

/// Builder for constructing SQL WHERE clauses with parameter tracking.
///
/// # Example
/// ```ignore
/// let mut qb = QueryBuilder::new();
/// if !term.is_empty() {
///     qb.add_indexed_condition(|idx| format!("name ILIKE ${idx}"));
/// }
/// let limit_idx = qb.next_param_idx();
/// let sql = format!("SELECT * FROM customers {} LIMIT ${limit_idx}", qb.build_where_clause());
/// ```
#[derive(Debug)]
pub struct QueryBuilder {
    conditions: Vec<String>,
    param_idx: usize,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Creates a new empty query builder.
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            param_idx: 1,
        }
    }

    /// Adds a condition that refers to one new parameter, possibly several
    /// times. `condition_fn` receives the parameter index.
    /// Returns the parameter index that was used.
    pub fn add_indexed_condition<F>(&mut self, condition_fn: F) -> usize
    where
        F: FnOnce(usize) -> String,
    {
        let idx = self.param_idx;
        self.conditions.push(condition_fn(idx));
        self.param_idx += 1;
        idx
    }

    /// Increments and returns the next parameter index.
    pub fn next_param_idx(&mut self) -> usize {
        let idx = self.param_idx;
        self.param_idx += 1;
        idx
    }

    /// Builds the full WHERE clause including the "WHERE" keyword.
    /// Returns "WHERE 1=1" if no conditions (always true).
    pub fn build_where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "WHERE 1=1".to_string()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }
}

/// Turns free text into an ILIKE pattern matching it as a literal substring.
///
/// `%`, `_` and `\` are escaped with a backslash, the default ILIKE escape
/// character in PostgreSQL.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
