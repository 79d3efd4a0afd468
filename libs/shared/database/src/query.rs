//! PostgREST query paths.
//!
//! Builds the `/rest/v1/<table>?...` paths the Supabase client sends. Filter
//! values are percent-encoded so Arabic names survive the trip.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Ordering {
    column: String,
    direction: Direction,
    nulls: Option<Nulls>,
}

impl Ordering {
    fn render(&self) -> String {
        let mut out = format!(
            "{}.{}",
            self.column,
            match self.direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            }
        );
        match self.nulls {
            Some(Nulls::First) => out.push_str(".nullsfirst"),
            Some(Nulls::Last) => out.push_str(".nullslast"),
            None => {}
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    columns: String,
    filters: Vec<String>,
    orderings: Vec<Ordering>,
    limit: Option<usize>,
}

impl Query {
    pub fn table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            orderings: Vec::new(),
            limit: None,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(format!(
            "{}=eq.{}",
            column,
            urlencoding::encode(&value.to_string())
        ));
        self
    }

    pub fn not_null(mut self, column: &str) -> Self {
        self.filters.push(format!("{}=not.is.null", column));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.orderings.push(Ordering {
            column: column.to_string(),
            direction,
            nulls: None,
        });
        self
    }

    pub fn order_nulls(mut self, column: &str, direction: Direction, nulls: Nulls) -> Self {
        self.orderings.push(Ordering {
            column: column.to_string(),
            direction,
            nulls: Some(nulls),
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Same table and filters, no ordering. Used when a sorted read fails.
    pub fn unordered(&self) -> Self {
        Self {
            orderings: Vec::new(),
            ..self.clone()
        }
    }

    pub fn to_path(&self) -> String {
        let mut params = vec![format!("select={}", urlencoding::encode(&self.columns))];
        params.extend(self.filters.iter().cloned());

        if !self.orderings.is_empty() {
            let order = self
                .orderings
                .iter()
                .map(Ordering::render)
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!("order={}", order));
        }

        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        format!("/rest/v1/{}?{}", self.table, params.join("&"))
    }
}
