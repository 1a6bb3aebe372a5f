//! Read access to the hosted database.

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use types::{Error, Result};

#[cfg(test)]
pub mod memory;
mod rest;

pub use rest::StoreClient;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: &'static str,
    pub descending: bool,
}

/// Pull columns of a related table in alongside each row. Rows without a match are
/// dropped (an inner join).
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// A read against one table: equality filters, optional ordering, limit and join.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: &'static str,
    pub filters: Vec<(&'static str, String)>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
    pub join: Option<Join>,
}

impl Query {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
            limit: None,
            join: None,
        }
    }

    pub fn eq(mut self, column: &'static str, value: impl ToString) -> Self {
        self.filters.push((column, value.to_string()));
        self
    }

    pub fn order_desc(mut self, column: &'static str) -> Self {
        self.order = Some(Order {
            column,
            descending: true,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn join(mut self, table: &'static str, columns: &'static [&'static str]) -> Self {
        self.join = Some(Join { table, columns });
        self
    }

    /// The `select` clause, including any embedded join.
    pub fn select(&self) -> String {
        match &self.join {
            Some(join) => format!("*,{}!inner({})", join.table, join.columns.join(",")),
            None => "*".to_string(),
        }
    }

    /// Query-string parameters in the REST API's filter syntax.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.select())];
        params.extend(
            self.filters
                .iter()
                .map(|(column, value)| (column.to_string(), format!("eq.{value}"))),
        );
        if let Some(order) = &self.order {
            let direction = if order.descending { "desc" } else { "asc" };
            params.push(("order".to_string(), format!("{}.{direction}", order.column)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// The data store the dashboards read from.
///
/// An empty result is `Ok`; `Err` is reserved for reads that could not be answered.
#[allow(async_fn_in_trait)]
pub trait DataStore {
    async fn fetch_many<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>>;

    /// At most one row. More than one match is a failed query, not a pick.
    async fn fetch_one<T: DeserializeOwned>(&self, query: &Query) -> Result<Option<T>> {
        let query = query.clone().limit(2);
        let mut rows = self.fetch_many(&query).await?;
        if rows.len() > 1 {
            return Err(Error::query_failed(
                query.table,
                anyhow!("expected at most one row, found {}", rows.len()),
            ));
        }
        Ok(rows.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(params: &[(String, String)]) -> Vec<(&str, &str)> {
        params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn ordered_limited_query_params() {
        let query = Query::table("recommendations")
            .eq("student_id", "abc")
            .order_desc("relevance_score")
            .limit(6);

        assert_eq!(
            pairs(&query.params()),
            vec![
                ("select", "*"),
                ("student_id", "eq.abc"),
                ("order", "relevance_score.desc"),
                ("limit", "6"),
            ]
        );
    }

    #[test]
    fn joined_query_embeds_the_related_table() {
        let query = Query::table("student_profiles")
            .join("profiles", &["first_name", "last_name", "email"])
            .limit(5);

        assert_eq!(
            query.select(),
            "*,profiles!inner(first_name,last_name,email)"
        );
    }
}
