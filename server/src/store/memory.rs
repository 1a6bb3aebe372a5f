//! An in-process `DataStore` for tests, with failure injection and latency.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    time::Duration,
};

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use serde_json::Value;
use types::{Error, Result};

use super::{DataStore, Query};

/// Column a joined table is matched on.
const JOIN_KEY: &str = "user_id";

#[derive(Default)]
pub struct MemoryStore {
    tables: HashMap<&'static str, Vec<Value>>,
    failing: HashSet<&'static str>,
    latency: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, table: &'static str, rows: impl IntoIterator<Item = Value>) -> Self {
        self.tables.entry(table).or_default().extend(rows);
        self
    }

    /// Every read of `table` fails as if the service were unreachable.
    pub fn failing(mut self, table: &'static str) -> Self {
        self.failing.insert(table);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn rows(&self, query: &Query) -> Result<Vec<Value>> {
        if self.failing.contains(query.table) {
            return Err(Error::query_failed(query.table, anyhow!("connection refused")));
        }

        let mut rows: Vec<Value> = self
            .tables
            .get(query.table)
            .into_iter()
            .flatten()
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|(column, value)| row.get(column).is_some_and(|v| text(v) == *value))
            })
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare(&a[order.column], &b[order.column]);
                if order.descending { ordering.reverse() } else { ordering }
            });
        }

        if let Some(join) = &query.join {
            if self.failing.contains(join.table) {
                return Err(Error::query_failed(join.table, anyhow!("connection refused")));
            }
            let related = self.tables.get(join.table).cloned().unwrap_or_default();
            rows = rows
                .into_iter()
                .filter_map(|mut row| {
                    let matched = related.iter().find(|r| r[JOIN_KEY] == row[JOIN_KEY])?;
                    let embedded: serde_json::Map<String, Value> = join
                        .columns
                        .iter()
                        .map(|c| (c.to_string(), matched.get(*c).cloned().unwrap_or(Value::Null)))
                        .collect();
                    row.as_object_mut()?
                        .insert(join.table.to_string(), Value::Object(embedded));
                    Some(row)
                })
                .collect();
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }
}

impl DataStore for MemoryStore {
    async fn fetch_many<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.rows(query)?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| Error::query_failed(query.table, e)))
            .collect()
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        _ => text(a).cmp(&text(b)),
    }
}
