//! Query builder demo embedding a fluent configuration container.

use anyhow::Result;
use fluent_config::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds `SELECT` statements from per-instance options.
#[derive(Clone, Debug)]
struct QueryBuilder {
    table: String,
    config: FluentConfig,
}

impl QueryBuilder {
    fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            config: FluentConfig::new(),
        }
    }

    fn columns<'a>(&mut self, first: &'a str, rest: impl IntoIterator<Item = &'a str>) -> Result<Fluent<'_, Self>> {
        Ok(self.append_all("columns", first, rest)?)
    }

    fn filter(&mut self, condition: &str) -> Result<Fluent<'_, Self>> {
        Ok(self.append("where", condition)?)
    }

    fn limit(&mut self, limit: u32) -> Result<Fluent<'_, Self>> {
        Ok(self.option("limit", limit)?)
    }

    fn to_sql(&self) -> String {
        let config = self.config.config();
        let join = |key: &str, separator: &str| {
            config.get(key).map(|value| {
                value
                    .clone()
                    .into_list()
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect::<Vec<_>>()
                    .join(separator)
            })
        };

        let mut sql = format!(
            "SELECT {} FROM {}",
            join("columns", ", ").unwrap_or_else(|| "*".into()),
            self.table
        );
        if let Some(conditions) = join("where", " AND ") {
            sql.push_str(&format!(" WHERE {conditions}"));
        }
        if let Some(limit) = config.get("limit").and_then(Value::as_i64) {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        sql
    }
}

impl Configurable for QueryBuilder {
    fn fluent_config(&self) -> &FluentConfig {
        &self.config
    }

    fn fluent_config_mut(&mut self) -> &mut FluentConfig {
        &mut self.config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    copy_on_write()?;
    in_place()?;
    Ok(())
}

/// Derives independent queries from a shared base.
fn copy_on_write() -> Result<()> {
    info!("--- copy-on-write ---");

    let mut users = QueryBuilder::new("users");
    let mut base = users.columns("id", ["name"])?.into_owned();
    let active = base
        .filter("active = 1")?
        .limit(10)
        .map(Fluent::into_owned)?;
    let admins = base.filter("role = 'admin'")?.into_owned();

    info!(sql = %users.to_sql(), "untouched original");
    info!(sql = %base.to_sql(), "base");
    info!(sql = %active.to_sql(), "active users");
    info!(sql = %admins.to_sql(), "admins");
    Ok(())
}

/// Edits a single builder, treating `where` as a stack.
fn in_place() -> Result<()> {
    info!("--- in place ---");

    let mut query = QueryBuilder::new("orders");
    query.fluent_config_mut().set_preserve_instance(true);

    let _ = query.push("where", ["paid = 1", "total > 100"])?;
    let _ = query.limit(5)?;
    info!(sql = %query.to_sql(), "with filters");

    let dropped = query.pop("where")?.into_value();
    info!(?dropped, sql = %query.to_sql(), "after pop");

    let _ = query.discard(["limit"]);
    info!(sql = %query.to_sql(), "after discard");
    Ok(())
}
