//! Builds parameterized INSERT, SELECT, UPDATE, DELETE and bootstrap DDL from a table definition.

use crate::config::TableDef;
use crate::sql::PgBindValue;

/// Quote identifier for PostgreSQL (safe: only from table definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Primary key first, then fields in definition order.
fn select_column_list(table: &TableDef) -> String {
    std::iter::once(table.pk)
        .chain(table.fields.iter().map(|f| f.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, ordered by primary key.
pub fn select_list(table: &TableDef) -> QueryBuf {
    QueryBuf::new(format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk)
    ))
}

pub fn select_by_id(table: &TableDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new(String::new());
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk),
        n
    );
    q
}

/// INSERT all fields; the store assigns the primary key, which is returned.
/// `values` must follow `table.fields` order.
pub fn insert(table: &TableDef, values: Vec<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new(String::new());
    let placeholders: Vec<String> = values
        .into_iter()
        .map(|v| format!("${}", q.push_param(v)))
        .collect();
    let cols: Vec<String> = table.fields.iter().map(|f| quoted(f.name)).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        quoted(table.pk)
    );
    q
}

/// Full replacement of every field on one row. Zero affected rows means the id did not exist.
pub fn update(table: &TableDef, id: i32, values: Vec<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new(String::new());
    let assignments: Vec<String> = table
        .fields
        .iter()
        .zip(values)
        .map(|(f, v)| format!("{} = ${}", quoted(f.name), q.push_param(v)))
        .collect();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(table.name),
        assignments.join(", "),
        quoted(table.pk),
        n
    );
    q
}

pub fn delete(table: &TableDef, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new(String::new());
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(table.name),
        quoted(table.pk),
        n
    );
    q
}

/// CREATE TABLE IF NOT EXISTS with a SERIAL primary key and NOT NULL fields.
pub fn create_table(table: &TableDef) -> String {
    let mut col_defs = vec![format!("{} SERIAL PRIMARY KEY", quoted(table.pk))];
    col_defs.extend(
        table
            .fields
            .iter()
            .map(|f| format!("{} {} NOT NULL", quoted(f.name), f.kind.pg_type())),
    );
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(table.name),
        col_defs.join(", ")
    )
}
