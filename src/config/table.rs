//! Compile-time table definitions: the single source for DDL, SQL column lists and request validation.

/// JSON and SQL kind of a resource field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    /// Column type used in bootstrap DDL.
    pub fn pg_type(self) -> &'static str {
        match self {
            FieldKind::Text => "VARCHAR(255)",
            FieldKind::Integer => "INTEGER",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Integer => "an integer",
        }
    }
}

#[derive(Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn text(name: &'static str) -> Self {
        FieldDef {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        FieldDef {
            name,
            kind: FieldKind::Integer,
        }
    }
}

/// A resource table: store-generated integer primary key plus required fields.
/// Every field is NOT NULL and required on create and full update.
#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub pk: &'static str,
    pub fields: &'static [FieldDef],
}
