use super::Resource;
use crate::config::{FieldDef, TableDef};
use crate::sql::PgBindValue;
use serde::{Deserialize, Serialize};

pub const MOVIES_TABLE: TableDef = TableDef {
    name: "movies",
    pk: "id",
    fields: &[
        FieldDef::text("title"),
        FieldDef::text("director"),
        FieldDef::text("year"),
        FieldDef::text("color"),
        FieldDef::integer("duration"),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: String,
    /// Minutes.
    pub duration: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: String,
    pub duration: i32,
}

pub struct Movies;

impl Resource for Movies {
    const NAME: &'static str = "movie";
    const TABLE: &'static TableDef = &MOVIES_TABLE;
    type Record = Movie;
    type Payload = MoviePayload;

    fn bind_values(p: MoviePayload) -> Vec<PgBindValue> {
        vec![
            p.title.into(),
            p.director.into(),
            p.year.into(),
            p.color.into(),
            p.duration.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_binds_as_integer() {
        let values = Movies::bind_values(MoviePayload {
            title: "Citizen Kane".into(),
            director: "Orson Wells".into(),
            year: "1941".into(),
            color: "0".into(),
            duration: 119,
        });
        assert_eq!(values.len(), MOVIES_TABLE.fields.len());
        assert_eq!(values[4], PgBindValue::Int(119));
    }
}
