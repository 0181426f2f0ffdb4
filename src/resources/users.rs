use super::Resource;
use crate::config::{FieldDef, TableDef};
use crate::sql::PgBindValue;
use serde::{Deserialize, Serialize};

pub const USERS_TABLE: TableDef = TableDef {
    name: "users",
    pk: "id",
    fields: &[
        FieldDef::text("firstname"),
        FieldDef::text("lastname"),
        FieldDef::text("email"),
        FieldDef::text("city"),
        FieldDef::text("language"),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

pub struct Users;

impl Resource for Users {
    const NAME: &'static str = "user";
    const TABLE: &'static TableDef = &USERS_TABLE;
    type Record = User;
    type Payload = UserPayload;

    fn bind_values(p: UserPayload) -> Vec<PgBindValue> {
        vec![
            p.firstname.into(),
            p.lastname.into(),
            p.email.into(),
            p.city.into(),
            p.language.into(),
        ]
    }
}
