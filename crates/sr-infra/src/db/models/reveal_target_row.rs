use crate::db::schema::reveal_target;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = reveal_target)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RevealTargetRow {
    pub id: i64,
    pub selector: String,
    pub label: String,
    pub comment: String,
    pub enabled: bool,
    pub changed_at: i64,
    pub options: Vec<u8>,
}

/// Insert and update payload. The id is assigned by SQLite on insert.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = reveal_target)]
pub struct NewRevealTargetRow {
    pub selector: String,
    pub label: String,
    pub comment: String,
    pub enabled: bool,
    pub changed_at: i64,
    pub options: Vec<u8>,
}
