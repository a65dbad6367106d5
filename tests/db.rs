use diesel::prelude::*;
use diesel::sql_query;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_create_every_table() {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("connection");
    let tables: Vec<String> = sql_query("SELECT name FROM sqlite_master WHERE type = 'table'")
        .load::<TableName>(&mut conn)
        .expect("list tables")
        .into_iter()
        .map(|t| t.name)
        .collect();

    for expected in [
        "clothing_items",
        "outfits",
        "scheduled_outfits",
        "preferences",
        "product_recommendations",
        "fashion_trends",
    ] {
        assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
    }
}
