//! Tests for the db module's global repository accessors.

use activities_rust::db;

#[tokio::test]
async fn test_global_repository_initializes_seeded() {
    db::init_repository().unwrap();

    let repo = db::get_repository().unwrap();
    let catalog = repo.list_activities().await.unwrap();
    assert_eq!(catalog.len(), 9);
    assert!(catalog.contains_key("Soccer Team"));
}

#[tokio::test]
async fn test_init_repository_is_idempotent() {
    db::init_repository().unwrap();
    db::init_repository().unwrap();
    assert!(db::get_repository().is_ok());
}
