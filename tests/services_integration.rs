//! Service-layer integration tests against the in-memory repository.

use activities_rust::db::repositories::LocalRepository;
use activities_rust::db::repository::RepositoryError;
use activities_rust::db::{seed, services};

#[tokio::test]
async fn test_catalog_matches_seed_dataset() {
    let repo = LocalRepository::seeded();
    let catalog = services::list_activities(&repo).await.unwrap();
    assert_eq!(catalog, seed::seed_catalog());
}

#[tokio::test]
async fn test_list_activities_returns_seed_catalog() {
    let repo = LocalRepository::seeded();

    let catalog = services::list_activities(&repo).await.unwrap();
    assert_eq!(catalog.len(), 9);

    let soccer = catalog.get("Soccer Team").unwrap();
    assert_eq!(
        soccer.participants,
        vec!["liam@mergington.edu", "noah@mergington.edu"]
    );
    let basketball = catalog.get("Basketball Team").unwrap();
    assert_eq!(
        basketball.participants,
        vec!["ava@mergington.edu", "mia@mergington.edu"]
    );
}

#[tokio::test]
async fn test_signup_then_unregister_restores_roster() {
    let repo = LocalRepository::seeded();
    let before = services::get_activity(&repo, "Soccer Team").await.unwrap();

    services::signup_participant(&repo, "Soccer Team", "test@x.edu")
        .await
        .unwrap();

    let during = services::get_activity(&repo, "Soccer Team").await.unwrap();
    assert_eq!(during.participants.len(), before.participants.len() + 1);
    assert_eq!(during.participants.last().unwrap(), "test@x.edu");

    services::unregister_participant(&repo, "Soccer Team", "test@x.edu")
        .await
        .unwrap();

    let after = services::get_activity(&repo, "Soccer Team").await.unwrap();
    assert_eq!(after.participants, before.participants);
}

#[tokio::test]
async fn test_signup_visible_in_catalog_listing() {
    let repo = LocalRepository::seeded();

    services::signup_participant(&repo, "Basketball Team", "test@x.edu")
        .await
        .unwrap();

    let catalog = services::list_activities(&repo).await.unwrap();
    let basketball = catalog.get("Basketball Team").unwrap();
    assert!(basketball.is_registered("test@x.edu"));
}

#[tokio::test]
async fn test_signup_duplicate_rejected() {
    let repo = LocalRepository::seeded();

    let err = services::signup_participant(&repo, "Soccer Team", "liam@mergington.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[tokio::test]
async fn test_unregister_not_registered_rejected() {
    let repo = LocalRepository::seeded();

    let err = services::unregister_participant(&repo, "Basketball Team", "noone@mergington.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[tokio::test]
async fn test_unknown_activity_rejected_for_both_operations() {
    let repo = LocalRepository::seeded();

    let err = services::signup_participant(&repo, "Nonexistent Club", "test@x.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));

    let err = services::unregister_participant(&repo, "Nonexistent Club", "test@x.edu")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_signup_does_not_enforce_capacity() {
    let repo = LocalRepository::seeded();

    // Math Club has capacity 10 with 2 seeded; fill past the limit
    for i in 0..12 {
        services::signup_participant(&repo, "Math Club", &format!("student{}@mergington.edu", i))
            .await
            .unwrap();
    }

    let math = services::get_activity(&repo, "Math Club").await.unwrap();
    assert!(math.participants.len() > math.max_participants as usize);
}

#[tokio::test]
async fn test_health_check_passthrough() {
    let repo = LocalRepository::seeded();
    assert!(services::health_check(&repo).await.unwrap());

    repo.set_healthy(false);
    assert!(!services::health_check(&repo).await.unwrap());
}
