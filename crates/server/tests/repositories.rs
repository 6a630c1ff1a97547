//! Repository tests that exercise real SQL semantics.
//!
//! These require a `PostgreSQL` database reachable via `DATABASE_URL`;
//! migrations run automatically. Run with:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/mado_test cargo test -- --ignored
//! ```

use mado_creatives_core::BookingStatus;
use mado_creatives_server::db::bookings::{BookingRepository, CreateBooking, PatchBooking};
use mado_creatives_server::db::categories::{CategoryRepository, CreateCategory};
use mado_creatives_server::db::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}

fn category_input(name: String, parent_id: Option<Uuid>) -> CreateCategory {
    CreateCategory {
        name,
        slug: None,
        icon: None,
        parent_id,
        sort_order: None,
    }
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database (set DATABASE_URL)"]
async fn duplicate_category_name_conflicts_exactly_once() {
    let pool = test_pool().await;
    let repo = CategoryRepository::new(&pool);
    let name = format!("Weddings {}", Uuid::new_v4());

    let first = repo
        .create(category_input(name.clone(), None))
        .await
        .expect("first create succeeds");

    let err = repo
        .create(category_input(name, None))
        .await
        .expect_err("second create with the same derived slug must fail");
    assert!(
        matches!(&err, RepositoryError::Conflict(m) if m.contains("already exists")),
        "got {err:?}"
    );

    repo.delete_cascade(first.id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database (set DATABASE_URL)"]
async fn cascade_delete_leaves_no_children() {
    let pool = test_pool().await;
    let repo = CategoryRepository::new(&pool);
    let suffix = Uuid::new_v4();

    let parent = repo
        .create(category_input(format!("Portraits {suffix}"), None))
        .await
        .expect("create parent");
    let child_a = repo
        .create(category_input(format!("Studio {suffix}"), Some(parent.id)))
        .await
        .expect("create first child");
    let child_b = repo
        .create(category_input(format!("Outdoor {suffix}"), Some(parent.id)))
        .await
        .expect("create second child");

    repo.delete_cascade(parent.id).await.expect("cascade delete");

    let remaining = repo.list().await.expect("list");
    for id in [parent.id, child_a.id, child_b.id] {
        assert!(
            !remaining.iter().any(|c| c.id == id),
            "category {id} survived the cascade"
        );
    }

    // The tree is gone, so a second delete finds nothing.
    let err = repo.delete_cascade(parent.id).await.expect_err("already deleted");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database (set DATABASE_URL)"]
async fn booking_status_patch_preserves_notes() {
    let pool = test_pool().await;
    let repo = BookingRepository::new(&pool);

    let booking = repo
        .create(CreateBooking {
            name: "Ama Mensah".to_string(),
            email: "ama@example.com".to_string(),
            phone: None,
            service: "Editorial shoot".to_string(),
            event_date: None,
            message: None,
        })
        .await
        .expect("create booking");
    assert_eq!(booking.status, BookingStatus::Pending);

    let with_notes = repo
        .patch(
            booking.id,
            PatchBooking {
                status: None,
                notes: Some("deposit received".to_string()),
            },
        )
        .await
        .expect("patch notes");
    assert_eq!(with_notes.status, BookingStatus::Pending);
    assert_eq!(with_notes.notes.as_deref(), Some("deposit received"));

    let confirmed = repo
        .patch(
            booking.id,
            PatchBooking {
                status: Some(BookingStatus::Confirmed),
                notes: None,
            },
        )
        .await
        .expect("patch status only");
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert_eq!(
        confirmed.notes.as_deref(),
        Some("deposit received"),
        "a status-only patch must leave notes untouched"
    );

    repo.delete(booking.id).await.expect("cleanup");
}
