//! Integration tests for refresh-token sessions.

mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tour_db::models::session::NewSession;
use tour_db::repositories::SessionRepo;

fn session(user_id: i64, hash: &str) -> NewSession {
    NewSession {
        user_id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + Duration::days(7),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rotation_replaces_the_session_once(pool: PgPool) {
    let user = common::create_user(&pool, "rotator@example.com").await;
    let first = SessionRepo::open(&pool, &session(user, "hash-a")).await.unwrap();

    let second = SessionRepo::rotate(&pool, first.id, &session(user, "hash-b"))
        .await
        .unwrap()
        .expect("first rotation succeeds");
    assert_eq!(second.user_id, user);

    assert!(SessionRepo::find_active(&pool, "hash-a").await.unwrap().is_none());
    assert!(SessionRepo::find_active(&pool, "hash-b").await.unwrap().is_some());

    // Replaying the old session stores nothing.
    let replay = SessionRepo::rotate(&pool, first.id, &session(user, "hash-c"))
        .await
        .unwrap();
    assert!(replay.is_none());
    assert!(SessionRepo::find_active(&pool, "hash-c").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_sessions_are_not_active(pool: PgPool) {
    let user = common::create_user(&pool, "expired@example.com").await;
    let mut stale = session(user, "hash-old");
    stale.expires_at = Utc::now() - Duration::minutes(1);
    SessionRepo::open(&pool, &stale).await.unwrap();

    assert!(SessionRepo::find_active(&pool, "hash-old").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn revoke_all_only_touches_one_user(pool: PgPool) {
    let ann = common::create_user(&pool, "ann@example.com").await;
    let bob = common::create_user(&pool, "bob@example.com").await;
    SessionRepo::open(&pool, &session(ann, "ann-1")).await.unwrap();
    SessionRepo::open(&pool, &session(ann, "ann-2")).await.unwrap();
    SessionRepo::open(&pool, &session(bob, "bob-1")).await.unwrap();

    assert_eq!(SessionRepo::revoke_all_for_user(&pool, ann).await.unwrap(), 2);
    assert!(SessionRepo::find_active(&pool, "ann-2").await.unwrap().is_none());
    assert!(SessionRepo::find_active(&pool, "bob-1").await.unwrap().is_some());
}
