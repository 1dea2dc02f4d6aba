//! Store-level tests for the favorites semantics that the HTTP tests cannot
//! reach without the external catalog: the snapshot is constructed directly
//! instead of being fetched.

use moviefinder::db::{FavoriteAdd, FavoriteRemove, Store};
use moviefinder::models::movie::{Genre, Movie};

async fn memory_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

fn sample_movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: Some("A movie.".to_string()),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        release_date: Some("2020-01-01".to_string()),
        vote_average: Some(7.5),
        vote_count: Some(321),
        runtime: Some(120),
        original_language: Some("en".to_string()),
        genres: vec![Genre {
            id: 18,
            name: "Drama".to_string(),
        }],
    }
}

#[tokio::test]
async fn first_favorite_creates_profile_with_single_movie() {
    let store = memory_store().await;
    let movie = sample_movie(42, "The Answer");

    assert!(store.get_profile("u1").await.unwrap().is_none());

    let outcome = store.add_favorite("u1", &movie).await.unwrap();
    assert_eq!(outcome, FavoriteAdd::CreatedUser);

    let profile = store.get_profile("u1").await.unwrap().unwrap();
    assert_eq!(profile.username, "u1");
    assert_eq!(profile.favorites, vec![movie]);
}

#[tokio::test]
async fn duplicate_add_is_conflict_and_leaves_sequence_unchanged() {
    let store = memory_store().await;
    let movie = sample_movie(42, "The Answer");

    assert_eq!(
        store.add_favorite("u1", &movie).await.unwrap(),
        FavoriteAdd::CreatedUser
    );
    assert_eq!(
        store.add_favorite("u1", &movie).await.unwrap(),
        FavoriteAdd::AlreadyFavorited
    );

    let favorites = store.list_favorites("u1").await.unwrap().unwrap();
    assert_eq!(favorites.len(), 1);
}

#[tokio::test]
async fn remove_of_absent_movie_is_conflict_and_leaves_sequence_unchanged() {
    let store = memory_store().await;
    let movie = sample_movie(42, "The Answer");

    store.add_favorite("u1", &movie).await.unwrap();

    assert_eq!(
        store.remove_favorite("u1", "7").await.unwrap(),
        FavoriteRemove::NotFavorited
    );

    let favorites = store.list_favorites("u1").await.unwrap().unwrap();
    assert_eq!(favorites.len(), 1);
}

#[tokio::test]
async fn remove_for_unknown_user_is_not_found() {
    let store = memory_store().await;

    assert_eq!(
        store.remove_favorite("ghost", "42").await.unwrap(),
        FavoriteRemove::UserNotFound
    );
}

#[tokio::test]
async fn add_conflict_remove_conflict_sequence() {
    let store = memory_store().await;
    let movie = sample_movie(42, "The Answer");

    assert_eq!(
        store.add_favorite("u1", &movie).await.unwrap(),
        FavoriteAdd::CreatedUser
    );
    assert_eq!(
        store.add_favorite("u1", &movie).await.unwrap(),
        FavoriteAdd::AlreadyFavorited
    );

    assert_eq!(
        store.remove_favorite("u1", "42").await.unwrap(),
        FavoriteRemove::Removed
    );
    assert_eq!(
        store.list_favorites("u1").await.unwrap().unwrap(),
        Vec::<Movie>::new()
    );

    assert_eq!(
        store.remove_favorite("u1", "42").await.unwrap(),
        FavoriteRemove::NotFavorited
    );
}

#[tokio::test]
async fn favorites_keep_insertion_order() {
    let store = memory_store().await;

    let movies = [
        sample_movie(3, "Third"),
        sample_movie(1, "First"),
        sample_movie(2, "Second"),
    ];

    for movie in &movies {
        store.add_favorite("u1", movie).await.unwrap();
    }

    let favorites = store.list_favorites("u1").await.unwrap().unwrap();
    let titles: Vec<&str> = favorites.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Third", "First", "Second"]);
}

#[tokio::test]
async fn second_user_add_after_profile_exists_is_plain_add() {
    let store = memory_store().await;

    store
        .add_favorite("u1", &sample_movie(1, "First"))
        .await
        .unwrap();

    assert_eq!(
        store
            .add_favorite("u1", &sample_movie(2, "Second"))
            .await
            .unwrap(),
        FavoriteAdd::Added
    );
}

#[tokio::test]
async fn comment_listing_is_strictly_newest_first() {
    let store = memory_store().await;

    for content in ["a", "b", "c", "d"] {
        store.post_comment("u1", "42", content).await.unwrap();
    }

    let comments = store.comments_for_movie("42").await.unwrap();
    let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["d", "c", "b", "a"]);

    // Strictness: same-instant inserts still have a total order
    for window in comments.windows(2) {
        assert!(window[0].created_at >= window[1].created_at);
        if window[0].created_at == window[1].created_at {
            assert!(window[0].id > window[1].id);
        }
    }
}
