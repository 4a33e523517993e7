//! Property-based tests for score bookkeeping and ranking
//!
//! Runs against `MemoryStore`; the conformance suite in the crate keeps
//! `SqlStore` on the same contract.

use assert_matches::assert_matches;
use proptest::prelude::*;
use snake_arena::backend::store::{GameStore, MemoryStore, NewScore, NewUser, RankQuery};
use snake_arena::shared::GameMode;

fn mode_strategy() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::PassThrough), Just(GameMode::Walls)]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build")
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "$2b$04$not-a-real-hash".to_string(),
        avatar: String::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_high_score_is_max_and_games_are_counted(
        games in prop::collection::vec((0i64..10_000, mode_strategy()), 1..20),
    ) {
        let (user, flags) = runtime().block_on(async {
            let store = MemoryStore::new();
            let user = store.create_user(new_user("player")).await.expect("user");

            let mut flags = Vec::new();
            for (score, mode) in &games {
                let recorded = store
                    .record_score(user.id, NewScore { score: *score, mode: *mode, duration: 1 })
                    .await
                    .expect("score");
                flags.push(recorded.is_new_high_score());
            }

            let user = store.find_user_by_id(user.id).await.expect("lookup");
            (user, flags)
        });

        let user = user.expect("user still exists");
        let max = games.iter().map(|(score, _)| *score).max().unwrap_or(0);
        prop_assert_eq!(user.high_score, max);
        prop_assert_eq!(user.games_played, games.len() as i64);

        let mut best = 0;
        for ((score, _), flag) in games.iter().zip(flags) {
            prop_assert_eq!(flag, *score > best);
            best = best.max(*score);
        }
    }

    #[test]
    fn test_rank_pages_are_sorted_and_concatenate(
        scores in prop::collection::vec((0i64..500, mode_strategy()), 0..30),
        page in 1i64..7,
        filter in prop::option::of(mode_strategy()),
    ) {
        let (full, paged) = runtime().block_on(async {
            let store = MemoryStore::new();
            let user = store.create_user(new_user("ranker")).await.expect("user");
            for (score, mode) in &scores {
                store
                    .record_score(user.id, NewScore { score: *score, mode: *mode, duration: 1 })
                    .await
                    .expect("score");
            }

            let full = store.rank(RankQuery::new(filter, 100, 0)).await.expect("rank");

            let mut paged = Vec::new();
            let mut offset = 0;
            loop {
                let chunk = store.rank(RankQuery::new(filter, page, offset)).await.expect("rank");
                if chunk.is_empty() {
                    break;
                }
                offset += chunk.len() as i64;
                paged.extend(chunk);
            }
            (full, paged)
        });

        prop_assert!(full.windows(2).all(|pair| pair[0].score >= pair[1].score));
        if let Some(mode) = filter {
            prop_assert!(full.iter().all(|event| event.mode == mode));
        }

        let full_ids: Vec<i64> = full.iter().map(|event| event.id).collect();
        let paged_ids: Vec<i64> = paged.iter().map(|event| event.id).collect();
        prop_assert_eq!(full_ids, paged_ids);
    }
}

#[tokio::test]
async fn test_unknown_user_score_rejected() {
    let store = MemoryStore::new();
    let result = store
        .record_score(404, NewScore { score: 1, mode: GameMode::Walls, duration: 1 })
        .await;
    assert_matches!(result, Err(snake_arena::backend::store::StoreError::UnknownUser(404)));
}
