/**
 * Sample Data
 *
 * Optional demo population enabled with `SEED_SAMPLE_DATA=true`: five players
 * (password `password123`), a few recorded games each and one live game.
 *
 * Scores go through `GameStore::record_score`, so `high_score` and
 * `games_played` agree with the score log. Seeding is skipped when the first
 * demo account already exists, which makes a restart against a persistent
 * database a no-op.
 */

use chrono::{Duration, Utc};
use thiserror::Error;

use crate::backend::auth::password::hash_password;
use crate::backend::games::registry::{LiveGame, LiveGameRegistry};
use crate::backend::store::{GameStore, NewScore, NewUser, StoreError};
use crate::shared::GameMode;

/// Password shared by every demo account
pub const SAMPLE_PASSWORD: &str = "password123";

struct SamplePlayer {
    username: &'static str,
    email: &'static str,
    avatar: &'static str,
    games: &'static [(i64, GameMode, i64)],
}

const SAMPLE_PLAYERS: [SamplePlayer; 5] = [
    SamplePlayer {
        username: "SnakeMaster",
        email: "snake@test.com",
        avatar: "https://api.dicebear.com/7.x/lorelei/svg?seed=Chihiro&backgroundColor=b6e3f4",
        games: &[(1920, GameMode::PassThrough, 240), (2450, GameMode::Walls, 310)],
    },
    SamplePlayer {
        username: "ProGamer",
        email: "pro@test.com",
        avatar: "https://api.dicebear.com/7.x/lorelei/svg?seed=Totoro&backgroundColor=c0aede",
        games: &[(2100, GameMode::Walls, 280)],
    },
    SamplePlayer {
        username: "Speedster",
        email: "speed@test.com",
        avatar: "https://api.dicebear.com/7.x/lorelei/svg?seed=Ponyo&backgroundColor=ffdfbf",
        games: &[(1850, GameMode::PassThrough, 200)],
    },
    SamplePlayer {
        username: "KikiWitch",
        email: "kiki@test.com",
        avatar: "https://api.dicebear.com/7.x/lorelei/svg?seed=Kiki&backgroundColor=d1d4f9",
        games: &[(1600, GameMode::Walls, 190)],
    },
    SamplePlayer {
        username: "HowlWizard",
        email: "howl@test.com",
        avatar: "https://api.dicebear.com/7.x/lorelei/svg?seed=Howl&backgroundColor=ffd5dc",
        games: &[(2800, GameMode::PassThrough, 350)],
    },
];

/// Id of the demo live game
pub const SAMPLE_LIVE_GAME_ID: &str = "live1";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to hash sample password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// What a seeding run created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub scores: usize,
    pub live_games: usize,
}

/// Populate `store` and `live_games` with the demo data
///
/// Returns `None` when the demo data is already present.
pub async fn seed_sample_data(
    store: &dyn GameStore,
    live_games: &LiveGameRegistry,
    bcrypt_cost: u32,
) -> Result<Option<SeedReport>, SeedError> {
    if store
        .find_user_by_email(SAMPLE_PLAYERS[0].email)
        .await?
        .is_some()
    {
        tracing::info!("Sample data already present, skipping seed");
        return Ok(None);
    }

    // one hash for all accounts; bcrypt is slow by design
    let password_hash = hash_password(SAMPLE_PASSWORD, bcrypt_cost)?;
    let mut report = SeedReport::default();
    let mut live_player = None;

    for sample in &SAMPLE_PLAYERS {
        let user = store
            .create_user(NewUser {
                username: sample.username.to_string(),
                email: sample.email.to_string(),
                password_hash: password_hash.clone(),
                avatar: sample.avatar.to_string(),
            })
            .await?;
        report.users += 1;

        for &(score, mode, duration) in sample.games {
            store
                .record_score(
                    user.id,
                    NewScore {
                        score,
                        mode,
                        duration,
                    },
                )
                .await?;
            report.scores += 1;
        }

        if sample.username == "ProGamer" {
            live_player = Some(user.id);
        }
    }

    if let Some(player_id) = live_player {
        live_games
            .upsert(LiveGame {
                id: SAMPLE_LIVE_GAME_ID.to_string(),
                player_id,
                score: 340,
                mode: GameMode::Walls,
                viewers: 12,
                started_at: Utc::now() - Duration::minutes(5),
            })
            .await;
        report.live_games += 1;
    }

    tracing::info!(
        users = report.users,
        scores = report.scores,
        live_games = report.live_games,
        "Sample data seeded"
    );

    Ok(Some(report))
}
