// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_scaffold_core::{AccessResult, TrustedFragment};
use sqlx::MySqlPool;

mod score {
    include!("../generated/score_model.generated.rs");
}

mod problem {
    include!("../generated/problem_model.generated.rs");
}

mod event {
    include!("../generated/event_model.generated.rs");
}

mod gamestate {
    include!("../generated/gamestate_model.generated.rs");
}

mod user_has_video {
    include!("../generated/user_has_video_model.generated.rs");
}

use event::{Event, EventManager};
use gamestate::{Gamestate, GamestateManager};
use problem::{Problem, ProblemManager};
use score::{Score, ScoreManager};
use user_has_video::{UserHasVideo, UserHasVideoManager};

const POSITIVE: TrustedFragment = TrustedFragment::from_static("value > 0");

async fn scores(pool: MySqlPool) -> AccessResult<Vec<u32>> {
    let manager = ScoreManager::new(pool);
    let mut score = Score {
        user_id: 7,
        value: 42,
        ..Score::default()
    };

    let created = manager.create(&mut score).await?;
    assert!(created.status.is_success());
    let fetched: Score = manager.get(score.id, score.user_id).await?.into_value();
    manager.update(&fetched, fetched.user_id).await?;
    let _owned: Vec<Score> = manager.list(fetched.user_id).await?.value;
    let _positive: Vec<Score> = manager.custom_list(&POSITIVE).await?.value;
    manager
        .custom_sql(&TrustedFragment::trusted("DELETE FROM scores WHERE value < 0"))
        .await?;
    manager.delete(score.id, score.user_id).await?;
    manager.custom_id_list(&POSITIVE).await
}

async fn problems(pool: MySqlPool) -> AccessResult<()> {
    let manager = ProblemManager::new(pool);
    let mut problem = Problem::default();
    manager.create(&mut problem).await?;
    manager.update(&problem).await?;
    let _all: Vec<Problem> = manager.list().await?.value;
    manager.delete(problem.id).await
}

async fn events(pool: MySqlPool) -> AccessResult<Event> {
    let manager = EventManager::new(pool);
    let mut event = Event {
        user_id: 3,
        event_type: "login".to_string(),
        value: "web".to_string(),
        ..Event::default()
    };
    manager.create(&mut event).await?;
    let _timestamp: chrono::NaiveDateTime = event.timestamp;
    manager.get(event.id, event.user_id).await
}

async fn gamestates(pool: MySqlPool) -> AccessResult<()> {
    let manager = GamestateManager::new(pool);
    let mut state = Gamestate {
        user_id: 9,
        target: 4
    };
    manager.create(&mut state).await?;
    let _owned: Vec<Gamestate> = manager.list(state.user_id).await?.value;
    manager.get(state.user_id).await?;
    manager.update(&state).await?;
    manager.delete(state.user_id).await
}

async fn videos(pool: MySqlPool) -> AccessResult<()> {
    let manager = UserHasVideoManager::new(pool);
    let mut link = UserHasVideo {
        user_id: 1,
        video_id: 2,
        ..UserHasVideo::default()
    };
    manager.create(&mut link).await?;
    manager.update(&link, link.user_id).await?;
    manager.delete(link.id, link.user_id).await
}

fn main() {
    assert_eq!(Score::TABLE, "scores");
    assert!(score::CREATE_SCORE_TABLE_SQL.starts_with("CREATE TABLE scores ("));
    assert_eq!(Score::default().to_string(), "Id: 0, UserId: 0, Value: 0");
    assert_eq!(Gamestate::COLUMNS, &[("UserId", "user_id"), ("Target", "target")]);

    let _ = (scores, problems, events, gamestates, videos);
}
