use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::queries::questions::{get_all_questions, get_questions_for_category},
    quiz::next_question,
    server::{app::AppState, deserializers::Stri64},
    telemetry::QUIZ_ROUND_CNTR,
};

use super::ApiResponse;

/// Marker the frontend sends in `quiz_category.type` when the player picked
/// "all categories".
const ALL_CATEGORIES: &str = "click";

#[derive(Deserialize)]
struct QuizRequest {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

#[derive(Deserialize)]
struct QuizCategory {
    id: Stri64,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Serialize)]
struct QuizRound {
    success: bool,
    previous_questions: Vec<i64>,
    current_question: CurrentQuestion,
}

#[derive(Serialize)]
#[serde(untagged)]
enum CurrentQuestion {
    Drawn {
        id: i64,
        question: String,
        answer: String,
    },
    // exhaustion placeholder, empty strings across the board
    Exhausted {
        id: String,
        question: String,
        answer: String,
    },
}

async fn advance_quiz(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResponse<QuizRound> {
    let Json(body) = payload?;
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = body;

    let candidates = if quiz_category.kind == ALL_CATEGORIES {
        get_all_questions(&pool).await?
    } else {
        // the client numbers categories one below the store, the +1 bridge
        // is part of the calling contract
        get_questions_for_category(&pool, quiz_category.id.0 + 1).await?
    };

    QUIZ_ROUND_CNTR
        .with_label_values(&[quiz_category.kind.as_str()])
        .inc();

    let current_question = match next_question(&candidates, &previous_questions, &mut thread_rng())
    {
        Some(picked) => CurrentQuestion::Drawn {
            id: picked.id,
            question: picked.question.clone(),
            answer: picked.answer.clone(),
        },
        None => CurrentQuestion::Exhausted {
            id: String::new(),
            question: String::new(),
            answer: String::new(),
        },
    };

    Ok(Json(QuizRound {
        success: true,
        previous_questions,
        current_question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(advance_quiz))
        .with_state(state)
}
