use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    categories::{all_category_names, current_categories},
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::{
                create_question, delete_question, get_all_questions, get_question_by_id,
            },
        },
        FormattedQuestion,
    },
    pagination::{paginate, PAGE_SIZE},
    search::filter_questions,
    server::{app::AppState, deserializers::deserialize_present},
};

use super::{ApiError, ApiResponse, PageQuery, QuestionList};

#[derive(Deserialize)]
struct QuestionPost {
    // the outer Option tells an absent key apart from an explicit null
    #[serde(
        default,
        rename = "searchTerm",
        deserialize_with = "deserialize_present"
    )]
    search_term: Option<Option<String>>,
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<FormattedQuestion>,
    total_questions: usize,
    current_category: Vec<String>,
}

#[derive(Serialize)]
struct NewEntry {
    question: String,
    answer: String,
    difficulty: i64,
    category: String,
}

#[derive(Serialize)]
struct CreatedQuestion {
    success: bool,
    new_entry: NewEntry,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PostOutcome {
    Search(SearchResults),
    Created(CreatedQuestion),
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    message: &'static str,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
    body: Bytes,
) -> ApiResponse<QuestionList> {
    let Query(PageQuery { page }) = page?;
    let questions = get_all_questions(&pool).await?;

    let last_page = questions.len().div_ceil(PAGE_SIZE);
    if page > last_page {
        return Err(ApiError::NotFound);
    }
    // a GET carrying a payload is malformed
    if !body.is_empty() {
        return Err(ApiError::BadRequest);
    }

    let formatted: Vec<FormattedQuestion> = questions.iter().map(|q| q.format()).collect();
    let current = paginate(page, &formatted).to_vec();
    let current_category = current_categories(&current);
    let categories = all_category_names(get_all_categories(&pool).await?);

    Ok(Json(QuestionList {
        success: true,
        total_questions: questions.len(),
        questions: current,
        categories,
        current_category,
    }))
}

async fn post_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuestionPost>, JsonRejection>,
) -> ApiResponse<PostOutcome> {
    let Json(body) = payload?;
    match body.search_term {
        Some(Some(term)) => {
            let matched = filter_questions(&term, get_all_questions(&pool).await?);
            let formatted: Vec<FormattedQuestion> = matched.iter().map(|q| q.format()).collect();
            // one entry per matched question, duplicates included
            let current_category = formatted.iter().map(|q| q.category.clone()).collect();

            Ok(Json(PostOutcome::Search(SearchResults {
                success: true,
                total_questions: formatted.len(),
                questions: formatted,
                current_category,
            })))
        }
        Some(None) => Err(ApiError::BadRequest),
        None => {
            let question = body.question.ok_or(ApiError::Unprocessable)?;
            let answer = body.answer.ok_or(ApiError::Unprocessable)?;
            let difficulty = body.difficulty.ok_or(ApiError::Unprocessable)?;
            let category = body.category.ok_or(ApiError::Unprocessable)?;
            if question.is_empty() || answer.is_empty() {
                return Err(ApiError::Unprocessable);
            }

            create_question(&pool, &question, &answer, difficulty, category).await?;

            // referential integrity is not enforced, fall back to the raw id
            // when the category row does not exist
            let category = get_category(&pool, category)
                .await?
                .map(|c| c.kind)
                .unwrap_or_else(|| category.to_string());

            Ok(Json(PostOutcome::Created(CreatedQuestion {
                success: true,
                new_entry: NewEntry {
                    question,
                    answer,
                    difficulty,
                    category,
                },
            })))
        }
    }
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Deleted> {
    get_question_by_id(&pool, id).await?.ok_or(ApiError::NotFound)?;
    delete_question(&pool, id).await?;

    Ok(Json(Deleted {
        success: true,
        message: "question deleted",
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(post_question))
        .route("/questions/{id}", delete(remove_question))
        .with_state(state)
}
