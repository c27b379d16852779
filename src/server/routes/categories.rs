use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    categories::{all_category_names, current_categories},
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::get_questions_for_category,
        },
        FormattedQuestion,
    },
    pagination::paginate,
    server::app::AppState,
};

use super::{ApiError, ApiResponse, PageQuery, QuestionList};

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: Vec<String>,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoryList> {
    let categories = get_all_categories(&pool).await?;
    Ok(Json(CategoryList {
        success: true,
        categories: all_category_names(categories),
    }))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<QuestionList> {
    let Query(PageQuery { page }) = page?;
    get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;

    let questions = get_questions_for_category(&pool, id).await?;
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

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
