use crate::domains::categories::models::{Category, CategoryQuery, CreateCategoryRequest};
use crate::shared::services::AppState;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::errors::CategoryError;
use crate::shared::middleware::request::JsonBody;
use axum::{extract::{Query, State}, http::StatusCode, Json};

/// 카테고리 목록 조회 핸들러
/// List categories handler
/// Note: 자신의 카테고리만 조회 가능 (토큰에서 user_id 추출)
#[utoipa::path(
    get,
    path = "/categorias",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Categories retrieved successfully", body = [Category]),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Categories",
    security(("BearerAuth" = []))
)]
pub async fn get_categories(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<Category>>, (StatusCode, Json<serde_json::Value>)> {
    let categories = app_state
        .category_state
        .category_service
        .get_categories(authenticated_user.user_id, query.kind.as_deref())
        .await
        .map_err(|e: CategoryError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(categories))
}

/// 카테고리 생성 핸들러
/// Create category handler
#[utoipa::path(
    post,
    path = "/categorias",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, description = "Missing nombre or tipo"),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Categories",
    security(("BearerAuth" = []))
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    JsonBody(request): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), (StatusCode, Json<serde_json::Value>)> {
    let category = app_state
        .category_state
        .category_service
        .create_category(authenticated_user.user_id, request)
        .await
        .map_err(|e: CategoryError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(category)))
}
