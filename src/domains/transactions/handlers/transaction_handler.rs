use crate::domains::transactions::models::{
    CreateTransactionRequest, DeleteTransactionRequest, MessageResponse, Transaction,
    UpdateTransactionRequest,
};
use crate::shared::services::AppState;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::errors::TransactionError;
use crate::shared::middleware::request::{JsonBody, PathParam};
use axum::{extract::State, http::StatusCode, Json};

/// 거래 생성 핸들러
/// Create transaction handler
#[utoipa::path(
    post,
    path = "/transacciones",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction created successfully", body = Transaction),
        (status = 400, description = "Missing fields, invalid tipo or unknown category"),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions",
    security(("BearerAuth" = []))
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    JsonBody(request): JsonBody<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), (StatusCode, Json<serde_json::Value>)> {
    let transaction = app_state
        .transaction_state
        .transaction_service
        .create_transaction(authenticated_user.user_id, request)
        .await
        .map_err(|e: TransactionError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// 사용자의 모든 거래 조회 핸들러
/// List transactions handler (카테고리 이름 포함)
#[utoipa::path(
    get,
    path = "/transacciones",
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = [Transaction]),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions",
    security(("BearerAuth" = []))
)]
pub async fn get_transactions(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<Vec<Transaction>>, (StatusCode, Json<serde_json::Value>)> {
    let transactions = app_state
        .transaction_state
        .transaction_service
        .get_transactions(authenticated_user.user_id)
        .await
        .map_err(|e: TransactionError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(transactions))
}

/// 거래 단건 조회 핸들러
/// Get transaction by ID handler
#[utoipa::path(
    get,
    path = "/transacciones/{id}",
    params(
        ("id" = u64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Transaction retrieved successfully", body = Transaction),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 404, description = "Transaction not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions",
    security(("BearerAuth" = []))
)]
pub async fn get_transaction(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    PathParam(transaction_id): PathParam<u64>,
) -> Result<Json<Transaction>, (StatusCode, Json<serde_json::Value>)> {
    let transaction = app_state
        .transaction_state
        .transaction_service
        .get_transaction(authenticated_user.user_id, transaction_id)
        .await
        .map_err(|e: TransactionError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(transaction))
}

/// 거래 수정 핸들러
/// Update transaction handler (전달된 필드만 수정)
#[utoipa::path(
    put,
    path = "/transacciones",
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Transaction updated", body = MessageResponse),
        (status = 400, description = "Invalid tipo, unknown category or nothing to update"),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 404, description = "Transaction not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions",
    security(("BearerAuth" = []))
)]
pub async fn update_transaction(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    JsonBody(request): JsonBody<UpdateTransactionRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .transaction_state
        .transaction_service
        .update_transaction(authenticated_user.user_id, request)
        .await
        .map_err(|e: TransactionError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(MessageResponse {
        message: "Transaction updated".to_string(),
    }))
}

/// 거래 삭제 핸들러
/// Delete transaction handler
#[utoipa::path(
    delete,
    path = "/transacciones",
    request_body = DeleteTransactionRequest,
    responses(
        (status = 200, description = "Transaction deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 404, description = "Transaction not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions",
    security(("BearerAuth" = []))
)]
pub async fn delete_transaction(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    JsonBody(request): JsonBody<DeleteTransactionRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .transaction_state
        .transaction_service
        .delete_transaction(authenticated_user.user_id, request)
        .await
        .map_err(|e: TransactionError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(MessageResponse {
        message: "Transaction deleted".to_string(),
    }))
}
