use utoipa::OpenApi;

use crate::domains::auth::models::*;
use crate::domains::categories::models::*;
use crate::domains::transactions::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::auth::handlers::auth_handler::register,
        crate::domains::auth::handlers::auth_handler::login,
        crate::domains::categories::handlers::category_handler::get_categories,
        crate::domains::categories::handlers::category_handler::create_category,
        crate::domains::transactions::handlers::transaction_handler::create_transaction,
        crate::domains::transactions::handlers::transaction_handler::get_transactions,
        crate::domains::transactions::handlers::transaction_handler::get_transaction,
        crate::domains::transactions::handlers::transaction_handler::update_transaction,
        crate::domains::transactions::handlers::transaction_handler::delete_transaction
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        LoginResponse,
        Category,
        CreateCategoryRequest,
        TransactionKind,
        Transaction,
        CreateTransactionRequest,
        UpdateTransactionRequest,
        DeleteTransactionRequest,
        MessageResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Categories", description = "Per-user income and expense categories"),
        (name = "Transactions", description = "Per-user income and expense records")
    ),
    info(
        title = "Finance API Server",
        description = "Personal finance backend: categories and transactions behind bearer tokens",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
