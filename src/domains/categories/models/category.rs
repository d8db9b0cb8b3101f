use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 카테고리 (categorias 테이블)
/// Category owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[schema(as = Category)]
pub struct Category {
    /// Category ID (BIGSERIAL)
    pub id: u64,

    /// 카테고리 이름
    /// Category name
    #[serde(rename = "nombre")]
    #[schema(example = "Supermercado")]
    pub name: String,

    /// 카테고리 종류 (자유 텍스트, 예: "Gasto")
    /// Category kind, free text used for filtering
    #[serde(rename = "tipo")]
    #[schema(example = "Gasto")]
    pub kind: String,

    /// 소유자 ID
    #[serde(rename = "usuario_id")]
    pub user_id: u64,
}

/// 카테고리 생성 요청
/// Create category request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(as = CreateCategoryRequest)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nombre")]
    #[schema(example = "Supermercado")]
    pub name: Option<String>,

    #[serde(rename = "tipo")]
    #[schema(example = "Gasto")]
    pub kind: Option<String>,
}

impl CreateCategoryRequest {
    /// `(name, kind)` when both are present and non-empty
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let name = self.name.as_deref().filter(|v| !v.is_empty())?;
        let kind = self.kind.as_deref().filter(|v| !v.is_empty())?;
        Some((name, kind))
    }
}

/// 카테고리 목록 쿼리 (?type=Gasto)
/// Optional kind filter for the category listing
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Only return categories of this kind
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
