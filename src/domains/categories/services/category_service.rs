use crate::shared::database::{CategoryRepository, Database};
use crate::domains::categories::models::{Category, CreateCategoryRequest};
use crate::shared::errors::CategoryError;

/// 카테고리 서비스
/// CategoryService: per-user category listing and creation
#[derive(Clone)]
pub struct CategoryService {
    db: Database,
}

impl CategoryService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 사용자 카테고리 조회
    /// List the user's categories, optionally of a single kind
    pub async fn get_categories(
        &self,
        user_id: u64,
        kind: Option<&str>,
    ) -> Result<Vec<Category>, CategoryError> {
        let repo = CategoryRepository::new(self.db.pool().clone());
        repo.get_categories(user_id, kind.filter(|k| !k.is_empty()))
            .await
            .map_err(|e| CategoryError::DatabaseError(format!("Failed to fetch categories: {:#}", e)))
    }

    /// 카테고리 생성
    /// Create category
    pub async fn create_category(
        &self,
        user_id: u64,
        request: CreateCategoryRequest,
    ) -> Result<Category, CategoryError> {
        let (name, kind) = request.required_fields().ok_or(CategoryError::MissingFields)?;

        let repo = CategoryRepository::new(self.db.pool().clone());
        repo.create_category(name, kind, user_id)
            .await
            .map_err(|e| CategoryError::DatabaseError(format!("Failed to create category: {:#}", e)))
    }
}
