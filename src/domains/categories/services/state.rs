// Categories domain state
// 카테고리 도메인 상태
use crate::shared::database::Database;
use crate::domains::categories::services::CategoryService;

#[derive(Clone)]
pub struct CategoryState {
    pub category_service: CategoryService,
}

impl CategoryState {
    pub fn new(db: Database) -> Self {
        Self {
            category_service: CategoryService::new(db),
        }
    }
}
