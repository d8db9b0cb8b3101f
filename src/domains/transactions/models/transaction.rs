use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::shared::errors::TransactionError;

// =====================================================
// Transaction 모델
// =====================================================
// 역할: 사용자의 수입/지출 기록
// Wire names follow the original API (descripcion, monto, fecha, tipo, ...).
// =====================================================

/// 거래 종류: 수입(Ingreso) 또는 지출(Gasto)
/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TransactionKind {
    #[serde(rename = "Ingreso")]
    Income,
    #[serde(rename = "Gasto")]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Ingreso",
            TransactionKind::Expense => "Gasto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Ingreso" => Some(TransactionKind::Income),
            "Gasto" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// 거래 정보 (데이터베이스에서 조회한 거래)
/// Transaction row
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
#[schema(as = Transaction)]
pub struct Transaction {
    pub id: u64,

    #[serde(rename = "descripcion")]
    #[schema(example = "Compra semanal")]
    pub description: String,

    /// 금액 (문자열로 직렬화)
    /// Amount, serialized as a decimal string
    #[serde(rename = "monto")]
    #[schema(value_type = String, example = "125.50")]
    pub amount: Decimal,

    #[serde(rename = "fecha")]
    #[schema(value_type = String, example = "2024-11-02")]
    pub date: NaiveDate,

    #[serde(rename = "tipo")]
    pub kind: TransactionKind,

    #[serde(rename = "categoria_id")]
    pub category_id: u64,

    /// 카테고리 이름 (목록 조회 시 JOIN)
    /// Category name, present on listings
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "usuario_id")]
    pub user_id: u64,
}

/// 검증된 새 거래
/// Validated insert payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category_id: u64,
    /// None 이면 DB 기본값 (CURRENT_DATE)
    pub date: Option<NaiveDate>,
}

/// 검증된 부분 수정
/// Validated partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionChanges {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
    pub category_id: Option<u64>,
}

impl TransactionChanges {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.kind.is_none()
            && self.category_id.is_none()
    }
}

/// 거래 생성 요청
/// Create transaction request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(as = CreateTransactionRequest)]
pub struct CreateTransactionRequest {
    #[serde(rename = "descripcion")]
    #[schema(example = "Compra semanal")]
    pub description: Option<String>,

    #[serde(rename = "monto")]
    #[schema(value_type = Option<String>, example = "125.50")]
    pub amount: Option<Decimal>,

    #[serde(rename = "tipo")]
    #[schema(example = "Gasto")]
    pub kind: Option<String>,

    #[serde(rename = "categoria_id")]
    #[schema(example = 1)]
    pub category_id: Option<u64>,

    /// 선택 사항, 기본값은 오늘
    /// Optional, defaults to today
    #[serde(rename = "fecha")]
    #[schema(value_type = Option<String>, example = "2024-11-02")]
    pub date: Option<NaiveDate>,
}

impl CreateTransactionRequest {
    pub fn validate(self) -> Result<NewTransaction, TransactionError> {
        const REQUIRED: &str = "descripcion, monto, tipo, categoria_id";

        let (Some(description), Some(amount), Some(kind), Some(category_id)) =
            (self.description, self.amount, self.kind, self.category_id)
        else {
            return Err(TransactionError::MissingFields(REQUIRED));
        };
        if description.is_empty() || kind.is_empty() || category_id == 0 {
            return Err(TransactionError::MissingFields(REQUIRED));
        }

        let kind = TransactionKind::parse(&kind).ok_or(TransactionError::InvalidKind)?;

        Ok(NewTransaction {
            description,
            amount,
            kind,
            category_id,
            date: self.date,
        })
    }
}

/// 거래 수정 요청
/// Update transaction request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(as = UpdateTransactionRequest)]
pub struct UpdateTransactionRequest {
    #[schema(example = 10)]
    pub id: Option<u64>,

    #[serde(rename = "descripcion")]
    pub description: Option<String>,

    #[serde(rename = "monto")]
    #[schema(value_type = Option<String>)]
    pub amount: Option<Decimal>,

    #[serde(rename = "fecha")]
    #[schema(value_type = Option<String>)]
    pub date: Option<NaiveDate>,

    #[serde(rename = "tipo")]
    pub kind: Option<String>,

    #[serde(rename = "categoria_id")]
    pub category_id: Option<u64>,
}

impl UpdateTransactionRequest {
    pub fn validate(self) -> Result<(u64, TransactionChanges), TransactionError> {
        let id = self.id.ok_or(TransactionError::MissingFields("id"))?;

        let kind = match self.kind.as_deref() {
            None | Some("") => None,
            Some(value) => Some(TransactionKind::parse(value).ok_or(TransactionError::InvalidKind)?),
        };

        let changes = TransactionChanges {
            description: self.description.filter(|d| !d.is_empty()),
            amount: self.amount,
            date: self.date,
            kind,
            category_id: self.category_id.filter(|c| *c != 0),
        };

        if changes.is_empty() {
            return Err(TransactionError::NothingToUpdate);
        }

        Ok((id, changes))
    }
}

/// 거래 삭제 요청
/// Delete transaction request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(as = DeleteTransactionRequest)]
pub struct DeleteTransactionRequest {
    #[schema(example = 10)]
    pub id: Option<u64>,
}

/// 메시지 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = MessageResponse)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn create_accepts_numeric_amount_and_defaults_date() {
        let req: CreateTransactionRequest = serde_json::from_str(
            r#"{"descripcion":"Pan","monto":12.5,"tipo":"Gasto","categoria_id":3}"#,
        )
        .unwrap();
        let new = req.validate().unwrap();
        assert_eq!(new.amount, Decimal::from_str("12.5").unwrap());
        assert_eq!(new.kind, TransactionKind::Expense);
        assert_eq!(new.date, None);
    }

    #[test]
    fn create_allows_zero_amount() {
        let req: CreateTransactionRequest = serde_json::from_str(
            r#"{"descripcion":"Ajuste","monto":0,"tipo":"Ingreso","categoria_id":1,"fecha":"2024-01-31"}"#,
        )
        .unwrap();
        let new = req.validate().unwrap();
        assert_eq!(new.amount, Decimal::ZERO);
        assert_eq!(new.date, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn create_rejects_missing_fields_before_kind() {
        let req: CreateTransactionRequest =
            serde_json::from_str(r#"{"descripcion":"Pan","tipo":"Otro","categoria_id":3}"#).unwrap();
        assert!(matches!(req.validate(), Err(TransactionError::MissingFields(_))));
    }

    #[test]
    fn create_rejects_unknown_kind() {
        let req: CreateTransactionRequest = serde_json::from_str(
            r#"{"descripcion":"Pan","monto":"1.00","tipo":"Otro","categoria_id":3}"#,
        )
        .unwrap();
        assert!(matches!(req.validate(), Err(TransactionError::InvalidKind)));
    }

    #[test]
    fn update_needs_id_and_a_change() {
        let req: UpdateTransactionRequest = serde_json::from_str(r#"{"monto":5}"#).unwrap();
        assert!(matches!(req.validate(), Err(TransactionError::MissingFields("id"))));

        let req: UpdateTransactionRequest = serde_json::from_str(r#"{"id":4}"#).unwrap();
        assert!(matches!(req.validate(), Err(TransactionError::NothingToUpdate)));

        let req: UpdateTransactionRequest =
            serde_json::from_str(r#"{"id":4,"tipo":"Ingreso"}"#).unwrap();
        let (id, changes) = req.validate().unwrap();
        assert_eq!(id, 4);
        assert_eq!(changes.kind, Some(TransactionKind::Income));
    }

    #[test]
    fn update_rejects_unknown_kind() {
        let req: UpdateTransactionRequest =
            serde_json::from_str(r#"{"id":4,"tipo":"Ahorro"}"#).unwrap();
        assert!(matches!(req.validate(), Err(TransactionError::InvalidKind)));
    }

    #[test]
    fn transaction_serializes_amount_as_string() {
        let tx = Transaction {
            id: 1,
            description: "Sueldo".into(),
            amount: Decimal::from_str("1500.00").unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            kind: TransactionKind::Income,
            category_id: 2,
            category: None,
            user_id: 7,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["monto"], "1500.00");
        assert_eq!(json["tipo"], "Ingreso");
        assert_eq!(json["fecha"], "2024-11-01");
        assert!(json.get("categoria").is_none());
    }
}
