//! # 계약 리포지토리 구현
//!
//! `agreements` 컬렉션의 데이터 액세스 계층입니다.
//! 상태 전이는 조건부 `find_one_and_update` 한 번으로 처리하여,
//! 승인과 거절이 동시에 들어와도 approved ↔ rejected 전이가 저장되지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ReturnDocument,
    Collection,
};

use crate::{
    db::{collections, Database},
    domain::entities::agreements::{Agreement, AgreementStatus, DUPLICATE_AGREEMENT_MESSAGE},
    errors::{is_duplicate_key, AppError},
    repositories::inserted_object_id,
};

/// 계약 데이터 액세스 트레이트
#[async_trait]
pub trait AgreementRepository: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Agreement>, AppError>;

    async fn find_by_email(&self, user_email: &str) -> Result<Option<Agreement>, AppError>;

    async fn find_all(&self) -> Result<Vec<Agreement>, AppError>;

    /// 새 계약을 저장합니다. 같은 `userEmail` 이 이미 있으면 `ConflictError` 입니다.
    async fn insert(&self, agreement: Agreement) -> Result<ObjectId, AppError>;

    /// 상태를 `next` 로 바꾸고 처리 시각을 기록합니다.
    ///
    /// 반대쪽 최종 상태(approved ↔ rejected)인 문서는 수정하지 않고 `None` 을 반환합니다.
    /// 문서가 없을 때도 `None` 이므로 호출 측에서 구분해야 합니다.
    async fn transition(
        &self,
        id: &ObjectId,
        next: AgreementStatus,
        at_millis: i64,
    ) -> Result<Option<Agreement>, AppError>;

    /// `userEmail` 이 일치하는 계약의 `rent` 를 0 으로 초기화하고 수정된 계약을 반환합니다.
    async fn reset_rent(&self, user_email: &str) -> Result<Option<Agreement>, AppError>;
}

/// MongoDB 기반 계약 리포지토리
pub struct MongoAgreementRepository {
    collection: Collection<Agreement>,
}

impl MongoAgreementRepository {
    pub fn new(db: &Arc<Database>) -> Self {
        Self {
            collection: db.collection::<Agreement>(collections::AGREEMENTS),
        }
    }
}

/// 상태별 처리 시각 필드
fn time_field(status: AgreementStatus) -> Option<&'static str> {
    match status {
        AgreementStatus::Approved => Some("checkedTime"),
        AgreementStatus::Rejected => Some("rejectedTime"),
        AgreementStatus::Pending => None,
    }
}

/// `next` 로 전이할 수 없는 상태
fn blocking_status(next: AgreementStatus) -> Option<AgreementStatus> {
    match next {
        AgreementStatus::Approved => Some(AgreementStatus::Rejected),
        AgreementStatus::Rejected => Some(AgreementStatus::Approved),
        AgreementStatus::Pending => None,
    }
}

#[async_trait]
impl AgreementRepository for MongoAgreementRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Agreement>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(AppError::database)
    }

    async fn find_by_email(&self, user_email: &str) -> Result<Option<Agreement>, AppError> {
        self.collection
            .find_one(doc! { "userEmail": user_email })
            .await
            .map_err(AppError::database)
    }

    async fn find_all(&self) -> Result<Vec<Agreement>, AppError> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(AppError::database)?;

        cursor.try_collect().await.map_err(AppError::database)
    }

    async fn insert(&self, agreement: Agreement) -> Result<ObjectId, AppError> {
        match self.collection.insert_one(&agreement).await {
            Ok(result) => inserted_object_id(result.inserted_id),
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::ConflictError(DUPLICATE_AGREEMENT_MESSAGE.to_string()))
            }
            Err(e) => Err(AppError::database(e)),
        }
    }

    async fn transition(
        &self,
        id: &ObjectId,
        next: AgreementStatus,
        at_millis: i64,
    ) -> Result<Option<Agreement>, AppError> {
        let mut filter = doc! { "_id": *id };
        if let Some(blocked) = blocking_status(next) {
            filter.insert("status", doc! { "$ne": blocked.as_str() });
        }

        let mut set = doc! { "status": next.as_str() };
        if let Some(field) = time_field(next) {
            set.insert(field, at_millis);
        }

        self.collection
            .find_one_and_update(filter, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(AppError::database)
    }

    async fn reset_rent(&self, user_email: &str) -> Result<Option<Agreement>, AppError> {
        self.collection
            .find_one_and_update(doc! { "userEmail": user_email }, doc! { "$set": { "rent": 0 } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(AppError::database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_guards() {
        assert_eq!(blocking_status(AgreementStatus::Approved), Some(AgreementStatus::Rejected));
        assert_eq!(blocking_status(AgreementStatus::Rejected), Some(AgreementStatus::Approved));
        assert_eq!(time_field(AgreementStatus::Approved), Some("checkedTime"));
        assert_eq!(time_field(AgreementStatus::Rejected), Some("rejectedTime"));
    }
}
