//! 결제 기록 리포지토리
//!
//! `payments` 는 추가 전용입니다. 삭제는 결제 기록 사가의 보상 단계에서만 사용됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, Collection};

use crate::{
    db::{collections, Database},
    domain::entities::payments::Payment,
    errors::AppError,
    repositories::inserted_object_id,
};

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn insert(&self, payment: Payment) -> Result<ObjectId, AppError>;

    /// 방금 저장한 결제를 되돌립니다. 삭제된 문서 수를 반환합니다.
    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, AppError>;
}

pub struct MongoPaymentRepository {
    collection: Collection<Payment>,
}

impl MongoPaymentRepository {
    pub fn new(db: &Arc<Database>) -> Self {
        Self {
            collection: db.collection::<Payment>(collections::PAYMENTS),
        }
    }
}

#[async_trait]
impl PaymentRepository for MongoPaymentRepository {
    async fn insert(&self, payment: Payment) -> Result<ObjectId, AppError> {
        let result = self.collection
            .insert_one(&payment)
            .await
            .map_err(AppError::database)?;

        inserted_object_id(result.inserted_id)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(AppError::database)?;

        Ok(result.deleted_count)
    }
}
