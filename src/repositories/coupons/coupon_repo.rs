//! 쿠폰 리포지토리
//!
//! 쿠폰은 생성, 목록, 삭제만 지원하며 수정은 없습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, Collection};

use crate::{
    db::{collections, Database},
    errors::AppError,
    repositories::inserted_object_id,
};

#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn insert(&self, coupon: Document) -> Result<ObjectId, AppError>;

    async fn find_all(&self) -> Result<Vec<Document>, AppError>;

    /// 삭제된 문서 수(0 또는 1)를 반환합니다.
    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, AppError>;
}

pub struct MongoCouponRepository {
    collection: Collection<Document>,
}

impl MongoCouponRepository {
    pub fn new(db: &Arc<Database>) -> Self {
        Self {
            collection: db.collection::<Document>(collections::COUPONS),
        }
    }
}

#[async_trait]
impl CouponRepository for MongoCouponRepository {
    async fn insert(&self, coupon: Document) -> Result<ObjectId, AppError> {
        let result = self.collection
            .insert_one(coupon)
            .await
            .map_err(AppError::database)?;

        inserted_object_id(result.inserted_id)
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(AppError::database)?;

        cursor.try_collect().await.map_err(AppError::database)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(AppError::database)?;

        Ok(result.deleted_count)
    }
}
