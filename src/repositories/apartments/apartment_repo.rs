//! 아파트 리포지토리
//!
//! `apartmentCollection` 은 이 서비스에서 읽기 전용입니다.
//! 전체 목록과 페이지 목록 모두 `_id` 오름차순으로 정렬하여 페이지 구간이 안정적으로 유지됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, Document}, Collection};

use crate::{
    db::{collections, Database},
    errors::AppError,
};

#[async_trait]
pub trait ApartmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;

    /// `_id` 순서에서 `skip` 개를 건너뛴 뒤 최대 `limit` 개를 반환합니다.
    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Document>, AppError>;

    async fn count(&self) -> Result<u64, AppError>;
}

pub struct MongoApartmentRepository {
    collection: Collection<Document>,
}

impl MongoApartmentRepository {
    pub fn new(db: &Arc<Database>) -> Self {
        Self {
            collection: db.collection::<Document>(collections::APARTMENTS),
        }
    }
}

#[async_trait]
impl ApartmentRepository for MongoApartmentRepository {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(AppError::database)?;

        cursor.try_collect().await.map_err(AppError::database)
    }

    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Document>, AppError> {
        let limit = i64::try_from(limit)
            .map_err(|_| AppError::ValidationError("size 값이 너무 큽니다".to_string()))?;

        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(AppError::database)?;

        cursor.try_collect().await.map_err(AppError::database)
    }

    async fn count(&self) -> Result<u64, AppError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(AppError::database)
    }
}
