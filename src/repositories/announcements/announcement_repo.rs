use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, Collection};

use crate::{
    db::{collections, Database},
    errors::AppError,
    repositories::inserted_object_id,
};

/// 공지사항 리포지토리 (추가 전용)
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn insert(&self, announcement: Document) -> Result<ObjectId, AppError>;

    async fn find_all(&self) -> Result<Vec<Document>, AppError>;
}

pub struct MongoAnnouncementRepository {
    collection: Collection<Document>,
}

impl MongoAnnouncementRepository {
    pub fn new(db: &Arc<Database>) -> Self {
        Self {
            collection: db.collection::<Document>(collections::ANNOUNCEMENTS),
        }
    }
}

#[async_trait]
impl AnnouncementRepository for MongoAnnouncementRepository {
    async fn insert(&self, announcement: Document) -> Result<ObjectId, AppError> {
        let result = self.collection
            .insert_one(announcement)
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
}
