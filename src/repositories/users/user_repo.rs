//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **자연 키**: 이메일 (유니크 인덱스 `email_unique`)
//! - **첫 쓰기 우선**: `$setOnInsert` + `upsert` 로 동시에 들어온 첫 저장도 문서 하나로 수렴
//! - **부분 수정**: 역할 변경은 `$set` 으로 `role` 필드만 수정

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ReturnDocument,
    Collection,
};

use crate::{
    db::{collections, Database},
    domain::{dto::UpdateResponse, entities::users::{User, UserRole}},
    errors::{is_duplicate_key, AppError},
};

/// 사용자 데이터 액세스 트레이트
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 이메일이 없을 때만 사용자를 저장하고, 저장소에 남은 문서를 반환합니다.
    ///
    /// 이미 있는 경우 기존 문서가 그대로 반환되며 어떤 필드도 바뀌지 않습니다.
    async fn insert_if_absent(&self, user: User) -> Result<User, AppError>;

    /// 전체 사용자 조회
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// 동등 비교 필터로 사용자 조회
    async fn find_by_filter(&self, filter: Document) -> Result<Vec<User>, AppError>;

    /// ID 로 역할 변경
    async fn set_role_by_id(&self, id: &ObjectId, role: UserRole) -> Result<UpdateResponse, AppError>;

    /// 이메일로 역할 변경
    async fn set_role_by_email(&self, email: &str, role: UserRole) -> Result<UpdateResponse, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Arc<Database>) -> Self {
        Self {
            collection: db.collection::<User>(collections::USERS),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(AppError::database)
    }

    async fn insert_if_absent(&self, user: User) -> Result<User, AppError> {
        let email = user.email.clone();
        let on_insert = mongodb::bson::to_document(&user)
            .map_err(|e| AppError::InternalError(format!("사용자 직렬화 실패: {}", e)))?;

        let result = self.collection
            .find_one_and_update(doc! { "email": email.as_str() }, doc! { "$setOnInsert": on_insert })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await;

        match result {
            Ok(Some(stored)) => Ok(stored),
            Ok(None) => Err(AppError::InternalError(format!("upsert 후 사용자를 찾을 수 없습니다: {}", email))),
            // 동시에 들어온 upsert 가 먼저 삽입한 경우
            Err(e) if is_duplicate_key(&e) => {
                log::debug!("동시 upsert 감지, 기존 사용자 반환: {}", email);
                self.find_by_email(&email)
                    .await?
                    .ok_or_else(|| AppError::DatabaseError(e.to_string()))
            }
            Err(e) => Err(AppError::database(e)),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.find_by_filter(doc! {}).await
    }

    async fn find_by_filter(&self, filter: Document) -> Result<Vec<User>, AppError> {
        let cursor = self.collection
            .find(filter)
            .await
            .map_err(AppError::database)?;

        cursor.try_collect().await.map_err(AppError::database)
    }

    async fn set_role_by_id(&self, id: &ObjectId, role: UserRole) -> Result<UpdateResponse, AppError> {
        let result = self.collection
            .update_one(doc! { "_id": *id }, doc! { "$set": { "role": role.as_str() } })
            .await
            .map_err(AppError::database)?;

        Ok(UpdateResponse {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn set_role_by_email(&self, email: &str, role: UserRole) -> Result<UpdateResponse, AppError> {
        let result = self.collection
            .update_one(doc! { "email": email }, doc! { "$set": { "role": role.as_str() } })
            .await
            .map_err(AppError::database)?;

        Ok(UpdateResponse {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }
}
