//! # 사용자 관리 서비스 구현
//!
//! 입주민/관리자 계정의 생명주기를 관리하는 비즈니스 로직입니다.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      UserService                      │
//! ├───────────────────────────────────────────────────────┤
//! │  upsert_if_absent   첫 저장만 기록, 이후 기존 문서 반환    │
//! │  get_by_email       없으면 NotFound                    │
//! │  list_filtered      role / email 동등 필터만 허용        │
//! │  demote_member      role → user, 다른 필드는 유지        │
//! └───────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!               Arc<dyn UserRepository>
//! ```
//!
//! 역할 승격(`member`)은 계약 승인 시 [`AgreementService`](crate::services::agreements::AgreementService)
//! 가 수행합니다.

use std::sync::Arc;
use mongodb::bson::Document;

use crate::{
    domain::{
        dto::{
            users::{MemberQuery, UpsertUserRequest},
            UpdateResponse,
        },
        entities::users::{User, UserRole},
    },
    errors::AppError,
    repositories::UserRepository,
    utils::{bson_json::json_to_document, string_utils::{parse_object_id, validate_required_string}},
};

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 이메일이 처음이면 사용자를 저장하고, 이미 있으면 기존 문서를 그대로 반환합니다.
    ///
    /// 새 사용자의 역할은 항상 `user` 이며 `timestamp` 는 서버 시각입니다.
    /// 두 번째 호출은 아무것도 쓰지 않으므로 `timestamp` 도 바뀌지 않습니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이메일 누락, `$` 로 시작하는 필드
    /// * `DatabaseError` - MongoDB 오류
    pub async fn upsert_if_absent(&self, request: UpsertUserRequest) -> Result<User, AppError> {
        let email = validate_required_string(&request.email, "email")?;

        if let Some(existing) = self.user_repo.find_by_email(&email).await? {
            log::debug!("기존 사용자 반환: {}", email);
            return Ok(existing);
        }

        let profile: Document = json_to_document(request.profile)?;
        let stored = self.user_repo.insert_if_absent(User::new(email, profile)).await?;

        log::info!("사용자 저장: {} ({})", stored.email, stored.role);
        Ok(stored)
    }

    /// 이메일로 사용자를 조회합니다.
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", email)))
    }

    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }

    /// 허용된 필터(`role`, `email`)로 사용자를 조회합니다.
    pub async fn list_filtered(&self, query: &MemberQuery) -> Result<Vec<User>, AppError> {
        let filter = query.to_filter()?;
        self.user_repo.find_by_filter(filter).await
    }

    /// 멤버를 일반 사용자로 강등합니다. 사용자 문서는 삭제되지 않습니다.
    ///
    /// 이전 역할과 무관하게 `role = user` 가 되며 다른 필드는 그대로 남습니다.
    pub async fn demote_member(&self, id: &str) -> Result<UpdateResponse, AppError> {
        let object_id = parse_object_id(id)?;
        let result = self.user_repo.set_role_by_id(&object_id, UserRole::User).await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)));
        }

        log::info!("멤버 강등: {}", id);
        Ok(result)
    }
}
