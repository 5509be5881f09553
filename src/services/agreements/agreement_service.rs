//! # 입주 계약 서비스 구현
//!
//! 계약 생성과 상태 전이를 담당합니다.
//!
//! ## 승인 처리
//!
//! 승인은 두 번의 쓰기로 이루어집니다.
//!
//! 1. 계약 `status = approved`, `checkedTime = now`
//! 2. 계약자(`userEmail`) 역할 `member`
//!
//! 두 쓰기는 트랜잭션으로 묶이지 않습니다. 대신 둘 다 같은 값을 다시 써도 결과가 같으므로
//! (2) 가 실패하면 요청 전체를 실패로 돌려주고, 클라이언트가 같은 요청을 재시도하면
//! 이미 승인된 계약은 (1) 을 건너뛰고 (2) 만 다시 수행합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;

use crate::{
    domain::{
        dto::agreements::CreateAgreementRequest,
        entities::{
            agreements::{Agreement, AgreementStatus, DUPLICATE_AGREEMENT_MESSAGE},
            now_millis,
            users::UserRole,
        },
    },
    errors::AppError,
    repositories::{AgreementRepository, UserRepository},
    utils::{bson_json::json_to_document, string_utils::{parse_object_id, validate_required_string}},
};

/// 입주 계약 비즈니스 로직 서비스
pub struct AgreementService {
    agreement_repo: Arc<dyn AgreementRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AgreementService {
    pub fn new(agreement_repo: Arc<dyn AgreementRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { agreement_repo, user_repo }
    }

    /// 새 계약을 `pending` 상태로 저장합니다.
    ///
    /// 같은 `userEmail` 의 계약이 이미 있으면 기존 계약을 건드리지 않고 `ConflictError` 를 반환합니다.
    /// 동시에 들어온 요청은 `agreements.userEmail` 유니크 인덱스가 같은 에러로 거절합니다.
    pub async fn create(&self, request: CreateAgreementRequest) -> Result<ObjectId, AppError> {
        let user_email = validate_required_string(&request.user_email, "userEmail")?;

        if self.agreement_repo.find_by_email(&user_email).await?.is_some() {
            log::info!("중복 계약 요청 거절: {}", user_email);
            return Err(AppError::ConflictError(DUPLICATE_AGREEMENT_MESSAGE.to_string()));
        }

        let details = json_to_document(request.details)?;
        let agreement = Agreement::new_pending(user_email.clone(), request.rent, details);
        let id = self.agreement_repo.insert(agreement).await?;

        log::info!("계약 생성: {} ({})", user_email, id);
        Ok(id)
    }

    pub async fn list_all(&self) -> Result<Vec<Agreement>, AppError> {
        self.agreement_repo.find_all().await
    }

    /// 이메일로 계약 하나를 조회합니다.
    pub async fn get_by_email(&self, user_email: &str) -> Result<Agreement, AppError> {
        self.agreement_repo
            .find_by_email(user_email.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("계약을 찾을 수 없습니다: {}", user_email)))
    }

    /// 계약을 승인하고 계약자를 `member` 로 승격합니다.
    ///
    /// `fallback_email` 은 저장된 계약에 `userEmail` 이 비어 있을 때만 사용됩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 잘못된 ID, 승격할 이메일 없음
    /// * `NotFound` - 계약 없음
    /// * `ConflictError` - 이미 거절된 계약
    /// * `DatabaseError` - 어느 한 쪽 쓰기 실패 (재시도 가능)
    pub async fn approve(&self, id: &str, fallback_email: Option<String>) -> Result<Agreement, AppError> {
        let agreement = self.transition(id, AgreementStatus::Approved).await?;

        let email = if agreement.user_email.trim().is_empty() {
            fallback_email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .ok_or_else(|| AppError::ValidationError("승격할 userEmail 이 없습니다".to_string()))?
        } else {
            agreement.user_email.clone()
        };

        let result = self.user_repo.set_role_by_email(&email, UserRole::Member).await?;
        if result.matched_count == 0 {
            log::warn!("승인된 계약의 사용자 문서가 없습니다: {}", email);
        }

        log::info!("계약 승인: {} ({})", email, id);
        Ok(agreement)
    }

    /// 계약을 거절합니다. 사용자 역할은 바뀌지 않습니다.
    pub async fn reject(&self, id: &str) -> Result<Agreement, AppError> {
        let agreement = self.transition(id, AgreementStatus::Rejected).await?;

        log::info!("계약 거절: {} ({})", agreement.user_email, id);
        Ok(agreement)
    }

    /// 상태 전이 공통 처리
    ///
    /// 이미 `next` 상태인 계약은 다시 쓰지 않고 그대로 반환합니다.
    async fn transition(&self, id: &str, next: AgreementStatus) -> Result<Agreement, AppError> {
        let object_id = parse_object_id(id)?;

        let current = self.agreement_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("계약을 찾을 수 없습니다: {}", id)))?;

        if current.status == next {
            return Ok(current);
        }
        if !current.status.can_transition_to(next) {
            return Err(Self::forbidden_transition(current.status, next));
        }

        match self.agreement_repo.transition(&object_id, next, now_millis()).await? {
            Some(updated) => Ok(updated),
            // 조회와 수정 사이에 다른 요청이 상태를 바꾼 경우
            None => match self.agreement_repo.find_by_id(&object_id).await? {
                Some(latest) => Err(Self::forbidden_transition(latest.status, next)),
                None => Err(AppError::NotFound(format!("계약을 찾을 수 없습니다: {}", id))),
            },
        }
    }

    fn forbidden_transition(from: AgreementStatus, to: AgreementStatus) -> AppError {
        AppError::ConflictError(format!("{} 상태의 계약은 {} 로 바꿀 수 없습니다", from, to))
    }
}
