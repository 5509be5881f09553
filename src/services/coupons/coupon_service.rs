use std::sync::Arc;
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::{Map, Value};

use crate::{
    domain::dto::DeleteResponse,
    errors::AppError,
    repositories::CouponRepository,
    utils::{bson_json::json_to_document, string_utils::parse_object_id},
};

/// 쿠폰 관리 서비스 (관리자)
///
/// 쿠폰은 스키마가 정해져 있지 않아 본문을 그대로 저장합니다.
/// 이 서비스에서 실제로 문서를 삭제하는 유일한 리소스입니다.
pub struct CouponService {
    coupon_repo: Arc<dyn CouponRepository>,
}

impl CouponService {
    pub fn new(coupon_repo: Arc<dyn CouponRepository>) -> Self {
        Self { coupon_repo }
    }

    pub async fn create(&self, body: Map<String, Value>) -> Result<ObjectId, AppError> {
        let mut coupon = json_to_document(body)?;
        coupon.remove("_id");

        let id = self.coupon_repo.insert(coupon).await?;
        log::info!("쿠폰 생성: {}", id);
        Ok(id)
    }

    pub async fn list_all(&self) -> Result<Vec<Document>, AppError> {
        self.coupon_repo.find_all().await
    }

    /// ID 로 쿠폰을 삭제합니다. 없는 ID 는 `NotFound` 입니다.
    pub async fn delete_by_id(&self, id: &str) -> Result<DeleteResponse, AppError> {
        let object_id = parse_object_id(id)?;
        let deleted_count = self.coupon_repo.delete_by_id(&object_id).await?;

        if deleted_count == 0 {
            return Err(AppError::NotFound(format!("쿠폰을 찾을 수 없습니다: {}", id)));
        }

        log::info!("쿠폰 삭제: {}", id);
        Ok(DeleteResponse { deleted_count })
    }
}
