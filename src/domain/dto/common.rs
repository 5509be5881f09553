//! 여러 리소스가 공유하는 응답 DTO
//!
//! 기존 클라이언트가 MongoDB 드라이버의 결과 객체 필드명(`insertedId`, `deletedCount` 등)을
//! 읽고 있으므로 같은 이름으로 직렬화합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 삽입 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertResponse {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

impl From<ObjectId> for InsertResponse {
    fn from(id: ObjectId) -> Self {
        Self { inserted_id: id.to_hex() }
    }
}

/// 수정 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

/// 삭제 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

/// 개수 응답
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
