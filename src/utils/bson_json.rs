//! BSON ↔ JSON 변환 유틸리티
//!
//! 응답 JSON 은 기존 Express 서버와 같은 모양이어야 합니다.
//! `serde_json` 으로 바로 직렬화하면 ObjectId 가 `{"$oid": "..."}` 로 나가므로,
//! 응답 직전에 [`document_to_json`] 으로 `_id` 를 16진수 문자열로 바꿉니다.
//!
//! | BSON | JSON |
//! |------|------|
//! | ObjectId | `"665f1c..."` |
//! | DateTime | RFC 3339 문자열 |
//! | Int32 / Int64 / Double | 숫자 |
//! | Decimal128 | 문자열 |
//! | 그 외 | relaxed extended JSON |

use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};
use crate::errors::{AppError, AppResult, ErrorContext};

/// BSON 값을 클라이언트용 JSON 값으로 변환합니다.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or_else(|_| Value::from(dt.timestamp_millis())),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(n) => Value::from(n),
        Bson::Int64(n) => Value::from(n),
        Bson::Double(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Bson::Decimal128(d) => Value::String(d.to_string()),
        Bson::Null | Bson::Undefined => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}

/// 문서를 JSON 객체로 변환합니다.
pub fn document_to_json(doc: Document) -> Value {
    Value::Object(document_to_map(doc))
}

/// 문서를 JSON 맵으로 변환합니다. 응답 DTO 의 flatten 필드에 사용합니다.
pub fn document_to_map(doc: Document) -> Map<String, Value> {
    doc.into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

/// 문서 목록을 JSON 배열로 변환합니다.
pub fn documents_to_json(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(document_to_json).collect())
}

/// 타입이 정해진 엔티티(`User`, `Agreement` 등)를 응답 JSON 으로 변환합니다.
///
/// BSON 문서를 한 번 거치므로 `_id` 가 다른 문서와 같은 16진수 문자열로 나갑니다.
pub fn entity_to_json<T: Serialize>(entity: &T) -> AppResult<Value> {
    mongodb::bson::to_document(entity)
        .map(document_to_json)
        .context("응답 직렬화 실패")
}

/// 엔티티 목록을 JSON 배열로 변환합니다.
pub fn entities_to_json<T: Serialize>(entities: &[T]) -> Result<Value, AppError> {
    entities
        .iter()
        .map(entity_to_json)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// 요청 본문의 JSON 맵을 저장용 문서로 변환합니다.
///
/// 클라이언트가 `$` 로 시작하는 키를 보내 연산자처럼 해석되는 것을 막기 위해
/// 최상위 키에 `$` 접두사가 있으면 거절합니다.
pub fn json_to_document(map: Map<String, Value>) -> Result<Document, AppError> {
    if let Some(key) = map.keys().find(|k| k.starts_with('$')) {
        return Err(AppError::ValidationError(format!("허용되지 않는 필드 이름입니다: {}", key)));
    }

    mongodb::bson::to_document(&map)
        .map_err(|e| AppError::ValidationError(format!("문서로 변환할 수 없는 본문입니다: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_object_ids_render_as_hex_strings() {
        let id = ObjectId::new();
        let json = document_to_json(doc! {
            "_id": id,
            "images": ["a.png", "b.png"],
            "owner": { "ref": id },
            "rent": 1500,
        });

        assert_eq!(json["_id"], json!(id.to_hex()));
        assert_eq!(json["owner"]["ref"], json!(id.to_hex()));
        assert_eq!(json["images"], json!(["a.png", "b.png"]));
        assert_eq!(json["rent"], json!(1500));
    }

    #[test]
    fn test_json_to_document_keeps_fields() {
        let body = json!({ "code": "SPRING10", "discount": 10, "active": true });
        let doc = json_to_document(body.as_object().unwrap().clone()).unwrap();

        assert_eq!(doc.get_str("code").unwrap(), "SPRING10");
        assert_eq!(doc.get_i64("discount").unwrap(), 10);
        assert!(doc.get_bool("active").unwrap());
    }

    #[test]
    fn test_json_to_document_rejects_operator_keys() {
        let body = json!({ "$where": "sleep(1000)" });
        let result = json_to_document(body.as_object().unwrap().clone());

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
