use std::sync::Arc;
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::{Map, Value};

use crate::{
    errors::AppError,
    repositories::AnnouncementRepository,
    utils::bson_json::json_to_document,
};

/// 공지사항 서비스 (추가 전용)
pub struct AnnouncementService {
    announcement_repo: Arc<dyn AnnouncementRepository>,
}

impl AnnouncementService {
    pub fn new(announcement_repo: Arc<dyn AnnouncementRepository>) -> Self {
        Self { announcement_repo }
    }

    pub async fn create(&self, body: Map<String, Value>) -> Result<ObjectId, AppError> {
        let mut announcement = json_to_document(body)?;
        announcement.remove("_id");

        if announcement.is_empty() {
            return Err(AppError::ValidationError("공지 내용이 비어 있습니다".to_string()));
        }

        let id = self.announcement_repo.insert(announcement).await?;
        log::info!("공지 등록: {}", id);
        Ok(id)
    }

    pub async fn list_all(&self) -> Result<Vec<Document>, AppError> {
        self.announcement_repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryDocumentRepository;
    use serde_json::json;

    #[actix_web::test]
    async fn test_create_and_list() {
        let service = AnnouncementService::new(Arc::new(MemoryDocumentRepository::default()));
        let body = json!({ "title": "Water outage", "description": "Block B, 10am-2pm" });

        service.create(body.as_object().unwrap().clone()).await.unwrap();

        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].get_str("title").unwrap(), "Water outage");
    }

    #[actix_web::test]
    async fn test_empty_announcement_rejected() {
        let service = AnnouncementService::new(Arc::new(MemoryDocumentRepository::default()));

        let result = service.create(Map::new()).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
