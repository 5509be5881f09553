use std::sync::Arc;
use mongodb::bson::Document;

use crate::{
    domain::dto::{apartments::PaginationQuery, CountResponse},
    errors::AppError,
    repositories::ApartmentRepository,
};

/// 아파트 조회 서비스
///
/// 전체 목록과 페이지 목록은 같은 `_id` 순서를 사용합니다.
pub struct ApartmentService {
    apartment_repo: Arc<dyn ApartmentRepository>,
}

impl ApartmentService {
    pub fn new(apartment_repo: Arc<dyn ApartmentRepository>) -> Self {
        Self { apartment_repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Document>, AppError> {
        self.apartment_repo.find_all().await
    }

    /// `page`(1부터), `size` 에 해당하는 구간을 반환합니다.
    pub async fn list_paginated(&self, query: &PaginationQuery) -> Result<Vec<Document>, AppError> {
        let window = query.window()?;
        self.apartment_repo.find_page(window.skip, window.limit).await
    }

    pub async fn count(&self) -> Result<CountResponse, AppError> {
        let count = self.apartment_repo.count().await?;
        Ok(CountResponse { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryApartmentRepository;
    use mongodb::bson::doc;

    fn seeded(n: i32) -> ApartmentService {
        let apartments = (0..n).map(|i| doc! { "apartmentNo": i, "rent": 1000 + i }).collect();
        ApartmentService::new(Arc::new(MemoryApartmentRepository::with_apartments(apartments)))
    }

    #[actix_web::test]
    async fn test_second_page_returns_offsets_10_to_20() {
        let service = seeded(25);
        let all = service.list_all().await.unwrap();

        let page = service
            .list_paginated(&PaginationQuery { page: Some(2), size: Some(10) })
            .await
            .unwrap();

        assert_eq!(page, all[10..20].to_vec());
    }

    #[actix_web::test]
    async fn test_last_page_is_partial() {
        let service = seeded(25);

        let page = service
            .list_paginated(&PaginationQuery { page: Some(3), size: Some(10) })
            .await
            .unwrap();

        assert_eq!(page.len(), 5);
    }

    #[actix_web::test]
    async fn test_count() {
        assert_eq!(seeded(7).count().await.unwrap(), CountResponse { count: 7 });
    }
}
