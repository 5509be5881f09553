use serde::Deserialize;
use crate::errors::AppError;

/// `GET /all-apartments` 쿼리 파라미터
///
/// `page` 는 1부터 시작하며 생략하면 1 입니다. `size` 는 필수입니다.
/// 숫자가 아닌 값은 쿼리 파싱 단계에서 400 으로 거절됩니다.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

/// 검증된 페이지 구간 (`skip`, `limit`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl PaginationQuery {
    /// 쿼리를 검증하고 `[(page-1)*size, (page-1)*size+size)` 구간으로 변환합니다.
    pub fn window(&self) -> Result<PageWindow, AppError> {
        let page = self.page.unwrap_or(1);
        let size = self.size
            .ok_or_else(|| AppError::ValidationError("size 쿼리 파라미터는 필수입니다".to_string()))?;

        if page == 0 {
            return Err(AppError::ValidationError("page 는 1 이상이어야 합니다".to_string()));
        }
        if size == 0 {
            return Err(AppError::ValidationError("size 는 1 이상이어야 합니다".to_string()));
        }

        let skip = (page - 1)
            .checked_mul(size)
            .ok_or_else(|| AppError::ValidationError("page 값이 너무 큽니다".to_string()))?;

        Ok(PageWindow { skip, limit: size })
    }
}
