//! 테스트용 메모리 리포지토리
//!
//! MongoDB 구현과 같은 계약(첫 쓰기 우선, 조건부 상태 전이, `_id` 순서)을
//! `Mutex<Vec<_>>` 위에서 흉내냅니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::{
    domain::{
        dto::UpdateResponse,
        entities::{
            agreements::{Agreement, AgreementStatus, DUPLICATE_AGREEMENT_MESSAGE},
            payments::Payment,
            users::{User, UserRole},
        },
    },
    errors::AppError,
    repositories::{
        AgreementRepository, AnnouncementRepository, ApartmentRepository, CouponRepository,
        PaymentRepository, UserRepository,
    },
};

fn with_id(mut doc: Document) -> (ObjectId, Document) {
    let id = doc.get_object_id("_id").unwrap_or_else(|_| ObjectId::new());
    doc.insert("_id", id);
    (id, doc)
}

#[derive(Default)]
pub struct MemoryApartmentRepository {
    apartments: Mutex<Vec<Document>>,
}

impl MemoryApartmentRepository {
    pub fn with_apartments(apartments: Vec<Document>) -> Self {
        let mut apartments: Vec<Document> = apartments.into_iter().map(|d| with_id(d).1).collect();
        apartments.sort_by_key(|d| d.get_object_id("_id").ok());
        Self { apartments: Mutex::new(apartments) }
    }
}

#[async_trait]
impl ApartmentRepository for MemoryApartmentRepository {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.apartments.lock().unwrap().clone())
    }

    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Document>, AppError> {
        Ok(self.apartments.lock().unwrap()
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.apartments.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    fail_role_writes: AtomicBool,
}

impl MemoryUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        let users = users.into_iter()
            .map(|mut u| {
                u.id.get_or_insert_with(ObjectId::new);
                u
            })
            .collect();
        Self { users: Mutex::new(users), ..Default::default() }
    }

    /// 이후 역할 변경이 데이터베이스 오류로 실패하게 합니다.
    pub fn fail_role_writes(&self, fail: bool) {
        self.fail_role_writes.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn set_role_where(&self, role: UserRole, pred: impl Fn(&User) -> bool) -> Result<UpdateResponse, AppError> {
        if self.fail_role_writes.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("role write failed".to_string()));
        }

        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| pred(u)) {
            Some(user) => {
                let modified = user.role != role;
                user.role = role;
                Ok(UpdateResponse { matched_count: 1, modified_count: modified as u64 })
            }
            None => Ok(UpdateResponse { matched_count: 0, modified_count: 0 }),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn insert_if_absent(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter().find(|u| u.email == user.email) {
            return Ok(existing.clone());
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.snapshot())
    }

    async fn find_by_filter(&self, filter: Document) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter()
            .filter(|user| {
                let stored = mongodb::bson::to_document(user).unwrap_or_default();
                filter.iter().all(|(key, value)| stored.get(key) == Some(value))
            })
            .cloned()
            .collect())
    }

    async fn set_role_by_id(&self, id: &ObjectId, role: UserRole) -> Result<UpdateResponse, AppError> {
        self.set_role_where(role, |u| u.id.as_ref() == Some(id))
    }

    async fn set_role_by_email(&self, email: &str, role: UserRole) -> Result<UpdateResponse, AppError> {
        self.set_role_where(role, |u| u.email == email)
    }
}

#[derive(Default)]
pub struct MemoryAgreementRepository {
    agreements: Mutex<Vec<Agreement>>,
    fail_rent_reset: AtomicBool,
}

impl MemoryAgreementRepository {
    pub fn with_agreements(agreements: Vec<Agreement>) -> Self {
        let agreements = agreements.into_iter()
            .map(|mut a| {
                a.id.get_or_insert_with(ObjectId::new);
                a
            })
            .collect();
        Self { agreements: Mutex::new(agreements), ..Default::default() }
    }

    /// 이후 `reset_rent` 가 데이터베이스 오류로 실패하게 합니다.
    pub fn fail_rent_reset(&self, fail: bool) {
        self.fail_rent_reset.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Agreement> {
        self.agreements.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgreementRepository for MemoryAgreementRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Agreement>, AppError> {
        Ok(self.agreements.lock().unwrap().iter().find(|a| a.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, user_email: &str) -> Result<Option<Agreement>, AppError> {
        Ok(self.agreements.lock().unwrap().iter().find(|a| a.user_email == user_email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Agreement>, AppError> {
        Ok(self.snapshot())
    }

    async fn insert(&self, mut agreement: Agreement) -> Result<ObjectId, AppError> {
        let mut agreements = self.agreements.lock().unwrap();
        if agreements.iter().any(|a| a.user_email == agreement.user_email) {
            return Err(AppError::ConflictError(DUPLICATE_AGREEMENT_MESSAGE.to_string()));
        }
        let id = ObjectId::new();
        agreement.id = Some(id);
        agreements.push(agreement);
        Ok(id)
    }

    async fn transition(
        &self,
        id: &ObjectId,
        next: AgreementStatus,
        at_millis: i64,
    ) -> Result<Option<Agreement>, AppError> {
        let mut agreements = self.agreements.lock().unwrap();
        let Some(agreement) = agreements.iter_mut().find(|a| a.id.as_ref() == Some(id)) else {
            return Ok(None);
        };
        if !agreement.status.can_transition_to(next) {
            return Ok(None);
        }

        agreement.status = next;
        match next {
            AgreementStatus::Approved => agreement.checked_time = Some(at_millis),
            AgreementStatus::Rejected => agreement.rejected_time = Some(at_millis),
            AgreementStatus::Pending => {}
        }
        Ok(Some(agreement.clone()))
    }

    async fn reset_rent(&self, user_email: &str) -> Result<Option<Agreement>, AppError> {
        if self.fail_rent_reset.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("rent reset failed".to_string()));
        }

        let mut agreements = self.agreements.lock().unwrap();
        Ok(agreements.iter_mut()
            .find(|a| a.user_email == user_email)
            .map(|a| {
                a.rent = Some(0.0);
                a.clone()
            }))
    }
}

#[derive(Default)]
pub struct MemoryPaymentRepository {
    payments: Mutex<Vec<Payment>>,
}

impl MemoryPaymentRepository {
    pub fn snapshot(&self) -> Vec<Payment> {
        self.payments.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentRepository for MemoryPaymentRepository {
    async fn insert(&self, mut payment: Payment) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        payment.id = Some(id);
        self.payments.lock().unwrap().push(payment);
        Ok(id)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, AppError> {
        let mut payments = self.payments.lock().unwrap();
        let before = payments.len();
        payments.retain(|p| p.id.as_ref() != Some(id));
        Ok((before - payments.len()) as u64)
    }
}

/// 쿠폰과 공지사항이 공유하는 문서 저장소
#[derive(Default)]
pub struct MemoryDocumentRepository {
    documents: Mutex<Vec<Document>>,
}

impl MemoryDocumentRepository {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Mutex::new(documents.into_iter().map(|d| with_id(d).1).collect()),
        }
    }

    fn insert_document(&self, document: Document) -> ObjectId {
        let (id, document) = with_id(document);
        self.documents.lock().unwrap().push(document);
        id
    }

    pub fn snapshot(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl CouponRepository for MemoryDocumentRepository {
    async fn insert(&self, coupon: Document) -> Result<ObjectId, AppError> {
        Ok(self.insert_document(coupon))
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.snapshot())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, AppError> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| d.get("_id") != Some(&Bson::ObjectId(*id)));
        Ok((before - documents.len()) as u64)
    }
}

#[async_trait]
impl AnnouncementRepository for MemoryDocumentRepository {
    async fn insert(&self, announcement: Document) -> Result<ObjectId, AppError> {
        Ok(self.insert_document(announcement))
    }

    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.snapshot())
    }
}
