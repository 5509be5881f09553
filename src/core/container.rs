//! 서비스 컨테이너
//!
//! 리포지토리와 서비스를 한 번만 생성하고 `web::Data` 로 공유합니다.
//! 워커마다 `App` 이 새로 만들어지지만 `web::Data` 는 `Arc` 이므로 모든 워커가
//! 같은 서비스 인스턴스(그리고 같은 MongoDB 클라이언트)를 사용합니다.

use std::sync::Arc;
use actix_web::web;

use crate::{
    db::Database,
    repositories::{
        AgreementRepository, AnnouncementRepository, ApartmentRepository, CouponRepository,
        MongoAgreementRepository, MongoAnnouncementRepository, MongoApartmentRepository,
        MongoCouponRepository, MongoPaymentRepository, MongoUserRepository, PaymentRepository,
        UserRepository,
    },
    services::{
        AgreementService, AnnouncementService, ApartmentService, CouponService, PaymentGateway,
        PaymentService, UserService,
    },
};

/// 리포지토리 묶음
///
/// 테스트에서는 메모리 구현으로 채워 [`ServiceContainer::from_repositories`] 에 넘깁니다.
#[derive(Clone)]
pub struct Repositories {
    pub apartments: Arc<dyn ApartmentRepository>,
    pub users: Arc<dyn UserRepository>,
    pub agreements: Arc<dyn AgreementRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub coupons: Arc<dyn CouponRepository>,
    pub announcements: Arc<dyn AnnouncementRepository>,
}

impl Repositories {
    /// MongoDB 구현으로 모든 리포지토리를 생성합니다.
    pub fn mongo(db: &Arc<Database>) -> Self {
        Self {
            apartments: Arc::new(MongoApartmentRepository::new(db)),
            users: Arc::new(MongoUserRepository::new(db)),
            agreements: Arc::new(MongoAgreementRepository::new(db)),
            payments: Arc::new(MongoPaymentRepository::new(db)),
            coupons: Arc::new(MongoCouponRepository::new(db)),
            announcements: Arc::new(MongoAnnouncementRepository::new(db)),
        }
    }
}

/// `web::Data` 로 등록되는 서비스 모음
#[derive(Clone)]
pub struct ServiceContainer {
    pub apartment_service: web::Data<ApartmentService>,
    pub user_service: web::Data<UserService>,
    pub agreement_service: web::Data<AgreementService>,
    pub payment_service: web::Data<PaymentService>,
    pub coupon_service: web::Data<CouponService>,
    pub announcement_service: web::Data<AnnouncementService>,
}

impl ServiceContainer {
    pub fn from_repositories(repos: Repositories, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            apartment_service: web::Data::new(ApartmentService::new(repos.apartments)),
            user_service: web::Data::new(UserService::new(repos.users.clone())),
            agreement_service: web::Data::new(AgreementService::new(repos.agreements.clone(), repos.users)),
            payment_service: web::Data::new(PaymentService::new(gateway, repos.payments, repos.agreements)),
            coupon_service: web::Data::new(CouponService::new(repos.coupons)),
            announcement_service: web::Data::new(AnnouncementService::new(repos.announcements)),
        }
    }

    pub fn from_database(db: Arc<Database>, gateway: Arc<dyn PaymentGateway>) -> Self {
        log::debug!("서비스 컨테이너 생성: {}", db.database_name());
        Self::from_repositories(Repositories::mongo(&db), gateway)
    }

    /// 모든 서비스를 앱 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.apartment_service.clone())
            .app_data(self.user_service.clone())
            .app_data(self.agreement_service.clone())
            .app_data(self.payment_service.clone())
            .app_data(self.coupon_service.clone())
            .app_data(self.announcement_service.clone());
    }
}
