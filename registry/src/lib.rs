use std::sync::Arc;

use adapter::auth::JwtAuthProvider;
use adapter::database::ConnectionPool;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::review::ReviewRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use kernel::repository::auth::AuthProvider;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::review::ReviewRepository;
use kernel::repository::room::RoomRepository;
use shared::config::AppConfig;
use shared::env::{which, Environment};

/// The dependency-injection handle handed to every handler as axum
/// state. Built once at startup; everything behind it is shared.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    auth_provider: Arc<dyn AuthProvider>,
    environment: Environment,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryImpl::new(pool.clone()));
        let auth_provider = Arc::new(JwtAuthProvider::new(&app_config.auth));
        Self {
            health_check_repository,
            room_repository,
            booking_repository,
            review_repository,
            auth_provider,
            environment: which(),
        }
    }

    /// Assembles a registry from already-built components. Router tests
    /// use this to wire the in-memory repositories.
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        room_repository: Arc<dyn RoomRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        review_repository: Arc<dyn ReviewRepository>,
        auth_provider: Arc<dyn AuthProvider>,
        environment: Environment,
    ) -> Self {
        Self {
            health_check_repository,
            room_repository,
            booking_repository,
            review_repository,
            auth_provider,
            environment,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }

    pub fn auth_provider(&self) -> Arc<dyn AuthProvider> {
        self.auth_provider.clone()
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}
