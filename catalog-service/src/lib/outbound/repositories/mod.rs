pub mod home_service;
pub mod user;

pub use home_service::InMemoryHomeServiceRepository;
pub use home_service::PostgresHomeServiceRepository;
pub use user::InMemoryUserRepository;
pub use user::PostgresUserRepository;
