//! Startup provisioning of accounts and sample catalog data.
//!
//! Everything goes through the domain ports, so passwords are always hashed
//! and both storage backends are seeded the same way.

use crate::catalog::errors::CatalogError;
use crate::catalog::models::DurationDays;
use crate::catalog::models::NewHomeService;
use crate::catalog::models::Price;
use crate::catalog::models::ServiceCategory;
use crate::catalog::models::ServiceName;
use crate::catalog::ports::CatalogServicePort;
use crate::config::SeedConfig;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::FullName;
use crate::user::models::ProvisionUserCommand;
use crate::user::models::Role;
use crate::user::models::User;
use crate::user::models::Username;
use crate::user::ports::AuthServicePort;

pub const DEMO_USERNAME: &str = "user";

/// Create the administrator, and the demo account when configured.
/// Existing usernames are left untouched.
pub async fn seed_accounts(
    auth_service: &dyn AuthServicePort,
    config: &SeedConfig,
) -> Result<(), UserError> {
    let admin = ProvisionUserCommand {
        username: Username::new(config.admin_username.clone())?,
        full_name: FullName::new(config.admin_full_name.clone())?,
        email: EmailAddress::new(config.admin_email.clone())?,
        password: config.admin_password.clone(),
        role: Role::Admin,
    };
    report(auth_service.provision(admin).await?, &config.admin_username);

    if let (true, Some(password)) = (config.demo_data, &config.demo_user_password) {
        let demo = ProvisionUserCommand {
            username: Username::new(DEMO_USERNAME.to_string())?,
            full_name: FullName::new("User Biasa".to_string())?,
            email: EmailAddress::new("user@email.com".to_string())?,
            password: password.clone(),
            role: Role::User,
        };
        report(auth_service.provision(demo).await?, DEMO_USERNAME);
    }

    Ok(())
}

fn report(created: Option<User>, username: &str) {
    match created {
        Some(user) => tracing::info!(
            user_id = %user.id,
            username = %username,
            role = %user.role,
            "Seeded account"
        ),
        None => tracing::debug!(username = %username, "Account already present"),
    }
}

/// Insert the sample entries when the catalog is empty.
///
/// # Returns
/// Number of entries inserted
pub async fn seed_catalog(
    catalog_service: &dyn CatalogServicePort,
) -> Result<usize, CatalogError> {
    if !catalog_service.list_services().await?.is_empty() {
        return Ok(0);
    }

    let services = demo_services()?;
    let count = services.len();
    for service in services {
        catalog_service.create_service(service).await?;
    }

    tracing::info!(count, "Seeded catalog");
    Ok(count)
}

pub fn demo_services() -> Result<Vec<NewHomeService>, CatalogError> {
    let entries = [
        (
            "Servis Motor Rutin",
            ServiceCategory::Motor,
            "Servis lengkap motor termasuk ganti oli, filter, tune up",
            150_000.0,
            1,
        ),
        (
            "Bor Sumur Dalam 50m",
            ServiceCategory::Bor,
            "Pengeboran sumur dalam hingga 50 meter dengan garansi",
            7_500_000.0,
            3,
        ),
        (
            "Pembuatan IMB Rumah",
            ServiceCategory::Izin,
            "Pengurusan IMB untuk rumah tinggal 2 lantai",
            2_500_000.0,
            7,
        ),
        (
            "Renovasi Rumah",
            ServiceCategory::Sipil,
            "Renovasi rumah lengkap dengan desain modern",
            50_000_000.0,
            30,
        ),
    ];

    entries
        .into_iter()
        .map(|(name, category, description, price, days)| {
            Ok(NewHomeService {
                name: ServiceName::new(name.to_string())?,
                category,
                description: description.to_string(),
                price: Price::new(price)?,
                duration_days: DurationDays::new(days)?,
                is_available: true,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auth::Authenticator;
    use chrono::Duration;

    use super::*;
    use crate::catalog::service::CatalogService;
    use crate::outbound::repositories::InMemoryHomeServiceRepository;
    use crate::outbound::repositories::InMemoryUserRepository;
    use crate::user::models::LoginCommand;
    use crate::user::service::AuthService;

    fn seed_config(demo_data: bool) -> SeedConfig {
        SeedConfig {
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            admin_full_name: "Arya Fauzan Permana Putra".to_string(),
            admin_email: "aryapermana@gmail.com".to_string(),
            demo_data,
            demo_user_password: Some("user123".to_string()),
        }
    }

    fn login(username: &str, password: &str) -> LoginCommand {
        LoginCommand::new(Some(username.to_string()), Some(password.to_string())).unwrap()
    }

    fn auth_service() -> AuthService<InMemoryUserRepository> {
        AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Authenticator::new(
                b"test_secret_key_at_least_32_bytes!",
                Duration::hours(24),
            )),
        )
    }

    #[tokio::test]
    async fn test_seeded_admin_can_log_in() {
        let service = auth_service();
        seed_accounts(&service, &seed_config(false)).await.unwrap();

        let outcome = service
            .login(login("admin", "admin123"))
            .await
            .unwrap();
        assert_eq!(outcome.identity.role, Role::Admin);

        let demo = service.login(login("user", "user123")).await;
        assert!(matches!(demo, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_seeding_twice_is_harmless() {
        let service = auth_service();
        seed_accounts(&service, &seed_config(true)).await.unwrap();
        seed_accounts(&service, &seed_config(true)).await.unwrap();

        let outcome = service
            .login(login("user", "user123"))
            .await
            .unwrap();
        assert_eq!(outcome.identity.role, Role::User);
    }

    #[tokio::test]
    async fn test_catalog_seeded_only_when_empty() {
        let service = CatalogService::new(Arc::new(InMemoryHomeServiceRepository::new()));

        assert_eq!(seed_catalog(&service).await.unwrap(), 4);
        assert_eq!(seed_catalog(&service).await.unwrap(), 0);
        assert_eq!(service.dashboard_stats().await.unwrap().total_services, 4);
    }
}
