//! Startup seeding of the service catalog.
//!
//! Runs once per process lifetime, before the HTTP listener accepts
//! traffic. A missing or malformed seed file leaves the catalog empty
//! and is logged rather than treated as fatal; database errors still
//! propagate.

use std::path::Path;

use crate::domain::NewService;
use crate::errors::AppResult;
use crate::infra::ServiceRepository;

/// Load the predefined service catalog into an empty store.
///
/// No-op when the catalog already contains services.
pub async fn seed_services(repo: &dyn ServiceRepository, path: &Path) -> AppResult<()> {
    if repo.any_exist().await? {
        tracing::debug!("Service catalog already populated, skipping seed");
        return Ok(());
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Seed file could not be read; catalog stays empty"
            );
            return Ok(());
        }
    };

    let services: Vec<NewService> = match serde_json::from_str(&raw) {
        Ok(services) => services,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Seed file could not be parsed; catalog stays empty"
            );
            return Ok(());
        }
    };

    let count = services.len();
    repo.insert_many(services).await?;
    tracing::info!(count, "Service catalog seeded");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockServiceRepository;

    struct SeedFile(std::path::PathBuf);

    impl SeedFile {
        fn with_content(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir().join(format!("seed_test_{}_{}", std::process::id(), name));
            std::fs::write(&path, content).unwrap();
            Self(path)
        }
    }

    impl Drop for SeedFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[tokio::test]
    async fn populated_catalog_skips_seeding() {
        let mut repo = MockServiceRepository::new();
        repo.expect_any_exist().returning(|| Ok(true));
        // No insert_many expectation: calling it would panic the mock

        let file = SeedFile::with_content("populated", r#"[{"name":"a","description":"b"}]"#);
        seed_services(&repo, &file.0).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_not_fatal() {
        let mut repo = MockServiceRepository::new();
        repo.expect_any_exist().returning(|| Ok(false));

        let path = std::env::temp_dir().join("seed_test_definitely_missing.json");
        seed_services(&repo, &path).await.unwrap();
    }

    #[tokio::test]
    async fn malformed_file_is_not_fatal() {
        let mut repo = MockServiceRepository::new();
        repo.expect_any_exist().returning(|| Ok(false));

        let file = SeedFile::with_content("malformed", "{ not json ]");
        seed_services(&repo, &file.0).await.unwrap();
    }

    #[tokio::test]
    async fn valid_file_is_bulk_inserted() {
        let mut repo = MockServiceRepository::new();
        repo.expect_any_exist().returning(|| Ok(false));
        repo.expect_insert_many()
            .withf(|services| {
                services.len() == 2
                    && services[0].name == "Internet"
                    && services[1].description == "Cable television"
            })
            .times(1)
            .returning(|_| Ok(()));

        let file = SeedFile::with_content(
            "valid",
            r#"[
                {"name": "Internet", "description": "Broadband internet access"},
                {"name": "Television", "description": "Cable television"}
            ]"#,
        );
        seed_services(&repo, &file.0).await.unwrap();
    }
}
