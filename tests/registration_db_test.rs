//! Database-backed integration tests for the registration flows.
//!
//! These exercise the real Unit of Work against PostgreSQL. Start a
//! database, export DATABASE_URL, then run:
//!
//! ```bash
//! cargo test -- --ignored
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use sea_orm::{ConnectionTrait, Statement};

use service_registry::config::Config;
use service_registry::domain::{NewRegistration, NewService, RegistrationUpdate};
use service_registry::infra::{
    Database, Persistence, ServiceRepository, ServiceStore, UnitOfWork, UserRepository,
};
use service_registry::services::{Registrar, RegistrationService};

struct TestEnv {
    db: Database,
    uow: Arc<Persistence>,
    registrar: Registrar<Persistence>,
    tag: String,
}

/// Connect and migrate; skip the test gracefully when no database is up.
async fn setup() -> Option<TestEnv> {
    let config = Config::from_env();
    let db = match Database::connect_without_migrations(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = db.run_migrations().await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }

    let uow = Arc::new(Persistence::new(db.get_connection()));
    let registrar = Registrar::new(uow.clone());
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let tag = format!("it_{}_{}", std::process::id(), nanos);

    Some(TestEnv {
        db,
        uow,
        registrar,
        tag,
    })
}

impl TestEnv {
    /// Insert catalog entries with run-unique names and return their ids.
    async fn seed_services(&self, names: &[&str]) -> Vec<i32> {
        let store = ServiceStore::new(self.db.get_connection());
        let entries: Vec<NewService> = names
            .iter()
            .map(|n| NewService {
                name: format!("{}_{}", self.tag, n),
                description: format!("{} service", n),
            })
            .collect();
        store.insert_many(entries).await.unwrap();

        let catalog = store.list().await.unwrap();
        names
            .iter()
            .map(|n| {
                let full = format!("{}_{}", self.tag, n);
                catalog.iter().find(|s| s.name == full).unwrap().id
            })
            .collect()
    }

    async fn exec(&self, sql: &str, values: Vec<sea_orm::Value>) {
        let conn = self.db.get_connection();
        let stmt = Statement::from_sql_and_values(conn.get_database_backend(), sql, values);
        conn.execute(stmt).await.unwrap();
    }

    /// Remove everything this run created; user_services rows go away
    /// through the cascade.
    async fn cleanup(&self, user_ids: &[i32]) {
        for id in user_ids {
            self.exec("DELETE FROM users WHERE id = $1", vec![(*id).into()])
                .await;
        }
        self.exec(
            "DELETE FROM services WHERE name LIKE $1",
            vec![format!("{}%", self.tag).into()],
        )
        .await;
    }

    fn registration(&self, service_ids: Vec<i32>, info: HashMap<i32, String>) -> NewRegistration {
        NewRegistration {
            user_name: format!("{}_user", self.tag),
            email: format!("{}@example.com", self.tag),
            phone_number: "+1-202-555-0101".to_string(),
            service_ids,
            additional_info: info,
        }
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn register_drops_unknown_service_ids() {
    let Some(env) = setup().await else { return };
    let ids = env.seed_services(&["internet"]).await;
    let known = ids[0];

    let mut info = HashMap::new();
    info.insert(known, "apartment 4B".to_string());
    info.insert(999_999, "ignored".to_string());

    let user = env
        .registrar
        .register(env.registration(vec![known, 999_999], info))
        .await
        .unwrap();

    let rows = env.registrar.list_user_services(user.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].service_id, known);
    assert_eq!(rows[0].additional_info, "apartment 4B");

    env.cleanup(&[user.id]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn missing_metadata_defaults_to_empty_string() {
    let Some(env) = setup().await else { return };
    let ids = env.seed_services(&["tv"]).await;

    let user = env
        .registrar
        .register(env.registration(vec![ids[0]], HashMap::new()))
        .await
        .unwrap();

    let rows = env.registrar.list_user_services(user.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].additional_info, "");

    env.cleanup(&[user.id]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn failed_write_sequence_rolls_back_the_user_insert() {
    let Some(env) = setup().await else { return };

    let created_id = Arc::new(Mutex::new(None));
    let captured = created_id.clone();
    let user_name = format!("{}_rollback", env.tag);

    let result = env
        .uow
        .transaction(move |ctx| {
            Box::pin(async move {
                let user = ctx
                    .users()
                    .create(&user_name, "rollback@example.com", "555")
                    .await?;
                *captured.lock().unwrap() = Some(user.id);

                // Second insert violates the service FK and fails the sequence
                ctx.registrations()
                    .create(user.id, -1, String::new())
                    .await?;
                Ok(user)
            })
        })
        .await;

    assert!(result.is_err());

    let orphan_id = created_id.lock().unwrap().expect("insert ran before the failure");
    let after = env.uow.users().find_by_id(orphan_id).await.unwrap();
    assert!(after.is_none(), "rollback must remove the inserted user");

    env.cleanup(&[]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn update_with_empty_service_ids_preserves_associations() {
    let Some(env) = setup().await else { return };
    let ids = env.seed_services(&["internet", "tv"]).await;

    let user = env
        .registrar
        .register(env.registration(ids.clone(), HashMap::new()))
        .await
        .unwrap();

    env.registrar
        .update(
            user.id,
            RegistrationUpdate {
                user_name: "Renamed".to_string(),
                email: "renamed@example.com".to_string(),
                phone_number: "+1-202-555-0199".to_string(),
                service_ids: vec![],
                additional_info: HashMap::new(),
            },
        )
        .await
        .unwrap();

    let rows = env.registrar.list_user_services(user.id).await.unwrap();
    assert_eq!(rows.len(), 2, "empty id list must leave associations alone");

    let renamed = env.uow.users().find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(renamed.user_name, "Renamed");
    assert_eq!(renamed.email, "renamed@example.com");

    env.cleanup(&[user.id]).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn update_with_service_ids_replaces_associations_idempotently() {
    let Some(env) = setup().await else { return };
    let ids = env.seed_services(&["internet", "tv", "mobile"]).await;
    let (first, replacement) = (ids[0], ids[2]);

    let user = env
        .registrar
        .register(env.registration(vec![first], HashMap::new()))
        .await
        .unwrap();

    let update = RegistrationUpdate {
        user_name: user.user_name.clone(),
        email: user.email.clone(),
        phone_number: user.phone_number.clone(),
        service_ids: vec![replacement],
        additional_info: HashMap::from([(replacement, "upgraded".to_string())]),
    };

    // Applying the same replacement twice must converge on the same set
    env.registrar.update(user.id, update.clone()).await.unwrap();
    env.registrar.update(user.id, update).await.unwrap();

    let rows = env.registrar.list_user_services(user.id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].service_id, replacement);
    assert_eq!(rows[0].additional_info, "upgraded");

    env.cleanup(&[user.id]).await;
}
