//! End-to-end tests for the database adapter
//!
//! These tests spin up a real MySQL server using testcontainers and need a
//! running Docker daemon: `cargo test -- --ignored`.

use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mysql::Mysql;

use portfolio_api::domain::gateways::DatabaseHealth;
use portfolio_api::infrastructure::driven_adapters::config::DatabaseConfig;
use portfolio_api::infrastructure::driven_adapters::Database;

async fn start_mysql() -> (ContainerAsync<Mysql>, DatabaseConfig) {
    let container = Mysql::default()
        .start()
        .await
        .expect("Failed to start MySQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(3306)
        .await
        .expect("Failed to get port");

    let config = DatabaseConfig {
        url: format!("mysql://root@{host}:{port}/test"),
        max_connections: 2,
        min_connections: 0,
        acquire_timeout_secs: 30,
    };

    (container, config)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_init_db_is_idempotent() {
    let (_container, config) = start_mysql().await;
    let database = Database::connect(&config, true).expect("Failed to create pool");

    database.init_db().await.expect("First init failed");
    database.init_db().await.expect("Second init failed");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_session_is_returned_to_pool() {
    let (_container, config) = start_mysql().await;
    let database = Database::connect(&config, false).expect("Failed to create pool");

    for _ in 0..5 {
        let session = database.session().await.expect("Failed to acquire session");
        drop(session);
    }

    database.ping().await.expect("Ping failed");
    assert!(database.pool().size() <= 2);
}

#[tokio::test]
async fn test_ping_fails_when_database_is_unreachable() {
    let config = DatabaseConfig {
        url: "mysql://root@127.0.0.1:1/test".to_string(),
        max_connections: 1,
        min_connections: 0,
        acquire_timeout_secs: 1,
    };
    let database = Database::connect(&config, false).expect("Failed to create pool");

    assert!(database.ping().await.is_err());
}
