//! Common test utilities

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

/// Connect to the test database and make sure the schema is in place.
pub async fn setup_test_db() -> PgPool {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    // The migration is idempotent, so applying it here lets the tests run
    // against a fresh database
    sqlx::query(include_str!("../../migrations/001_create_wallets.sql"))
        .execute(&pool)
        .await
        .expect("Failed to apply schema");

    pool
}

/// Provision a wallet with the given starting balance.
///
/// Each test provisions its own wallets under fresh ids, so tests stay
/// isolated from each other when run in parallel against a shared database.
pub async fn create_wallet(pool: &PgPool, balance: i64) -> Uuid {
    let wallet_id = Uuid::new_v4();

    sqlx::query("INSERT INTO wallets (id, balance) VALUES ($1, $2)")
        .bind(wallet_id)
        .bind(balance)
        .execute(pool)
        .await
        .expect("Failed to seed wallet");

    wallet_id
}

/// Read a wallet balance directly from the table, bypassing the service.
pub async fn raw_balance(pool: &PgPool, wallet_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT balance FROM wallets WHERE id = $1")
        .bind(wallet_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read wallet balance")
}
