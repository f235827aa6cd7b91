//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::{OperationType, UpdateBalanceCommand, WalletHandler};

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalletRequest {
    /// Textual UUID; parsed and validated here, before it reaches the core
    pub wallet_id: String,
    pub operation_type: OperationType,
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalletResponse {
    pub wallet_id: Uuid,
    pub new_balance: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWalletResponse {
    pub wallet_id: Uuid,
    pub balance: i64,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<PgPool> {
    Router::new()
        .route("/wallet", post(update_wallet))
        .route("/wallets/:wallet_id", get(get_wallet))
}

// =========================================================================
// POST /wallet
// =========================================================================

/// Apply a deposit or withdrawal to a wallet
async fn update_wallet(
    State(pool): State<PgPool>,
    Json(request): Json<UpdateWalletRequest>,
) -> AppResult<Json<UpdateWalletResponse>> {
    let wallet_id = parse_wallet_id(&request.wallet_id)?;

    let handler = WalletHandler::new(pool);

    let command = UpdateBalanceCommand::new(wallet_id, request.operation_type, request.amount);
    let wallet = handler.execute(command).await?;

    Ok(Json(UpdateWalletResponse {
        wallet_id: wallet.id(),
        new_balance: wallet.balance(),
    }))
}

// =========================================================================
// GET /wallets/:wallet_id
// =========================================================================

/// Get a wallet's current balance
async fn get_wallet(
    State(pool): State<PgPool>,
    Path(wallet_id): Path<String>,
) -> AppResult<Json<GetWalletResponse>> {
    let wallet_id = parse_wallet_id(&wallet_id)?;

    let handler = WalletHandler::new(pool);
    let wallet = handler.get_balance(wallet_id).await?;

    Ok(Json(GetWalletResponse {
        wallet_id: wallet.id(),
        balance: wallet.balance(),
    }))
}

fn parse_wallet_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::InvalidRequest("invalid wallet id format: not a uuid".to_string()))
}
