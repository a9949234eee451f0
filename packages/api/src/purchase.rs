//! # Purchases
//!
//! [`purchase`] is the single operation behind every "buy" button. Inside one
//! transaction it deducts the price with a conditional update
//! (`balance >= price`), so the balance can never go negative and two
//! concurrent purchases cannot both spend the same credits, then appends a
//! row to the `purchases` ledger. Products are unlimited; there is no stock.

use sqlx::SqlitePool;
use store::{Catalog, Credits, ProductId, Receipt};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::Purchase;

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    #[error("unknown user {0}")]
    UnknownUser(i64),

    #[error("insufficient funds: balance {balance}, price {price}")]
    InsufficientFunds { balance: Credits, price: Credits },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Buy one unit of `product_id` for `user_id`.
pub async fn purchase(
    pool: &SqlitePool,
    catalog: &Catalog,
    user_id: i64,
    product_id: ProductId,
) -> Result<Receipt, PurchaseError> {
    let product = catalog
        .get(product_id)
        .ok_or(PurchaseError::UnknownProduct(product_id))?;

    let mut tx = pool.begin().await?;

    let updated: Option<(Credits,)> = sqlx::query_as(
        "UPDATE users SET balance = balance - ? WHERE id = ? AND balance >= ? RETURNING balance",
    )
    .bind(product.price)
    .bind(user_id)
    .bind(product.price)
    .fetch_optional(&mut *tx)
    .await?;

    let Some((balance,)) = updated else {
        let current: Option<(Credits,)> = sqlx::query_as("SELECT balance FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.rollback().await?;

        return Err(match current {
            Some((balance,)) => {
                warn!(user_id, product_id, balance, price = product.price, "insufficient funds");
                PurchaseError::InsufficientFunds {
                    balance,
                    price: product.price,
                }
            }
            None => PurchaseError::UnknownUser(user_id),
        });
    };

    sqlx::query(
        "INSERT INTO purchases (user_id, product_id, product_name, price, balance_after) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(i64::from(product.id))
    .bind(&product.name)
    .bind(product.price)
    .bind(balance)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(user_id, product = %product.name, price = product.price, balance, "purchase completed");
    Ok(Receipt {
        product: product.clone(),
        balance,
    })
}

/// Current stored balance, `None` for an unknown user.
pub async fn balance(pool: &SqlitePool, user_id: i64) -> Result<Option<Credits>, sqlx::Error> {
    let row: Option<(Credits,)> = sqlx::query_as("SELECT balance FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(balance,)| balance))
}

/// Purchase ledger of one user, newest first.
pub async fn history(pool: &SqlitePool, user_id: i64) -> Result<Vec<Purchase>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM purchases WHERE user_id = ? ORDER BY id DESC")
        .bind(user_id)
        .fetch_all(pool)
        .await
}
