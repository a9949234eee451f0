//! Buying from the catalog.

use api::{purchase::PurchaseError, User};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use store::{format_credits, ProductId};

use crate::extract::CurrentUser;
use crate::views::{essentials_page, Notice};
use crate::{AppError, AppState};

/// `/buy/{product_id}`. An id that does not parse names no product.
pub async fn buy(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(product_id): Path<String>,
) -> Result<Response, AppError> {
    let product_id: ProductId = product_id.parse().map_err(|_| AppError::NotFound)?;
    buy_product(state, user, product_id).await
}

/// Purchase one unit and answer with the catalog page showing the outcome.
pub async fn buy_product(
    state: AppState,
    user: User,
    product_id: ProductId,
) -> Result<Response, AppError> {
    let products = state.catalog.products().to_vec();
    let mut info = user.to_info();

    match api::purchase::purchase(&state.pool, &state.catalog, user.id, product_id).await {
        Ok(receipt) => {
            info.balance = receipt.balance;
            let notice = Notice::success(format!(
                "Bought {} for {}. Remaining balance: {}",
                receipt.product.name,
                format_credits(receipt.product.price),
                format_credits(receipt.balance),
            ));
            Ok(essentials_page(Some(info), products, Some(notice)).into_response())
        }
        Err(PurchaseError::InsufficientFunds { balance, price }) => {
            info.balance = balance;
            let notice = Notice::error(format!(
                "Insufficient balance: this costs {} but you have {}",
                format_credits(price),
                format_credits(balance),
            ));
            Ok((
                StatusCode::PAYMENT_REQUIRED,
                essentials_page(Some(info), products, Some(notice)),
            )
                .into_response())
        }
        Err(PurchaseError::UnknownProduct(_)) => Err(AppError::NotFound),
        Err(PurchaseError::UnknownUser(_)) => Err(AppError::Unauthenticated),
        Err(PurchaseError::Database(e)) => Err(AppError::Database(e)),
    }
}

/// Buy routes only take form posts; a plain visit lands on the catalog.
pub async fn to_essentials() -> Redirect {
    Redirect::to("/essentials")
}
