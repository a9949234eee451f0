//! # Shared value types for balances and purchases
//!
//! | Item | Represents |
//! |------|-----------|
//! | [`Credits`] | An amount of virtual currency. Balances and prices use the same unit. |
//! | [`Receipt`] | The outcome of a successful purchase: what was bought and the balance left afterwards. |
//! | [`format_credits`] | Renders an amount as `"<n> NouCredits"` for display. |

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Amount of virtual currency (NouCredits).
pub type Credits = i64;

/// Result of a completed purchase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// The product that was bought.
    pub product: Product,
    /// Balance after the price was deducted.
    pub balance: Credits,
}

/// Format an amount with the currency suffix.
pub fn format_credits(amount: Credits) -> String {
    format!("{amount} NouCredits")
}
