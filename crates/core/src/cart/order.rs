//! Checkout payload lines derived from the cart.

use serde::{Deserialize, Serialize};

use super::CartItem;
use crate::types::ProductId;

/// One `items[]` entry of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            quantity: item.quantity,
            size: item.size.clone(),
            color: item.color.clone(),
        }
    }
}
