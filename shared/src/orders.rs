//! Order input schema
//!
//! Validation-only: there is no execution engine behind these types.
//! Market orders carry no price; limit orders must name one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Side of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Execution style of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
}

/// Order creation input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateInput {
    pub instrument_id: Uuid,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

/// Reasons an order input is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("quantity must be positive")]
    NonPositiveQuantity,
    #[error("limit price must be positive")]
    NonPositiveLimitPrice,
    #[error("limit price is required for limit orders")]
    MissingLimitPrice,
}

impl OrderCreateInput {
    /// Check field and cross-field constraints
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.quantity <= Decimal::ZERO {
            return Err(OrderValidationError::NonPositiveQuantity);
        }
        if let Some(limit_price) = self.limit_price {
            if limit_price <= Decimal::ZERO {
                return Err(OrderValidationError::NonPositiveLimitPrice);
            }
        }
        if self.order_type == OrderType::Limit && self.limit_price.is_none() {
            return Err(OrderValidationError::MissingLimitPrice);
        }
        Ok(())
    }
}
