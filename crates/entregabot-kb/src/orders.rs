//! Mock order book.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use entregabot_core::error::{EntregaError, Result};

/// One delivery order. IDs follow the `PED-<digits>` convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub status: String,
    pub eta_minutos: u32,
    pub itens: Vec<String>,
    pub total: f64,
}

/// Order lookup table keyed by order id.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: HashMap<String, Order>,
}

impl OrderBook {
    /// Load orders from `orders.json` (a JSON array).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EntregaError::Data(format!("Failed to read {}: {e}", path.display())))?;
        let list: Vec<Order> = serde_json::from_str(&content)
            .map_err(|e| EntregaError::Data(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(Self::from_orders(list))
    }

    /// Build a book from an in-memory list.
    pub fn from_orders(list: Vec<Order>) -> Self {
        let orders = list.into_iter().map(|o| (o.order_id.clone(), o)).collect();
        Self { orders }
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
