use crate::utils::{error::Error, id::IdGenerator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tokio::sync::RwLock;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid OrderStatus", s))
    }
}

/// A dish line inside an order, copied from the menu at ordering time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OrderDish {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub price: u64,
    pub quantity: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_many(&self) -> Vec<Order>;

    async fn find_by_id(&self, id: &str) -> Option<Order>;

    async fn create(&self, payload: OrderPayload) -> Order;

    /// Replaces the mutable fields of the order once `guard` accepts the stored record.
    /// `Ok(None)` when no order has `id`.
    async fn update_by_id(
        &self,
        id: &str,
        payload: OrderPayload,
        guard: &(dyn for<'o> Fn(&'o Order) -> Result<(), Error> + Sync),
    ) -> Result<Option<Order>, Error>;

    /// Removes the order once `guard` accepts the stored record.
    async fn delete_by_id(
        &self,
        id: &str,
        guard: &(dyn for<'o> Fn(&'o Order) -> Result<(), Error> + Sync),
    ) -> Result<Option<Order>, Error>;
}

struct Store {
    orders: Vec<Order>,
    ids: IdGenerator,
}

pub struct InMemoryOrderRepository {
    store: RwLock<Store>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::with_orders(vec![])
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let ids = IdGenerator::from_existing(orders.iter().map(|order| order.id.as_str()));

        Self {
            store: RwLock::new(Store { orders, ids }),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_many(&self) -> Vec<Order> {
        self.store.read().await.orders.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Order> {
        self.store
            .read()
            .await
            .orders
            .iter()
            .find(|order| order.id == id)
            .cloned()
    }

    async fn create(&self, payload: OrderPayload) -> Order {
        let mut store = self.store.write().await;

        let order = Order {
            id: store.ids.next_id(),
            deliver_to: payload.deliver_to,
            mobile_number: payload.mobile_number,
            status: payload.status,
            dishes: payload.dishes,
        };
        store.orders.push(order.clone());

        tracing::debug!("Order created: {}", order.id);
        order
    }

    async fn update_by_id(
        &self,
        id: &str,
        payload: OrderPayload,
        guard: &(dyn for<'o> Fn(&'o Order) -> Result<(), Error> + Sync),
    ) -> Result<Option<Order>, Error> {
        let mut store = self.store.write().await;
        let Some(order) = store.orders.iter_mut().find(|order| order.id == id) else {
            return Ok(None);
        };

        guard(&*order)?;

        order.deliver_to = payload.deliver_to;
        order.mobile_number = payload.mobile_number;
        order.status = payload.status;
        order.dishes = payload.dishes;

        Ok(Some(order.clone()))
    }

    async fn delete_by_id(
        &self,
        id: &str,
        guard: &(dyn for<'o> Fn(&'o Order) -> Result<(), Error> + Sync),
    ) -> Result<Option<Order>, Error> {
        let mut store = self.store.write().await;
        let Some(index) = store.orders.iter().position(|order| order.id == id) else {
            return Ok(None);
        };

        guard(&store.orders[index])?;

        tracing::debug!("Order deleted: {}", id);
        Ok(Some(store.orders.remove(index)))
    }
}
