use crate::utils::id::IdGenerator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// The mutable part of a dish. Creation and update both write every field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

#[async_trait]
pub trait DishRepository: Send + Sync {
    async fn find_many(&self) -> Vec<Dish>;

    async fn find_by_id(&self, id: &str) -> Option<Dish>;

    async fn create(&self, payload: DishPayload) -> Dish;

    async fn update_by_id(&self, id: &str, payload: DishPayload) -> Option<Dish>;
}

struct Store {
    dishes: Vec<Dish>,
    ids: IdGenerator,
}

pub struct InMemoryDishRepository {
    store: RwLock<Store>,
}

impl InMemoryDishRepository {
    pub fn new() -> Self {
        Self::with_dishes(vec![])
    }

    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        let ids = IdGenerator::from_existing(dishes.iter().map(|dish| dish.id.as_str()));

        Self {
            store: RwLock::new(Store { dishes, ids }),
        }
    }
}

impl Default for InMemoryDishRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DishRepository for InMemoryDishRepository {
    async fn find_many(&self) -> Vec<Dish> {
        self.store.read().await.dishes.clone()
    }

    async fn find_by_id(&self, id: &str) -> Option<Dish> {
        self.store
            .read()
            .await
            .dishes
            .iter()
            .find(|dish| dish.id == id)
            .cloned()
    }

    async fn create(&self, payload: DishPayload) -> Dish {
        let mut store = self.store.write().await;

        let dish = Dish {
            id: store.ids.next_id(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
        };
        store.dishes.push(dish.clone());

        tracing::debug!("Dish created: {}", dish.id);
        dish
    }

    async fn update_by_id(&self, id: &str, payload: DishPayload) -> Option<Dish> {
        let mut store = self.store.write().await;
        let dish = store.dishes.iter_mut().find(|dish| dish.id == id)?;

        dish.name = payload.name;
        dish.description = payload.description;
        dish.price = payload.price;
        dish.image_url = payload.image_url;

        Some(dish.clone())
    }
}
