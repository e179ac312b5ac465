use crate::{
    modules::{
        dish::{
            repository::Dish,
            validation::{self as dish_validation, DishData},
        },
        order::{
            repository::Order,
            validation::{self as order_validation, OrderData},
        },
    },
    types::StartupError,
};
use serde::Deserialize;
use std::{collections::HashSet, path::Path};

/// Records used to prefill the stores at startup.
#[derive(Deserialize, Default, Debug)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

fn ensure_unique_ids<'a>(
    resource: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), StartupError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StartupError::DuplicateSeedId {
                resource,
                id: id.to_string(),
            });
        }
    }

    Ok(())
}

/// Seeded records have to pass the same body rules as records created over HTTP.
fn ensure_valid(seed: &Seed) -> Result<(), StartupError> {
    for dish in &seed.dishes {
        dish_validation::validate(&DishData::from(dish)).map_err(|err| {
            StartupError::InvalidSeedRecord {
                resource: "dish",
                id: dish.id.clone(),
                reason: err.to_string(),
            }
        })?;
    }

    for order in &seed.orders {
        order_validation::validate(&OrderData::from(order)).map_err(|err| {
            StartupError::InvalidSeedRecord {
                resource: "order",
                id: order.id.clone(),
                reason: err.to_string(),
            }
        })?;
    }

    Ok(())
}

pub fn parse(path: &Path, raw: &str) -> Result<Seed, StartupError> {
    let seed: Seed = serde_json::from_str(raw).map_err(|source| StartupError::ParseSeed {
        path: path.display().to_string(),
        source,
    })?;

    ensure_unique_ids("dish", seed.dishes.iter().map(|dish| dish.id.as_str()))?;
    ensure_unique_ids("order", seed.orders.iter().map(|order| order.id.as_str()))?;
    ensure_valid(&seed)?;

    Ok(seed)
}

pub async fn load(path: &Path) -> Result<Seed, StartupError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StartupError::ReadSeed {
            path: path.display().to_string(),
            source,
        })?;

    let seed = parse(path, &raw)?;
    tracing::debug!(
        "Loaded {} dishes and {} orders from {}",
        seed.dishes.len(),
        seed.orders.len(),
        path.display()
    );

    Ok(seed)
}
