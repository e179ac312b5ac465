use super::repository::{Dish, DishPayload, DishRepository};
use crate::utils::{
    error::Error,
    validation::{self, is_truthy, not_blank, positive_integer, Chain},
};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::{Validate, ValidationError, ValidationErrors};

const RESOURCE: &str = "Dish";

const INVALID_PRICE: &str = "Dish must have a price that is an integer greater than 0";

const CHAIN: &Chain = &[
    ("name_missing", "Dish must include a name"),
    ("description_missing", "Dish must include a description"),
    ("price_missing", "Dish must include a price"),
    ("image_url_missing", "Dish must include a image_url"),
    ("name_blank", "Dish must include a name"),
    ("description_blank", "Dish must include a description"),
    ("image_url_blank", "Dish must include a image_url"),
    ("price_invalid", INVALID_PRICE),
];

fn valid_price(value: &Value) -> Result<(), ValidationError> {
    if !is_truthy(value) {
        return Err(ValidationError::new("price_missing"));
    }

    match positive_integer(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("price_invalid")),
    }
}

/// The `data` object accepted by dish create and update requests.
#[derive(Deserialize, Validate, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct DishData {
    pub id: Option<String>,
    #[validate(
        required(code = "name_missing"),
        length(min = 1, code = "name_missing"),
        custom(function = "not_blank", code = "name_blank")
    )]
    pub name: Option<String>,
    #[validate(
        required(code = "description_missing"),
        length(min = 1, code = "description_missing"),
        custom(function = "not_blank", code = "description_blank")
    )]
    pub description: Option<String>,
    #[validate(required(code = "price_missing"), custom(function = "valid_price"))]
    pub price: Option<Value>,
    #[validate(
        required(code = "image_url_missing"),
        length(min = 1, code = "image_url_missing"),
        custom(function = "not_blank", code = "image_url_blank")
    )]
    pub image_url: Option<String>,
}

impl From<&Dish> for DishData {
    fn from(dish: &Dish) -> Self {
        Self {
            id: Some(dish.id.clone()),
            name: Some(dish.name.clone()),
            description: Some(dish.description.clone()),
            price: Some(json!(dish.price)),
            image_url: Some(dish.image_url.clone()),
        }
    }
}

/// Runs the body rules in route order and yields the checked payload.
pub fn validate(data: &DishData) -> Result<DishPayload, Error> {
    let errors = data.validate().err().unwrap_or_else(ValidationErrors::new);
    validation::ensure(&errors, CHAIN)?;

    let price = data
        .price
        .as_ref()
        .and_then(positive_integer)
        .ok_or_else(|| Error::Validation(String::from(INVALID_PRICE)))?;

    Ok(DishPayload {
        name: data.name.clone().unwrap_or_default(),
        description: data.description.clone().unwrap_or_default(),
        price,
        image_url: data.image_url.clone().unwrap_or_default(),
    })
}

pub fn not_found(id: &str) -> Error {
    Error::NotFound(format!("{} does not exist: {}.", RESOURCE, id))
}

/// Existence guard: the routed dish, or a 404 naming the id.
pub async fn exists(repository: &dyn DishRepository, id: &str) -> Result<Dish, Error> {
    repository.find_by_id(id).await.ok_or_else(|| not_found(id))
}

/// A body id is optional on update, but when present it has to name the routed dish.
pub fn id_matches(body_id: Option<&str>, dish: &Dish) -> Result<(), Error> {
    match body_id {
        Some(id) if !id.is_empty() && id != dish.id => Err(Error::IdMismatch {
            status: StatusCode::NOT_FOUND,
            message: format!(
                "Dish id does not match route id. Dish: {}, Route: {}",
                id, dish.id
            ),
        }),
        _ => Ok(()),
    }
}
