use super::repository::{Order, OrderDish, OrderRepository, OrderStatus};
use crate::utils::{
    error::Error,
    validation::{self, is_truthy, not_blank, positive_integer, whole_positive, Chain},
};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::{Validate, ValidationError, ValidationErrors};

const RESOURCE: &str = "Order";

const PRESENCE: &Chain = &[
    ("deliverTo_missing", "Order must include a deliverTo"),
    ("mobileNumber_missing", "Order must include a mobileNumber"),
    ("dish_missing", "Order must include a dish"),
    ("deliverTo_blank", "Order must include a deliverTo"),
    ("mobileNumber_blank", "Order must include a mobileNumber"),
    ("dishes_empty", "Order must include at least one dish"),
];

fn valid_dishes(value: &Value) -> Result<(), ValidationError> {
    if !is_truthy(value) {
        return Err(ValidationError::new("dish_missing"));
    }

    match value {
        Value::Array(dishes) if !dishes.is_empty() => Ok(()),
        _ => Err(ValidationError::new("dishes_empty")),
    }
}

/// The `data` object accepted by order create and update requests.
#[derive(Deserialize, Validate, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct OrderData {
    pub id: Option<String>,
    #[serde(rename = "deliverTo")]
    #[validate(
        required(code = "deliverTo_missing"),
        length(min = 1, code = "deliverTo_missing"),
        custom(function = "not_blank", code = "deliverTo_blank")
    )]
    pub deliver_to: Option<String>,
    #[serde(rename = "mobileNumber")]
    #[validate(
        required(code = "mobileNumber_missing"),
        length(min = 1, code = "mobileNumber_missing"),
        custom(function = "not_blank", code = "mobileNumber_blank")
    )]
    pub mobile_number: Option<String>,
    pub status: Option<Value>,
    #[validate(required(code = "dish_missing"), custom(function = "valid_dishes"))]
    pub dishes: Option<Value>,
}

impl From<&Order> for OrderData {
    fn from(order: &Order) -> Self {
        let dishes = order
            .dishes
            .iter()
            .map(|dish| {
                json!({
                    "id": dish.id,
                    "name": dish.name,
                    "description": dish.description,
                    "image_url": dish.image_url,
                    "price": (dish.price > 0).then_some(dish.price),
                    "quantity": dish.quantity,
                })
            })
            .collect();

        Self {
            id: Some(order.id.clone()),
            deliver_to: Some(order.deliver_to.clone()),
            mobile_number: Some(order.mobile_number.clone()),
            status: Some(json!(order.status)),
            dishes: Some(Value::Array(dishes)),
        }
    }
}

#[derive(Deserialize, Validate, Debug)]
#[serde(deny_unknown_fields)]
struct OrderDishData {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    #[validate(custom(function = "whole_positive", code = "price_invalid"))]
    price: Option<Value>,
    #[validate(
        required(code = "quantity_invalid"),
        custom(function = "whole_positive", code = "quantity_invalid")
    )]
    quantity: Option<Value>,
}

/// An order body that passed the shared create/update chain. `status` stays optional
/// because only updates require it.
#[derive(Debug)]
pub struct ValidOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderDish>,
}

fn invalid_status() -> Error {
    let statuses = OrderStatus::ALL.map(|status| status.as_str()).join(", ");
    Error::Validation(format!("Order must have a status of {}", statuses))
}

fn parse_status(value: &Value) -> Result<OrderStatus, Error> {
    value
        .as_str()
        .and_then(|status| status.parse().ok())
        .ok_or_else(invalid_status)
}

fn invalid_line(index: usize, field: &str) -> Error {
    Error::Validation(format!(
        "Dish {} must have a {} that is an integer greater than 0",
        index, field
    ))
}

fn parse_dish(index: usize, value: &Value) -> Result<OrderDish, Error> {
    let line: OrderDishData = serde_json::from_value(value.clone()).map_err(|err| {
        Error::InvalidBody(format!("Invalid request body: dish {}: {}", index, err))
    })?;

    if let Err(errors) = line.validate() {
        if validation::flagged(&errors, "quantity_invalid") {
            return Err(invalid_line(index, "quantity"));
        }
        if validation::flagged(&errors, "price_invalid") {
            return Err(invalid_line(index, "price"));
        }
    }

    let quantity = line
        .quantity
        .as_ref()
        .and_then(positive_integer)
        .ok_or_else(|| invalid_line(index, "quantity"))?;
    let price = line.price.as_ref().and_then(positive_integer).unwrap_or(0);

    Ok(OrderDish {
        id: line.id.unwrap_or_default(),
        name: line.name.unwrap_or_default(),
        description: line.description.unwrap_or_default(),
        image_url: line.image_url.unwrap_or_default(),
        price,
        quantity,
    })
}

/// Runs the body rules in route order and yields the checked order.
pub fn validate(data: &OrderData) -> Result<ValidOrder, Error> {
    let errors = data.validate().err().unwrap_or_else(ValidationErrors::new);
    validation::ensure(&errors, PRESENCE)?;

    let dishes = match &data.dishes {
        Some(Value::Array(dishes)) => dishes
            .iter()
            .enumerate()
            .map(|(index, dish)| parse_dish(index, dish))
            .collect::<Result<Vec<_>, _>>()?,
        _ => vec![],
    };

    let status = match &data.status {
        None | Some(Value::Null) => None,
        Some(status) => Some(parse_status(status)?),
    };

    Ok(ValidOrder {
        deliver_to: data.deliver_to.clone().unwrap_or_default(),
        mobile_number: data.mobile_number.clone().unwrap_or_default(),
        status,
        dishes,
    })
}

pub fn not_found(id: &str) -> Error {
    Error::NotFound(format!("{} does not exist: {}.", RESOURCE, id))
}

/// Existence guard: the routed order, or a 404 naming the id.
pub async fn exists(repository: &dyn OrderRepository, id: &str) -> Result<Order, Error> {
    repository.find_by_id(id).await.ok_or_else(|| not_found(id))
}

pub fn id_matches(body_id: Option<&str>, order: &Order) -> Result<(), Error> {
    match body_id {
        Some(id) if !id.is_empty() && id != order.id => Err(Error::IdMismatch {
            status: StatusCode::BAD_REQUEST,
            message: format!(
                "Order id does not match route id. Order: {}, Route: {}.",
                id, order.id
            ),
        }),
        _ => Ok(()),
    }
}

/// Updates have to name the status the order moves to.
pub fn required_status(status: Option<OrderStatus>) -> Result<OrderStatus, Error> {
    status.ok_or_else(invalid_status)
}

/// A delivered order is frozen. Checked against the stored order under the store lock.
pub fn not_delivered(order: &Order) -> Result<(), Error> {
    if order.status == OrderStatus::Delivered {
        return Err(Error::ImmutableState(String::from(
            "A delivered order cannot be changed",
        )));
    }

    Ok(())
}

/// Deletion guard: only pending orders may be removed.
pub fn status_allows_delete(order: &Order) -> Result<(), Error> {
    if order.status != OrderStatus::Pending {
        return Err(Error::ImmutableState(String::from(
            "An order cannot be deleted unless it is pending",
        )));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn data(body: Value) -> OrderData {
        serde_json::from_value(body).unwrap()
    }

    fn order(status: OrderStatus) -> Order {
        Order {
            id: String::from("5"),
            deliver_to: String::from("221B Baker Street"),
            mobile_number: String::from("020 7224 3688"),
            status,
            dishes: vec![],
        }
    }

    fn body() -> Value {
        json!({
            "deliverTo": "221B Baker Street",
            "mobileNumber": "020 7224 3688",
            "dishes": [{ "id": "1", "name": "Scone", "price": 3, "quantity": 2 }]
        })
    }

    #[test]
    fn should_accept_an_order_without_status() {
        let order = validate(&data(body())).unwrap();
        assert_eq!(order.status, None);
        assert_eq!(order.dishes.len(), 1);
        assert_eq!(order.dishes[0].quantity, 2);
        assert_eq!(order.dishes[0].description, "");
    }

    #[test]
    fn should_require_dishes() {
        let mut missing = body();
        missing["dishes"] = Value::Null;
        let err = validate(&data(missing)).unwrap_err();
        assert_eq!(err.to_string(), "Order must include a dish");

        for dishes in [json!([]), json!("tacos")] {
            let mut invalid = body();
            invalid["dishes"] = dishes;
            let err = validate(&data(invalid)).unwrap_err();
            assert_eq!(err.to_string(), "Order must include at least one dish");
        }
    }

    #[test]
    fn should_name_the_dish_with_a_bad_quantity() {
        let mut invalid = body();
        invalid["dishes"] = json!([{ "quantity": 1 }, { "quantity": 0 }, { "quantity": "2" }]);
        let err = validate(&data(invalid)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dish 1 must have a quantity that is an integer greater than 0"
        );
    }

    #[test]
    fn should_reject_unknown_statuses() {
        let mut invalid = body();
        invalid["status"] = json!("lost");
        let err = validate(&data(invalid)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }

    #[test]
    fn should_freeze_delivered_orders() {
        let err = not_delivered(&order(OrderStatus::Delivered)).unwrap_err();
        assert_eq!(err.to_string(), "A delivered order cannot be changed");
        assert!(not_delivered(&order(OrderStatus::OutForDelivery)).is_ok());
    }

    #[test]
    fn should_require_a_status_on_update() {
        assert_eq!(
            required_status(None).unwrap_err().to_string(),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
        assert_eq!(
            required_status(Some(OrderStatus::Delivered)),
            Ok(OrderStatus::Delivered)
        );
    }

    #[test]
    fn should_accept_stored_orders() {
        let mut stored = order(OrderStatus::Preparing);
        stored.dishes = vec![OrderDish {
            id: String::from("1"),
            name: String::from("Scone"),
            description: String::new(),
            image_url: String::new(),
            price: 0,
            quantity: 3,
        }];

        let valid = validate(&OrderData::from(&stored)).unwrap();
        assert_eq!(valid.status, Some(OrderStatus::Preparing));
        assert_eq!(valid.dishes, stored.dishes);

        stored.dishes[0].quantity = 0;
        let err = validate(&OrderData::from(&stored)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dish 0 must have a quantity that is an integer greater than 0"
        );
    }

    #[test]
    fn should_name_the_dish_with_a_bad_price() {
        let mut invalid = body();
        invalid["dishes"] = json!([{ "quantity": 1, "price": 4.0 }, { "quantity": 1, "price": -2 }]);
        let err = validate(&data(invalid)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dish 1 must have a price that is an integer greater than 0"
        );
    }

    #[test]
    fn should_only_delete_pending_orders() {
        assert!(status_allows_delete(&order(OrderStatus::Pending)).is_ok());
        assert!(status_allows_delete(&order(OrderStatus::Preparing)).is_err());
    }

    #[test]
    fn should_report_mismatched_ids_as_bad_requests() {
        let err = id_matches(Some("6"), &order(OrderStatus::Pending)).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(id_matches(Some("5"), &order(OrderStatus::Pending)).is_ok());
    }
}
