#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use restaurant_backend_rs::{
    app::App,
    modules::{
        dish::repository::{Dish, InMemoryDishRepository},
        order::repository::{InMemoryOrderRepository, Order, OrderRepository},
    },
    types::{Config, Context, ToContext},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub async fn app() -> Router {
    let ctx = Config::default().to_context().await.unwrap();
    App::new(Arc::new(ctx)).router()
}

pub async fn seeded_app(dishes: Vec<Dish>, orders: Vec<Order>) -> Router {
    let mut ctx: Context = Config::default().to_context().await.unwrap();
    ctx.dishes = Arc::new(InMemoryDishRepository::with_dishes(dishes));
    ctx.orders = Arc::new(InMemoryOrderRepository::with_orders(orders));
    App::new(Arc::new(ctx)).router()
}

pub async fn app_with_orders(orders: Arc<dyn OrderRepository>) -> Router {
    let mut ctx: Context = Config::default().to_context().await.unwrap();
    ctx.orders = orders;
    App::new(Arc::new(ctx)).router()
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn put(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::PUT, uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::DELETE, uri, None).await
}
