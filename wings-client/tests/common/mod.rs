// In-process stand-in for the remote products/sales store

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::{Value, json};
use wings_client::{CafeService, ClientConfig, NetworkHttpClient};

#[derive(Debug, Default)]
pub struct FakeStore {
    pub products: Vec<Value>,
    pub sales: Vec<Value>,
    /// Every request as "METHOD /path"
    pub requests: Vec<String>,
    pub fail_product_updates: bool,
    pub fail_sales_list: bool,
    pub fail_products_list: bool,
}

pub type SharedStore = Arc<Mutex<FakeStore>>;

pub struct FakeServer {
    pub base_url: String,
    pub store: SharedStore,
}

impl FakeServer {
    pub async fn start(products: Vec<Value>, sales: Vec<Value>) -> Self {
        let store = Arc::new(Mutex::new(FakeStore {
            products,
            sales,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route("/products/{id}", put(update_product).delete(delete_product))
            .route("/sales", get(list_sales).post(create_sale))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            store,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url).with_timeout(5)
    }

    pub fn service(&self) -> CafeService<NetworkHttpClient> {
        CafeService::new(NetworkHttpClient::new(&self.config()).unwrap())
    }

    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.store.lock().unwrap().requests.clear();
    }

    pub fn product(&self, id: &str) -> Option<Value> {
        self.store
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| id_of(p) == id)
            .cloned()
    }

    pub fn sales(&self) -> Vec<Value> {
        self.store.lock().unwrap().sales.clone()
    }

    pub fn set(&self, f: impl FnOnce(&mut FakeStore)) {
        f(&mut self.store.lock().unwrap());
    }
}

pub fn product_json(id: impl Into<Value>, name: &str, category: &str, price: f64, quantity: i64) -> Value {
    json!({
        "id": id.into(),
        "name": name,
        "category": category,
        "price": price,
        "quantity": quantity,
    })
}

fn id_of(value: &Value) -> String {
    match &value["id"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

fn boom() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

async fn list_products(State(store): State<SharedStore>) -> Response {
    let mut store = store.lock().unwrap();
    store.requests.push("GET /products".into());
    if store.fail_products_list {
        return boom();
    }
    Json(Value::Array(store.products.clone())).into_response()
}

async fn create_product(State(store): State<SharedStore>, Json(mut body): Json<Value>) -> Response {
    let mut store = store.lock().unwrap();
    store.requests.push("POST /products".into());
    body["id"] = Value::String(new_id());
    store.products.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut store = store.lock().unwrap();
    store.requests.push(format!("PUT /products/{id}"));
    if store.fail_product_updates {
        return boom();
    }
    let Some(slot) = store.products.iter_mut().find(|p| id_of(p) == id) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": format!("product {id}") }))).into_response();
    };
    body["id"] = slot["id"].clone();
    *slot = body.clone();
    Json(body).into_response()
}

async fn delete_product(State(store): State<SharedStore>, Path(id): Path<String>) -> Response {
    let mut store = store.lock().unwrap();
    store.requests.push(format!("DELETE /products/{id}"));
    let before = store.products.len();
    store.products.retain(|p| id_of(p) != id);
    if store.products.len() == before {
        return (StatusCode::NOT_FOUND, "missing").into_response();
    }
    Json(json!({})).into_response()
}

async fn list_sales(State(store): State<SharedStore>) -> Response {
    let mut store = store.lock().unwrap();
    store.requests.push("GET /sales".into());
    if store.fail_sales_list {
        return boom();
    }
    Json(Value::Array(store.sales.clone())).into_response()
}

async fn create_sale(State(store): State<SharedStore>, Json(mut body): Json<Value>) -> Response {
    let mut store = store.lock().unwrap();
    store.requests.push("POST /sales".into());
    body["id"] = Value::String(new_id());
    store.sales.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}
