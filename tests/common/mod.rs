/// Common test utilities for integration tests.
/// Provides an in-process REST resource store (json-server style) plus
/// builders for test records.

use actix_web::{web, App, HttpResponse};
use admin_panel_client::models::{Product, User};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory resource store: one record list per collection name, ids
/// assigned sequentially when the client sends none.
#[derive(Default)]
pub struct Store {
    records: Mutex<HashMap<String, Vec<Value>>>,
    next_id: Mutex<u64>,
}

async fn list(path: web::Path<String>, store: web::Data<Store>) -> HttpResponse {
    let records = store.records.lock().unwrap();
    let collection = records.get(path.as_str()).cloned().unwrap_or_default();
    HttpResponse::Ok().json(collection)
}

async fn create(
    path: web::Path<String>,
    store: web::Data<Store>,
    body: web::Json<Value>,
) -> HttpResponse {
    let mut record = body.into_inner();
    let has_id = record
        .get("id")
        .and_then(Value::as_str)
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    if !has_id {
        let mut next_id = store.next_id.lock().unwrap();
        *next_id += 1;
        record["id"] = Value::String(next_id.to_string());
    }

    store
        .records
        .lock()
        .unwrap()
        .entry(path.into_inner())
        .or_default()
        .push(record.clone());
    HttpResponse::Created().json(record)
}

async fn update(
    path: web::Path<(String, String)>,
    store: web::Data<Store>,
    body: web::Json<Value>,
) -> HttpResponse {
    let (collection, id) = path.into_inner();
    let mut record = body.into_inner();
    // Full replacement semantics; the path id wins
    record["id"] = Value::String(id.clone());

    let mut records = store.records.lock().unwrap();
    if let Some(entries) = records.get_mut(&collection) {
        if let Some(existing) = entries
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
        {
            *existing = record.clone();
            return HttpResponse::Ok().json(record);
        }
    }
    HttpResponse::NotFound().finish()
}

async fn remove(path: web::Path<(String, String)>, store: web::Data<Store>) -> HttpResponse {
    let (collection, id) = path.into_inner();
    let mut records = store.records.lock().unwrap();
    if let Some(entries) = records.get_mut(&collection) {
        let before = entries.len();
        entries.retain(|r| r.get("id").and_then(Value::as_str) != Some(id.as_str()));
        if entries.len() < before {
            return HttpResponse::NoContent().finish();
        }
    }
    HttpResponse::NotFound().finish()
}

/// Spawn a fresh resource store on an ephemeral port.
pub fn spawn_store() -> actix_test::TestServer {
    let store = web::Data::new(Store::default());
    actix_test::start(move || {
        App::new()
            .app_data(store.clone())
            .route("/{collection}", web::get().to(list))
            .route("/{collection}", web::post().to(create))
            .route("/{collection}/{id}", web::put().to(update))
            .route("/{collection}/{id}", web::delete().to(remove))
    })
}

/// Spawn a server where every request fails with HTTP 500, for exercising
/// the failure policy.
pub fn spawn_failing_store() -> actix_test::TestServer {
    actix_test::start(|| {
        App::new().default_service(web::to(|| async {
            HttpResponse::InternalServerError().finish()
        }))
    })
}

pub fn base_url(server: &actix_test::TestServer) -> String {
    format!("http://{}", server.addr())
}

/// Helper for creating test products
pub struct TestProductBuilder {
    id: String,
    title: String,
    price: f64,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        TestProductBuilder {
            id: String::new(),
            title: "Test Product".to_string(),
            price: 10.0,
        }
    }
}

impl TestProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn build(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            ..Default::default()
        }
    }
}

/// Helper for creating test users
pub struct TestUserBuilder {
    id: String,
    first_name: String,
    email: String,
}

impl Default for TestUserBuilder {
    fn default() -> Self {
        TestUserBuilder {
            id: String::new(),
            first_name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
        }
    }
}

impl TestUserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn first_name(mut self, first_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            first_name: self.first_name,
            email: self.email,
            ..Default::default()
        }
    }
}
