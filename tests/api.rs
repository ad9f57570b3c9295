use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use flavor_factory_api::store::{EqualityFilter, RawDocument};
use flavor_factory_api::{app, AppState, DocumentStore, MemoryStore, Settings, StorageError};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    fn name(&self) -> &str {
        "flavor"
    }

    async fn insert_one(&self, _: &str, _: RawDocument) -> Result<String, StorageError> {
        Err(StorageError::Backend("server selection timeout".into()))
    }

    async fn find(&self, _: &str, _: &EqualityFilter, _: u32) -> Result<Vec<RawDocument>, StorageError> {
        Err(StorageError::Backend("server selection timeout".into()))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Backend(
            "Server selection timeout: No available servers. Topology: { Type: Unknown }".into(),
        ))
    }
}

fn configured_settings() -> Settings {
    Settings::from_lookup(|k| match k {
        "DATABASE_URL" => Some("mongodb://localhost:27017".into()),
        "DATABASE_NAME" => Some("flavor".into()),
        _ => None,
    })
    .unwrap()
}

fn bare_settings() -> Settings {
    Settings::from_lookup(|_| None).unwrap()
}

fn router_with(store: Arc<dyn DocumentStore>) -> Router {
    app(AppState::new(Some(store), configured_settings()))
}

async fn call(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new("flavor"));
    let items = [
        json!({"name": "Classic Burger", "price": 8.5, "category": "Burgers", "is_drive_thru_friendly": true}),
        json!({"name": "Tilapia Plate", "price": 14, "category": "Mains", "is_drive_thru_friendly": false}),
        json!({"name": "Veggie Burger", "price": 7.0, "category": "Burgers", "is_drive_thru_friendly": false}),
        json!({"name": "Fries", "price": 3, "category": "Sides"}),
    ];
    for item in items {
        store
            .insert_one("menuitem", item.as_object().cloned().unwrap())
            .await
            .unwrap();
    }
    store
}

#[tokio::test]
async fn root_reports_liveness() {
    let (status, body) = call(app(AppState::new(None, bare_settings())), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Flavor Factory backend is running"}));
}

#[tokio::test]
async fn locations_are_fixed_without_a_store() {
    let (status, body) = call(app(AppState::new(None, bare_settings())), get("/locations")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "brand": "Flavor Factory",
            "cities": [
                {"city": "Lubumbashi", "country": "DR Congo"},
                {"city": "Johannesburg", "country": "South Africa"},
                {"city": "Ottawa", "country": "Canada"}
            ]
        })
    );
}

#[tokio::test]
async fn menu_lists_items_without_ids() {
    let store = seeded_store().await;
    let (status, body) = call(router_with(store), get("/menu")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 4);
    for item in items {
        assert!(item.get("_id").is_none());
        assert!(item.get("id").is_none());
    }
    assert_eq!(items[3]["is_drive_thru_friendly"], json!(true));
    assert_eq!(items[3]["description"], Value::Null);
}

#[tokio::test]
async fn menu_caps_at_two_hundred() {
    let store = Arc::new(MemoryStore::new("flavor"));
    for i in 0..205 {
        let item = json!({"name": format!("Dish {}", i), "price": 1, "category": "Mains"});
        store
            .insert_one("menuitem", item.as_object().cloned().unwrap())
            .await
            .unwrap();
    }
    let (status, body) = call(router_with(store), get("/menu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 200);
    assert_eq!(body[0]["name"], json!("Dish 0"));
}

#[tokio::test]
async fn menu_filters_by_category() {
    let store = seeded_store().await;
    let (status, body) = call(router_with(store), get("/menu?category=Burgers")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["category"] == json!("Burgers")));
}

#[tokio::test]
async fn menu_filters_drive_thru_only() {
    let store = seeded_store().await;
    let (status, body) = call(router_with(store.clone()), get("/menu?drive_thru_only=true")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], json!("Classic Burger"));

    let (_, body) = call(router_with(store), get("/menu?category=Burgers&drive_thru_only=false")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_category_yields_empty_list() {
    let store = seeded_store().await;
    let (status, body) = call(router_with(store), get("/menu?category=Pizza")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn bad_drive_thru_flag_is_client_error() {
    let store = seeded_store().await;
    let (status, body) = call(router_with(store), get("/menu?drive_thru_only=maybe")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"][0]["field"], json!("drive_thru_only"));
}

#[tokio::test]
async fn corrupt_menu_document_is_server_error() {
    let store = seeded_store().await;
    store
        .insert_one(
            "menuitem",
            json!({"name": "Refund", "price": -5, "category": "Mains"}).as_object().cloned().unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = call(router_with(store), get("/menu")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!("storage_error"));
    assert!(body["error"]["message"].as_str().unwrap().contains("price"));
}

#[tokio::test]
async fn menu_coerces_string_typed_stored_fields() {
    let store = Arc::new(MemoryStore::new("flavor"));
    let item = json!({"name": "Wrap", "price": "4.50", "category": "Mains", "is_drive_thru_friendly": "true"});
    store
        .insert_one("menuitem", item.as_object().cloned().unwrap())
        .await
        .unwrap();
    let (status, body) = call(router_with(store), get("/menu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["price"], json!(4.5));
    assert_eq!(body[0]["is_drive_thru_friendly"], json!(true));
}

#[tokio::test]
async fn menu_storage_failure_is_server_error() {
    let (status, body) = call(router_with(Arc::new(UnreachableStore)), get("/menu")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("server selection timeout"));
}

#[tokio::test]
async fn inquiry_is_persisted() {
    let store = Arc::new(MemoryStore::new("flavor"));
    let (status, body) = call(
        router_with(store.clone()),
        post_json("/inquiry", r#"{"name":"A","email":"a@x.com","message":"Hi","guests":2}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let docs = store.find("inquiry", &[], 10).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["_id"], json!(id));
    assert_eq!(docs[0]["guests"], json!(2));
    assert_eq!(docs[0]["email"], json!("a@x.com"));
    assert!(docs[0]["created_at"].is_string());
}

#[tokio::test]
async fn inquiry_missing_fields_never_reaches_store() {
    let store = Arc::new(MemoryStore::new("flavor"));
    for body in [
        r#"{"email":"a@x.com","message":"Hi"}"#,
        r#"{"name":"A","message":"Hi"}"#,
        r#"{"name":"A","email":"a@x.com"}"#,
    ] {
        let (status, _) = call(router_with(store.clone()), post_json("/inquiry", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
    assert_eq!(store.count("inquiry").await, 0);
}

#[tokio::test]
async fn inquiry_with_empty_email_is_rejected() {
    let store = Arc::new(MemoryStore::new("flavor"));
    let (status, body) = call(
        router_with(store.clone()),
        post_json("/inquiry", r#"{"name":"A","email":"","message":"Hi"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"][0]["field"], json!("email"));
    assert_eq!(body["error"]["details"][0]["constraint"]["kind"], json!("too_short"));
    assert_eq!(store.count("inquiry").await, 0);
}

#[tokio::test]
async fn inquiry_accepts_numeric_string_guests() {
    let store = Arc::new(MemoryStore::new("flavor"));
    let (status, _) = call(
        router_with(store.clone()),
        post_json("/inquiry", r#"{"name":"A","email":"a@x.com","message":"Hi","guests":"3"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let docs = store.find("inquiry", &[], 10).await.unwrap();
    assert_eq!(docs[0]["guests"], json!(3));
}

#[tokio::test]
async fn inquiry_guests_must_be_positive() {
    let store = Arc::new(MemoryStore::new("flavor"));
    for guests in ["0", "-1"] {
        let body = format!(r#"{{"name":"A","email":"a@x.com","message":"Hi","guests":{}}}"#, guests);
        let (status, body) = call(router_with(store.clone()), post_json("/inquiry", &body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["details"][0]["field"], json!("guests"));
    }
    assert_eq!(store.count("inquiry").await, 0);
}

#[tokio::test]
async fn malformed_inquiry_body_is_bad_request() {
    let store = Arc::new(MemoryStore::new("flavor"));
    let (status, _) = call(router_with(store.clone()), post_json("/inquiry", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = call(router_with(store), post_json("/inquiry", "[1,2]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inquiry_without_store_is_server_error() {
    let router = app(AppState::new(None, bare_settings()));
    let (status, body) = call(
        router,
        post_json("/inquiry", r#"{"name":"A","email":"a@x.com","message":"Hi"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!("storage_error"));
}

#[tokio::test]
async fn diagnostic_reports_working_store() {
    let store = seeded_store().await;
    let (status, body) = call(router_with(store), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], json!("✅ Running"));
    assert_eq!(body["database"], json!("✅ Connected & Working"));
    assert_eq!(body["connection_status"], json!("Connected"));
    assert_eq!(body["database_url"], json!("✅ Set"));
    assert_eq!(body["database_name"], json!("✅ Set"));
    assert_eq!(body["collections"], json!(["menuitem"]));
}

#[tokio::test]
async fn diagnostic_degrades_when_store_is_unreachable() {
    let (status, body) = call(router_with(Arc::new(UnreachableStore)), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: "));
    assert!(database.chars().count() <= "⚠️  Connected but Error: ".chars().count() + 50);
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn diagnostic_without_configuration() {
    let (status, body) = call(app(AppState::new(None, bare_settings())), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection_status"], json!("Not Connected"));
    assert_eq!(body["database_url"], json!("❌ Not Set"));
    assert_eq!(body["database_name"], json!("❌ Not Set"));
    assert_eq!(body["database"], json!("⚠️  Available but not initialized"));
}

#[tokio::test]
async fn diagnostic_with_configuration_but_no_client() {
    let (status, body) = call(app(AppState::new(None, configured_settings())), get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], json!("⚠️  Available but not initialized"));
}

#[tokio::test]
async fn schema_lists_entity_rules() {
    let (status, body) = call(app(AppState::new(None, bare_settings())), get("/schema")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["collection"], json!("menuitem"));
    assert_eq!(body[1]["collection"], json!("inquiry"));
    let price = body[0]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == json!("price"))
        .unwrap();
    assert_eq!(price["type"], json!("number"));
    assert_eq!(price["required"], json!(true));
    assert_eq!(price["minimum"], json!(0.0));
}

#[tokio::test]
async fn cors_allows_any_origin_with_credentials() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/menu")
        .header(header::ORIGIN, "https://flavorfactory.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let res = app(AppState::new(None, bare_settings())).oneshot(req).await.unwrap();
    let headers = res.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://flavorfactory.example"
    );
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}
