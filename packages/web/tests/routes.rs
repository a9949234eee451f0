use api::{db, Settings};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use store::Catalog;
use tower::ServiceExt;
use tower_sessions::MemoryStore;
use web::{app, AppState};

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: String,
}

/// A browser stand-in: one router, one cookie jar.
struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    async fn new() -> Self {
        Self::with_settings(Settings::default()).await
    }

    async fn with_settings(settings: Settings) -> Self {
        let pool = db::in_memory().await.unwrap();
        let state = AppState::new(pool, Catalog::default(), settings);
        Self {
            router: app(state, MemoryStore::default()),
            cookie: None,
        }
    }

    async fn get(&mut self, uri: &str) -> Reply {
        let request = Request::get(uri);
        self.send(request, Body::empty()).await
    }

    async fn post(&mut self, uri: &str, fields: &[(&str, &str)]) -> Reply {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(request, Body::from(encode(fields))).await
    }

    async fn send(&mut self, mut request: axum::http::request::Builder, body: Body) -> Reply {
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            let value = pair.split_once('=').map(|(_, v)| v).unwrap_or("");
            self.cookie = (!value.is_empty()).then(|| pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        Reply {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    async fn signup(&mut self, email: &str, username: &str) {
        let reply = self
            .post(
                "/signup",
                &[
                    ("email", email),
                    ("username", username),
                    ("password", "password123"),
                ],
            )
            .await;
        assert_eq!(reply.status, StatusCode::SEE_OTHER);
        assert_eq!(reply.location.as_deref(), Some("/"));
    }
}

fn encode(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={}", v.replace('%', "%25").replace(' ', "+").replace('&', "%26")))
        .collect::<Vec<_>>()
        .join("&")
}

fn assert_redirect(reply: &Reply, to: &str) {
    assert_eq!(reply.status, StatusCode::SEE_OTHER);
    assert_eq!(reply.location.as_deref(), Some(to));
}

#[tokio::test]
async fn test_public_pages() {
    let mut client = TestClient::new().await;

    for uri in ["/", "/about", "/login", "/signup", "/essentials"] {
        let reply = client.get(uri).await;
        assert_eq!(reply.status, StatusCode::OK, "{uri}");
        assert!(
            reply.body.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"),
            "{uri}"
        );
        assert!(reply.body.ends_with("</body></html>"), "{uri}");
    }

    let essentials = client.get("/essentials").await;
    assert!(essentials.body.contains("Bandages"));
    assert!(essentials.body.contains("Binoculars"));
    assert!(essentials.body.contains("Log in to buy"));
}

#[tokio::test]
async fn test_healthz_and_unknown_path() {
    let mut client = TestClient::new().await;

    let reply = client.get("/healthz").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "ok");

    assert_eq!(client.get("/nowhere").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_protected_routes_redirect_to_login() {
    let mut client = TestClient::new().await;

    for uri in ["/emergency", "/credits", "/logout", "/emergency/update/1"] {
        assert_redirect(&client.get(uri).await, "/login");
    }
    assert_redirect(&client.post("/buy/1", &[]).await, "/login");
    assert_redirect(&client.post("/buy3", &[]).await, "/login");
    assert_redirect(
        &client.post("/emergency", &[("note", "t"), ("desc", "d")]).await,
        "/login",
    );
}

#[tokio::test]
async fn test_signup_starts_with_balance() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;

    let home = client.get("/").await;
    assert!(home.body.contains("ana_b"));

    let credits = client.get("/credits").await;
    assert_eq!(credits.status, StatusCode::OK);
    assert!(credits.body.contains("Your balance: 100 NouCredits"));
}

#[tokio::test]
async fn test_duplicate_signup_is_rejected() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;
    client.get("/logout").await;

    let reply = client
        .post(
            "/signup",
            &[
                ("email", "ana@example.org"),
                ("username", "other_name"),
                ("password", "password123"),
            ],
        )
        .await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(reply.body.contains("An account with this email already exists"));
}

#[tokio::test]
async fn test_login_and_logout() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;
    assert_redirect(&client.get("/logout").await, "/");
    assert_redirect(&client.get("/credits").await, "/login");

    let wrong = client
        .post(
            "/login",
            &[("email", "ana@example.org"), ("password", "wrongpassword")],
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert!(wrong.body.contains("Invalid email or password"));
    assert_redirect(&client.get("/credits").await, "/login");

    let ok = client
        .post(
            "/login",
            &[
                ("email", "ana@example.org"),
                ("password", "password123"),
                ("remember", "on"),
            ],
        )
        .await;
    assert_redirect(&ok, "/");
    assert_eq!(client.get("/credits").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_validation() {
    let mut client = TestClient::new().await;
    let reply = client
        .post("/login", &[("email", ""), ("password", "short")])
        .await;
    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(reply.body.contains("Email is required"));
}

fn starting_with(balance: i64) -> Settings {
    let mut settings = Settings::default();
    settings.account.starting_balance = balance;
    settings
}

#[tokio::test]
async fn test_purchase_each_product() {
    // Two of everything costs 300
    let mut client = TestClient::with_settings(starting_with(1000)).await;
    client.signup("ana@example.org", "ana_b").await;

    let mut expected = 1000;
    for product in Catalog::default().iter() {
        for path in [product.purchase_path(), product.legacy_path()] {
            expected -= product.price;
            let reply = client.post(&path, &[]).await;
            assert_eq!(reply.status, StatusCode::OK, "{path}");
            assert!(reply.body.contains(&format!("Bought {}", product.name)), "{path}");
            assert!(
                reply
                    .body
                    .contains(&format!("Your balance: {expected} NouCredits")),
                "{path}"
            );
        }
    }
    assert_eq!(expected, 700);

    let credits = client.get("/credits").await;
    assert!(credits.body.contains("Your balance: 700 NouCredits"));
    for product in Catalog::default().iter() {
        assert!(credits.body.contains(&product.name), "{}", product.name);
    }
    assert!(credits.body.contains("Oral Rehydration Solution"));
}

#[tokio::test]
async fn test_spend_to_zero_then_payment_required() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;

    // Bandages cost 10, through the legacy route
    for _ in 0..10 {
        assert_eq!(client.post("/buy", &[]).await.status, StatusCode::OK);
    }

    let reply = client.post("/buy/1", &[]).await;
    assert_eq!(reply.status, StatusCode::PAYMENT_REQUIRED);
    assert!(reply.body.contains("Insufficient balance"));

    let credits = client.get("/credits").await;
    assert!(credits.body.contains("Your balance: 0 NouCredits"));
}

#[tokio::test]
async fn test_unknown_product() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;

    assert_eq!(client.post("/buy/11", &[]).await.status, StatusCode::NOT_FOUND);
    assert!(client.get("/credits").await.body.contains("Your balance: 100 NouCredits"));
}

#[tokio::test]
async fn test_malformed_product_id_is_not_found() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;

    for uri in ["/buy/abc", "/buy/-1", "/buy/1.5"] {
        let reply = client.post(uri, &[]).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{uri}");
        assert!(reply.body.contains("Page not found"), "{uri}");
    }
    assert!(client.get("/credits").await.body.contains("Your balance: 100 NouCredits"));
}

#[tokio::test]
async fn test_configured_starting_balance() {
    let mut client = TestClient::with_settings(starting_with(250)).await;

    let page = client.get("/signup").await;
    assert!(page.body.contains("New accounts start with 250 NouCredits"));

    client.signup("ana@example.org", "ana_b").await;
    assert!(client.get("/credits").await.body.contains("Your balance: 250 NouCredits"));
}

#[tokio::test]
async fn test_long_email_can_log_back_in() {
    let mut client = TestClient::new().await;
    let email = "aaaaaaaaaaaaaaaaaaaaaaaaa@example.org";
    assert_eq!(email.len(), 37);

    client.signup(email, "ana_b").await;
    assert_redirect(&client.get("/logout").await, "/");

    let reply = client
        .post("/login", &[("email", email), ("password", "password123")])
        .await;
    assert_redirect(&reply, "/");
    assert_eq!(client.get("/credits").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_on_buy_route_does_not_charge() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;

    assert_redirect(&client.get("/buy2").await, "/essentials");
    assert_redirect(&client.get("/buy/2").await, "/essentials");
    assert!(client.get("/credits").await.body.contains("Your balance: 100 NouCredits"));
}

#[tokio::test]
async fn test_note_lifecycle() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;

    let created = client
        .post("/emergency", &[("note", "Flood"), ("desc", "Need boats")])
        .await;
    assert_redirect(&created, "/emergency");

    let page = client.get("/emergency").await;
    assert!(page.body.contains("Flood"));
    assert!(page.body.contains("Need boats"));

    let blank = client.post("/emergency", &[("note", " "), ("desc", "")]).await;
    assert_eq!(blank.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(blank.body.contains("Title is required"));

    assert_eq!(client.get("/emergency/update/1").await.status, StatusCode::OK);
    let updated = client
        .post(
            "/emergency/update/1",
            &[("title", "Flood north"), ("desc", "Need 3 boats")],
        )
        .await;
    assert_redirect(&updated, "/emergency");
    assert!(client.get("/emergency").await.body.contains("Need 3 boats"));

    assert_redirect(&client.get("/emergency/delete/1").await, "/emergency");
    assert!(!client.get("/emergency").await.body.contains("Need 3 boats"));
    assert_eq!(
        client.get("/emergency/delete/1").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_missing_note() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;

    assert_eq!(
        client.get("/emergency/update/42").await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        client
            .post("/emergency/update/42", &[("title", "t"), ("desc", "d")])
            .await
            .status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_other_users_note_is_forbidden() {
    let mut client = TestClient::new().await;
    client.signup("ana@example.org", "ana_b").await;
    client
        .post("/emergency", &[("note", "Flood"), ("desc", "Need boats")])
        .await;
    client.get("/logout").await;

    client.signup("bo@example.org", "bo_c").await;
    assert_eq!(
        client.get("/emergency/update/1").await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        client.post("/emergency/delete/1", &[]).await.status,
        StatusCode::FORBIDDEN
    );
    assert!(!client.get("/emergency").await.body.contains("Need boats"));
}
