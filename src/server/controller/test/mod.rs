use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, fixture};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    router,
    service::{account::AccountResolver, ticket_config::GuildConfigStore},
    startup::SESSION_COOKIE_NAME,
    state::AppState,
};


/// Drives the full application like a browser: the session cookie set by one
/// response is sent with every following request.
struct TestClient {
    app: Router,
    cookie: Option<String>,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap())
    }
}

impl TestClient {
    fn new(test: &TestContext) -> Self {
        let state = AppState::new(
            GuildConfigStore::new(test.config_path()),
            AccountResolver::File {
                path: test.accounts_path(),
            },
            test.views_dir(),
        );
        let session_layer = SessionManagerLayer::new(MemoryStore::default())
            .with_name(SESSION_COOKIE_NAME)
            .with_secure(false);

        Self {
            app: router::app(state, session_layer, &test.public_dir()),
            cookie: None,
        }
    }

    async fn send(&mut self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        match body {
            Some(value) => {
                self.send_raw(method, uri, Some("application/json"), value.to_string())
                    .await
            }
            None => self.send_raw(method, uri, None, String::new()).await,
        }
    }

    /// Sends a request with an arbitrary body and content type.
    async fn send_raw(
        &mut self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let body = Body::from(body);

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&mut self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn delete(&mut self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/local-login",
            json!({ "username": username, "password": password }),
        )
        .await
    }
}

/// Test environment with the default `bob`/`x` account bound to G1.
async fn setup() -> TestContext {
    TestBuilder::new()
        .with_accounts(fixture::account::table())
        .build()
        .await
        .unwrap()
}

/// Client already logged in as the default account.
async fn logged_in(test: &TestContext) -> TestClient {
    let mut client = TestClient::new(test);
    let response = client
        .login(fixture::account::USERNAME, fixture::account::PASSWORD)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    client
}
