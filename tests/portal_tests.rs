//! End-to-end tests driving the router with `oneshot`, carrying the session cookie
//! between requests like a browser would.

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use smartkrishi::{
    auth::{password::verify_password, repo_types::Farmer},
    build_app, AppState,
};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "----smartkrishi-test-boundary";

struct TestClient {
    app: Router,
    state: AppState,
    cookie: Option<String>,
    dir: TempDir,
}

impl TestClient {
    async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::fake(dir.path().join("uploads")).await.unwrap();
        Self {
            app: build_app(state.clone()),
            state,
            cookie: None,
            dir,
        }
    }

    async fn send(&mut self, mut req: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            req.headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }
        let resp = self.app.clone().oneshot(req).await.unwrap();
        if let Some(set) = resp.headers().get(header::SET_COOKIE) {
            let pair = set.to_str().unwrap().split(';').next().unwrap().to_string();
            self.cookie = Some(pair);
        }
        resp
    }

    async fn get(&mut self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post_form(&mut self, uri: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn post_multipart(
        &mut self,
        uri: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
    ) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(fields, file)))
                .unwrap(),
        )
        .await
    }

    async fn signup_ravi(&mut self) -> Response<Body> {
        self.post_form(
            "/signup",
            "fullname=Ravi&email=ravi%40x.com&password=pw123&phone=999&address=VillageX&role=farmer",
        )
        .await
    }

    async fn login_ravi(&mut self) -> Response<Body> {
        self.post_form("/login", "email=ravi%40x.com&password=pw123")
            .await
    }
}

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn body_string(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect has a location")
        .to_str()
        .unwrap()
}

fn section<'a>(page: &'a str, start: &str, end: &str) -> &'a str {
    let from = page.find(start).expect("section start present");
    let to = from + page[from..].find(end).expect("section end present");
    &page[from..to]
}

#[tokio::test]
async fn signup_login_dashboard_scenario() {
    let mut client = TestClient::new().await;

    let resp = client.signup_ravi().await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let page = body_string(client.get("/login").await).await;
    assert!(page.contains("Signup successful! Please login."));

    let resp = client.login_ravi().await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");

    let resp = client.get("/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = body_string(resp).await;
    assert!(page.contains("Login successful!"));
    assert!(page.contains("Ravi"));
    assert!(page.contains("VillageX"));
    // no API key configured: placeholders, no error
    assert!(page.contains(r#"<span class="temperature">--</span>"#));
    assert!(page.contains(r#"<span class="humidity">--</span>"#));
    assert!(page.contains(r#"<span class="description">Unavailable</span>"#));
    assert!(page.contains("No active weather alerts."));
    assert!(page.contains("No uploads yet."));
}

#[tokio::test]
async fn stored_password_is_a_hash() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;

    let farmer = Farmer::find_by_email(&client.state.db, "ravi@x.com")
        .await
        .unwrap()
        .expect("account created");
    assert_ne!(farmer.password_hash, "pw123");
    assert!(verify_password("pw123", &farmer.password_hash).unwrap());
    assert_eq!(farmer.name, "Ravi");
    assert_eq!(farmer.village, "VillageX");
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;

    let resp = client
        .post_form(
            "/signup",
            "fullname=Other&email=RAVI%40x.com&password=zzz&phone=1&address=Y&role=farmer",
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let page = body_string(client.get("/login").await).await;
    assert!(page.contains("Email already registered. Please login."));
    assert_eq!(Farmer::count(&client.state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn signup_accepts_any_nonempty_email() {
    let mut client = TestClient::new().await;
    let resp = client
        .post_form(
            "/signup",
            "fullname=Ravi&email=Ravi%40localhost&password=pw123&phone=999&address=VillageX&role=farmer",
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let farmer = Farmer::find_by_email(&client.state.db, "ravi@localhost")
        .await
        .unwrap()
        .expect("account created");
    assert_eq!(farmer.name, "Ravi");
    assert_eq!(Farmer::count(&client.state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn incomplete_signup_asks_for_all_fields() {
    let mut client = TestClient::new().await;
    let resp = client
        .post_form("/signup", "fullname=Ravi&email=ravi%40x.com&password=pw123")
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signup");

    let page = body_string(client.get("/signup").await).await;
    assert!(page.contains("Please fill all fields"));
    assert_eq!(Farmer::count(&client.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn login_requires_matching_password() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;

    let resp = client
        .post_form("/login", "email=ravi%40x.com&password=wrong")
        .await;
    assert_eq!(location(&resp), "/login");
    let page = body_string(client.get("/login").await).await;
    assert!(page.contains("Invalid email or password"));

    let resp = client
        .post_form("/login", "email=nobody%40x.com&password=pw123")
        .await;
    assert_eq!(location(&resp), "/login");

    let resp = client.get("/dashboard").await;
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn protected_pages_redirect_without_session() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;

    for uri in ["/dashboard", "/help_card", "/upload"] {
        let resp = client.get(uri).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp), "/login", "{uri}");
        let body = body_string(resp).await;
        assert!(!body.contains("ravi@x.com"), "{uri} leaked account data");
        assert!(!body.contains("VillageX"), "{uri} leaked account data");
    }

    let page = body_string(client.get("/login").await).await;
    assert!(page.contains("Please login first!"));
}

#[tokio::test]
async fn session_for_deleted_account_is_signed_out() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;
    client.login_ravi().await;
    assert_eq!(client.get("/dashboard").await.status(), StatusCode::OK);

    sqlx::query("DELETE FROM farmers WHERE email = ?")
        .bind("ravi@x.com")
        .execute(&client.state.db)
        .await
        .unwrap();

    let resp = client.get("/dashboard").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let page = body_string(client.get("/login").await).await;
    assert!(page.contains("Please login first!"));
    assert!(!page.contains(r#"<a href="/logout">"#));

    // the stale email is gone, so the next visit is a plain anonymous redirect
    let resp = client.get("/help_card").await;
    assert_eq!(location(&resp), "/login");
    let page = body_string(client.get("/").await).await;
    assert!(!page.contains("Namaste"));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;
    client.login_ravi().await;
    assert_eq!(client.get("/dashboard").await.status(), StatusCode::OK);

    let resp = client.get("/logout").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    let page = body_string(client.get("/").await).await;
    assert!(page.contains("Logged out successfully."));

    let resp = client.get("/dashboard").await;
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn language_switch_translates_flashes() {
    let mut client = TestClient::new().await;

    let resp = client.get("/dashboard?lang=te").await;
    assert_eq!(location(&resp), "/login");

    let page = body_string(client.get("/login").await).await;
    assert!(page.contains("ముందుగా లాగిన్ చేయండి!"));
    assert!(page.contains(r#"<html lang="te">"#));

    let page = body_string(client.get("/?lang=en").await).await;
    assert!(page.contains("Welcome to Smart Krishi"));
}

#[tokio::test]
async fn soil_report_ignores_image_content() {
    let mut client = TestClient::new().await;

    let tiny_png: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];
    let leaf: Vec<u8> = (0..8192u32).map(|i| (i % 251) as u8).collect();

    let first = body_string(
        client
            .post_multipart("/soil", &[], Some(("soil_photo", "pixel.png", tiny_png)))
            .await,
    )
    .await;
    let second = body_string(
        client
            .post_multipart("/soil", &[], Some(("soil_photo", "my leaf.jpg", &leaf)))
            .await,
    )
    .await;

    let a = section(&first, r#"<div id="soil-report">"#, "</main>");
    let b = section(&second, r#"<div id="soil-report">"#, "</main>");
    assert_eq!(a, b);
    assert!(a.contains(
        "The soil appears healthy with moderate texture and good moisture retention."
    ));
    assert!(first.contains("Demo output"));

    let uploads = client.dir.path().join("uploads");
    assert!(uploads.join("pixel.png").exists());
    assert_eq!(std::fs::read(uploads.join("my_leaf.jpg")).unwrap(), leaf);
}

#[tokio::test]
async fn soil_without_photo_flashes() {
    let mut client = TestClient::new().await;
    let resp = client.post_multipart("/soil", &[], None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = body_string(resp).await;
    assert!(page.contains("Please upload a soil photo."));
    assert!(!page.contains("soil-report"));
}

#[tokio::test]
async fn crop_upload_recommends_fertilizers() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;
    client.login_ravi().await;

    let resp = client
        .post_multipart(
            "/upload",
            &[("crop", "Wheat")],
            Some(("photo", "wheat field.png", b"fake image bytes")),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = body_string(resp).await;
    assert!(page.contains("Image uploaded successfully!"));
    assert!(page.contains("<li>Zinc Sulphate</li>"));
    assert!(page.contains("Recommended fertilizers for Wheat"));

    let page = body_string(
        client
            .post_multipart("/upload", &[("crop", "Banana")], Some(("photo", "b.png", b"x")))
            .await,
    )
    .await;
    assert!(page.contains("<li>General NPK (20:20:20)</li>"));

    let resp = client.get("/uploads/wheat_field.png").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "fake image bytes");

    let page = body_string(client.get("/dashboard").await).await;
    assert!(page.contains("Latest upload"));
}

#[tokio::test]
async fn crop_upload_without_photo_flashes() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;
    client.login_ravi().await;

    let page = body_string(
        client
            .post_multipart("/upload", &[("crop", "wheat")], None)
            .await,
    )
    .await;
    assert!(page.contains("Please upload a valid crop image."));
    assert!(!page.contains("Zinc Sulphate"));
}

#[tokio::test]
async fn help_card_echoes_with_suggestion() {
    let mut client = TestClient::new().await;
    client.signup_ravi().await;
    client.login_ravi().await;

    let page = body_string(
        client
            .post_form(
                "/help_card",
                "name=Ravi&village=VillageX&phone=999&crop=Cotton&query=Pests+%3Cscript%3E",
            )
            .await,
    )
    .await;
    assert!(page.contains("drip irrigation"));
    assert!(page.contains("Crop: cotton"));
    assert!(page.contains("Pests &lt;script&gt;"));
}

#[tokio::test]
async fn forgot_password_always_claims_success() {
    let mut client = TestClient::new().await;
    let resp = client
        .post_form("/forgot-password", "email=someone%40nowhere.org")
        .await;
    assert_eq!(location(&resp), "/login");
    let page = body_string(client.get("/login").await).await;
    assert!(page.contains("Password reset instructions sent to your email"));
}

#[tokio::test]
async fn send_otp_reports_success() {
    let mut client = TestClient::new().await;
    let resp = client.post_form("/send_otp", "email=ravi%40x.com").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["message"], "OTP sent successfully");
}

#[tokio::test]
async fn weather_page_degrades_gracefully() {
    let mut client = TestClient::new().await;
    let page = body_string(client.post_form("/weather", "city=Warangal").await).await;
    assert!(page.contains("Warangal"));
    assert!(page.contains("Unavailable / అందుబాటులో లేదు"));
}

#[tokio::test]
async fn health_is_ok() {
    let mut client = TestClient::new().await;
    let resp = client.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}
