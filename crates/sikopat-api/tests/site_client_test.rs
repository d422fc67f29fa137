#![allow(clippy::unwrap_used)]
// Integration tests for `SiteClient` using wiremock.

use secrecy::SecretString;
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sikopat_api::{Error, SiteClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SiteClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = SiteClient::new(base_url, &TransportConfig::default()).unwrap();
    (server, client)
}

fn secret(s: &str) -> SecretString {
    s.to_string().into()
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_returns_session_cookie() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("username=budi"))
        .and(body_string_contains("password=rahasia"))
        .respond_with(html("<p>welcome</p>").insert_header("set-cookie", "BSESS=remote-42; Path=/"))
        .mount(&server)
        .await;

    assert!(!client.is_authenticated());
    let remote = client.login("budi", &secret("rahasia")).await.unwrap();

    assert_eq!(remote, "remote-42");
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_login_picks_session_cookie_among_others() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            html("<p>welcome</p>")
                .append_header("set-cookie", "AAcsrf=zzz; Path=/")
                .append_header("set-cookie", "BSESS=remote; Path=/"),
        )
        .mount(&server)
        .await;

    let remote = client.login("budi", &secret("rahasia")).await.unwrap();

    assert_eq!(remote, "remote");
    assert!(client.cookie_header().unwrap().contains("AAcsrf=zzz"));
}

#[tokio::test]
async fn test_login_failure_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
        .mount(&server)
        .await;

    let result = client.login("budi", &secret("wrong")).await;

    assert!(
        matches!(result, Err(Error::LoginFailed { status: 401 })),
        "expected LoginFailed error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_login_without_cookie_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(html("<p>bad credentials</p>"))
        .mount(&server)
        .await;

    let result = client.login("budi", &secret("wrong")).await;
    assert!(matches!(result, Err(Error::LoginFailed { status: 200 })));
}

#[tokio::test]
async fn test_login_transport_error_is_distinct() {
    // Port 1 is reserved; nothing answers there.
    let base_url = Url::parse("http://127.0.0.1:1").unwrap();
    let client = SiteClient::new(base_url, &TransportConfig::default()).unwrap();

    let result = client.login("budi", &secret("x")).await;
    match result {
        Err(ref e) => assert!(e.is_transport(), "expected transport error, got {e:?}"),
        Ok(v) => panic!("expected failure, got {v}"),
    }
}

#[tokio::test]
async fn test_restored_cookie_is_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sales"))
        .and(header("cookie", "BSESS=restored"))
        .respond_with(html(r#"<div class="hutang">Hutang Anda : Rp. 10</div>"#))
        .mount(&server)
        .await;

    client.restore_session("restored");
    client.validate_session().await.unwrap();
}

// ── Page tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_catalog() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<div class="imgList"><a href="x?item=9"></a><strong>Kopi</strong>
               <span class="subheader">3 Pcs Rp.2000</span></div>"#,
        ))
        .mount(&server)
        .await;

    let entries = client.catalog().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "9");
    assert_eq!(entries[0].qty, 3);
    assert_eq!(entries[0].price, 2000);
}

#[tokio::test]
async fn test_non_success_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    match client.account().await {
        Err(Error::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/sales"), "{url}");
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_sale_posts_form() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/sales/null/create"))
        .and(body_string_contains("item=17"))
        .and(body_string_contains("payment=c2"))
        .and(body_string_contains("quantity=3"))
        .respond_with(html("<p>ok</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let status = client.create_sale("17", "c2", 3).await.unwrap();
    assert!(status.is_success());
}

#[tokio::test]
async fn test_logout() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/logout"))
        .respond_with(html("<p>bye</p>"))
        .expect(1)
        .mount(&server)
        .await;

    client.logout().await.unwrap();
}
