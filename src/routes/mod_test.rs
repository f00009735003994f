use super::*;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn every_client_route_is_server_rendered() {
    let paths: Vec<String> = generate_route_list(client::app::App)
        .iter()
        .map(|route| route.path().to_string())
        .collect();
    for expected in ["/", "/signup", "/map"] {
        assert!(paths.iter().any(|p| p == expected), "missing {expected} in {paths:?}");
    }
}

/// Status line and headers (lowercased) plus body of one response.
struct Response {
    head: String,
    body: String,
}

impl Response {
    fn header(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}:");
        self.head.lines().find_map(|line| line.strip_prefix(prefix.as_str())).map(str::trim)
    }
}

async fn serve() -> std::net::SocketAddr {
    let options = LeptosOptions::builder().output_name("mapgate").build();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(options)).await.unwrap();
    });
    addr
}

async fn get(addr: std::net::SocketAddr, path: &str) -> Response {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8_lossy(&raw).into_owned();
    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
    Response { head: head.to_ascii_lowercase(), body: body.to_owned() }
}

#[tokio::test]
async fn anonymous_map_request_redirects_without_rendering_the_map() {
    let addr = serve().await;
    let response = get(addr, "/map").await;
    assert_eq!(response.header("location"), Some("/"), "head: {}", response.head);
    assert!(!response.body.contains("map-container"), "map rendered for anonymous request");
}

#[tokio::test]
async fn login_and_signup_render_without_redirect() {
    let addr = serve().await;

    let login = get(addr, "/").await;
    assert!(login.head.starts_with("http/1.1 200"), "head: {}", login.head);
    assert_eq!(login.header("location"), None);
    assert!(login.body.contains("login-email"), "login form missing");

    let signup = get(addr, "/signup").await;
    assert!(signup.head.starts_with("http/1.1 200"), "head: {}", signup.head);
    assert_eq!(signup.header("location"), None);
    assert!(signup.body.contains("signup-email"), "signup form missing");
}
