//! Startup ordering: configuration, API check, then the gateway

use std::collections::HashMap;
use std::time::Duration;

use stars_bot::core::config::{API_TOKEN_ENV, API_URL_ENV, BOT_TOKEN_ENV};
use stars_bot::{BotError, Cli, Startup};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::timeout;

fn env_from(pairs: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&str, String> = pairs.into_iter().collect();
    move |key: &str| map.get(key).cloned()
}

fn local_http() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    (listener, url)
}

/// True when nobody connects to `listener` within a short window
async fn stays_idle(listener: &TcpListener) -> bool {
    timeout(Duration::from_millis(200), listener.accept())
        .await
        .is_err()
}

/// Answer one request with `status_line` and an empty JSON body
async fn answer_once(listener: TcpListener, status_line: &'static str) {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut buf = [0u8; 1024];
    let mut request = Vec::new();
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}"
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.ok();
}

#[tokio::test]
async fn test_missing_token_stops_before_any_connection() {
    let (listener, url) = listener().await;
    let env = env_from(vec![
        (API_URL_ENV, url),
        (API_TOKEN_ENV, "secret".to_string()),
    ]);

    let err = match Startup::load(Cli::default(), env) {
        Ok(_) => panic!("startup must not continue without a discord token"),
        Err(e) => e,
    };

    assert!(matches!(err, BotError::ConfigMissing(_)));
    assert_eq!(err.to_string(), "discord token was not found");
    assert!(stays_idle(&listener).await);
}

#[tokio::test]
async fn test_rejected_api_token_stops_startup() {
    let (listener, url) = listener().await;
    let server = tokio::spawn(answer_once(listener, "403 Forbidden"));
    let env = env_from(vec![
        (BOT_TOKEN_ENV, "bot".to_string()),
        (API_TOKEN_ENV, "wrong".to_string()),
        (API_URL_ENV, url),
    ]);

    let startup = Startup::load(Cli::default(), env)
        .unwrap()
        .with_http_client(local_http());
    let err = match startup.prepare().await {
        Ok(_) => panic!("a rejected api token must stop startup"),
        Err(e) => e,
    };

    assert!(matches!(err, BotError::ApiCheck { status: 403 }));
    server.await.unwrap();
}

#[tokio::test]
async fn test_accepted_api_token_registers_info() {
    let (listener, url) = listener().await;
    let server = tokio::spawn(answer_once(listener, "200 OK"));
    let env = env_from(vec![
        (BOT_TOKEN_ENV, "bot".to_string()),
        (API_TOKEN_ENV, "secret".to_string()),
        (API_URL_ENV, url),
    ]);

    let bot = Startup::load(Cli::default(), env)
        .unwrap()
        .with_http_client(local_http())
        .prepare()
        .await
        .unwrap();

    assert!(bot.dispatcher().registry().contains("info"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_skipped_check_makes_no_request() {
    let (listener, url) = listener().await;
    let cli = Cli {
        skip_api_check: true,
        ..Cli::default()
    };
    let env = env_from(vec![
        (BOT_TOKEN_ENV, "bot".to_string()),
        (API_TOKEN_ENV, "secret".to_string()),
        (API_URL_ENV, url),
    ]);

    let bot = Startup::load(cli, env)
        .unwrap()
        .with_http_client(local_http())
        .prepare()
        .await
        .unwrap();

    assert!(bot.dispatcher().registry().contains("info"));
    assert!(stays_idle(&listener).await);
}

#[tokio::test]
async fn test_lookup_disabled_needs_no_api() {
    let (listener, url) = listener().await;
    let cli = Cli {
        disable_lookup: true,
        ..Cli::default()
    };
    let env = env_from(vec![(BOT_TOKEN_ENV, "bot".to_string()), (API_URL_ENV, url)]);

    let startup = Startup::load(cli, env).unwrap();
    assert!(!startup.config().lookup_enabled);

    let bot = startup.prepare().await.unwrap();
    assert!(!bot.dispatcher().registry().contains("info"));
    assert!(bot.dispatcher().registry().contains("help"));
    assert!(stays_idle(&listener).await);
}
