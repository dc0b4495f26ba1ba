use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use playlist_fetcher::PlaylistFetcher;

pub struct RecordedRequest {
    pub url: String,
    pub authorization: Option<String>,
}

/// A one-shot stand-in for the provider: answers the first request with a
/// canned status and body, and records what it was asked.
pub struct MockProvider {
    pub base_url: String,
    requests: Receiver<RecordedRequest>,
    handle: JoinHandle<()>,
}

impl MockProvider {
    pub fn serve_once(status: u16, body: &str) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let body = body.to_owned();
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let request = match server.recv_timeout(Duration::from_secs(10)) {
                Ok(Some(rq)) => rq,
                _ => return,
            };

            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_owned());
            tx.send(RecordedRequest {
                url: request.url().to_owned(),
                authorization,
            })
            .unwrap();

            let content_type =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .unwrap();
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(content_type);
            let _ = request.respond(response);
        });

        MockProvider {
            base_url: format!("http://{addr}/v1"),
            requests: rx,
            handle,
        }
    }

    pub fn fetcher(&self) -> PlaylistFetcher {
        fetcher_for(&self.base_url)
    }

    /// The request the provider saw. Blocks until the server thread is done.
    pub fn recorded(self) -> RecordedRequest {
        let request = self
            .requests
            .recv_timeout(Duration::from_secs(10))
            .expect("mock provider received no request");
        self.handle.join().unwrap();
        request
    }
}

pub fn fetcher_for(base_url: &str) -> PlaylistFetcher {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();
    PlaylistFetcher::builder()
        .base_url(base_url)
        .client(client)
        .build()
        .unwrap()
}

/// Base URL of a port nobody listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::mem::drop(listener);
    format!("http://{addr}/v1")
}
