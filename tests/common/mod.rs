use std::collections::HashMap;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the fake upstream saw.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

async fn bind_upstream() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!(
        "http://{}/v2/cadence_imports.json",
        listener.local_addr().unwrap()
    );

    (listener, url)
}

/// Answers exactly one HTTP/1.1 request with `status` and a JSON `body`,
/// then hands back what it received.
pub async fn spawn_upstream(
    status: u16,
    body: &'static str,
) -> (String, JoinHandle<CapturedRequest>) {
    spawn_upstream_with(status, "application/json", body.as_bytes()).await
}

/// Like `spawn_upstream`, with a raw body and content type.
pub async fn spawn_upstream_with(
    status: u16,
    content_type: &'static str,
    body: &'static [u8],
) -> (String, JoinHandle<CapturedRequest>) {
    let (listener, url) = bind_upstream().await;

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let read = socket.read(&mut chunk).await.unwrap();
            assert!(read > 0, "connection closed before headers were complete");
            buffer.extend_from_slice(&chunk[..read]);

            if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
                break position + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
        let mut lines = head.split("\r\n");
        let mut request_line = lines.next().unwrap().split(' ');
        let method = request_line.next().unwrap().to_owned();
        let path = request_line.next().unwrap().to_owned();

        let headers: HashMap<String, String> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_owned()))
            .collect();

        let content_length: usize = headers
            .get("content-length")
            .map(|value| value.parse().unwrap())
            .unwrap_or(0);

        while buffer.len() < header_end + content_length {
            let read = socket.read(&mut chunk).await.unwrap();
            assert!(read > 0, "connection closed before body was complete");
            buffer.extend_from_slice(&chunk[..read]);
        }

        let head = format!(
            "HTTP/1.1 {} Upstream\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            content_type,
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(body).await.unwrap();
        socket.shutdown().await.unwrap();

        CapturedRequest {
            method,
            path,
            headers,
            body: buffer[header_end..header_end + content_length].to_vec(),
        }
    });

    (url, handle)
}

/// Accepts connections and never answers them.
pub async fn spawn_stalled_upstream() -> (String, JoinHandle<()>) {
    let (listener, url) = bind_upstream().await;

    let handle = tokio::spawn(async move {
        let mut held = Vec::new();

        loop {
            let (socket, _) = listener.accept().await.unwrap();
            held.push(socket);
        }
    });

    (url, handle)
}
