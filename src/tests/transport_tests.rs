//! Tests for the reqwest-backed transport against a loopback HTTP server.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::geocoding::error::GeocodeError;
    use crate::geocoding::transport::{HttpTransport, ReqwestTransport};
    use crate::tests::init_tracing;

    /// Serve exactly one connection with a canned HTTP response, returning
    /// the URL to hit.
    async fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let _ = socket.write_all(response.as_bytes()).await;
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_successful_response_body_is_returned() {
        init_tracing();
        let url = serve_once("200 OK", r#"{"status": "ZERO_RESULTS", "results": []}"#).await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let body = transport
            .get(&url, &[("address", "Berlin".to_string())])
            .await
            .unwrap();

        assert!(body.contains("ZERO_RESULTS"));
    }

    #[tokio::test]
    async fn test_server_error_is_a_transport_failure_not_a_parse_failure() {
        init_tracing();
        // A 5xx with an HTML body must never reach the JSON decoder
        let url = serve_once("500 Internal Server Error", "<html>upstream down</html>").await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let err = transport
            .get(&url, &[("address", "Berlin".to_string())])
            .await
            .unwrap_err();

        match err {
            GeocodeError::Transport(message) => assert!(message.contains("500")),
            other => panic!("expected Transport error, got {:?}", other),
        }
    }
}
