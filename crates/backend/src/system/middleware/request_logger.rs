use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs one line per request: method, path, status, latency and body size.
///
/// The body is buffered to learn its real size, then handed on unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                method = %method,
                path = uri.path(),
                status = parts.status.as_u16(),
                latency_ms = start.elapsed().as_millis() as u64,
                "response body could not be buffered: {}",
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let latency_ms = start.elapsed().as_millis() as u64;
    let size = format_size(bytes.len());
    if parts.status.is_success() {
        tracing::info!(
            method = %method,
            path = uri.path(),
            query = uri.query().unwrap_or(""),
            status = parts.status.as_u16(),
            latency_ms,
            size = %size,
            "request"
        );
    } else {
        tracing::warn!(
            method = %method,
            path = uri.path(),
            query = uri.query().unwrap_or(""),
            status = parts.status.as_u16(),
            latency_ms,
            size = %size,
            "request"
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Human readable body size: `512 B`, `1.5 KB`, `2.0 MB`.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let n = bytes as f64;
    if n < KB {
        format!("{} B", bytes)
    } else if n < MB {
        format!("{:.1} KB", n / KB)
    } else {
        format!("{:.1} MB", n / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.0 MB");
    }
}
