use crate::config::FunctionSpec;
use crate::constants::EXECUTION_ID_HEADER;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Runs one invocation of a registered function
///
/// Method, path suffix, headers and body of the request are ignored. Each call
/// records a single structured log entry and answers `200` with the function's
/// fixed body as `text/html`.
///
/// # Arguments
/// * `function` - The function bound to the matched route
#[axum::debug_handler]
pub async fn invoke(State(function): State<Arc<FunctionSpec>>) -> impl IntoResponse {
    let execution_id = Uuid::new_v4().to_string();

    info!(
        structured = true,
        function = %function.name,
        execution_id = %execution_id,
        "{}",
        function.log_message
    );

    (
        [(EXECUTION_ID_HEADER, execution_id)],
        Html(function.response_body.clone()),
    )
}

#[cfg(test)]
mod tests {
    use crate::api::routes::app;
    use crate::config::FunctionsConfig;
    use crate::constants::EXECUTION_ID_HEADER;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl CapturedLogs {
        fn records(&self) -> Vec<serde_json::Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    fn capture_logs_at(level: Level) -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_writer(logs.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        capture_logs_at(Level::INFO)
    }

    async fn send(method: &str, uri: &str, body: &'static str) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(Body::from(body))
            .unwrap();
        app(&FunctionsConfig::default()).oneshot(request).await.unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn hello_world_returns_greeting() {
        let response = send("GET", "/helloWorld", "").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert!(response.headers().contains_key(EXECUTION_ID_HEADER));
        assert_eq!(body_text(response).await, "Hello from Firebase!");
    }

    #[tokio::test]
    async fn any_method_path_and_body_get_the_same_answer() {
        for (method, uri) in [
            ("POST", "/myFunctionName"),
            ("GET", "/helloWorld/"),
            ("POST", "/myFunctionName/"),
            ("PUT", "/myFunctionName/nested/path?x=1"),
            ("DELETE", "/helloWorld/anything"),
            ("PATCH", "/helloWorld"),
        ] {
            let response = send(method, uri, "{\"ignored\": true}").await;

            assert_eq!(response.status(), StatusCode::OK, "{method} {uri}");
            assert_eq!(body_text(response).await, "Hello from Firebase!");
        }
    }

    #[tokio::test]
    async fn each_invocation_logs_exactly_one_structured_record() {
        let (logs, _guard) = capture_logs();

        send("GET", "/helloWorld", "").await;
        send("POST", "/myFunctionName", "payload").await;

        let records = logs.records();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["fields"]["message"], "Hello logs!");
        assert_eq!(records[0]["fields"]["structured"], true);
        assert_eq!(records[0]["fields"]["function"], "helloWorld");
        assert_eq!(records[0]["level"], "INFO");

        assert_eq!(
            records[1]["fields"]["message"],
            "Function executed successfully!"
        );
        assert_eq!(records[1]["fields"]["structured"], true);
        assert_eq!(records[1]["fields"]["function"], "myFunctionName");
    }

    #[tokio::test]
    async fn logged_execution_id_matches_response_header() {
        let (logs, _guard) = capture_logs();

        let response = send("GET", "/helloWorld", "").await;
        let header_id = response.headers()[EXECUTION_ID_HEADER]
            .to_str()
            .unwrap()
            .to_string();

        let records = logs.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["fields"]["execution_id"], header_id.as_str());
    }

    #[tokio::test]
    async fn debug_logging_still_records_one_entry_per_invocation() {
        let (logs, _guard) = capture_logs_at(Level::DEBUG);

        send("GET", "/helloWorld", "").await;

        let records = logs.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["fields"]["message"], "Hello logs!");
    }
}
