use sprig::dispatch::dispatch;
use sprig::registry::{HandlerError, ParamSpec, Registry, Route};
use sprig::request::parse_request;
use sprig::response::Status;
use tempfile::TempDir;

fn greet(args: &[String]) -> Result<String, HandlerError> {
    let name = args.first().map(String::as_str).unwrap_or_default();
    Ok(format!("Hola, {name}"))
}

fn failing(_args: &[String]) -> Result<String, HandlerError> {
    Err("backend unavailable".into())
}

fn panicking(_args: &[String]) -> Result<String, HandlerError> {
    panic!("handler blew up");
}

fn test_registry() -> Registry {
    Registry::from_routes(vec![
        Route::new(
            "/greet",
            "greet",
            greet,
            vec![ParamSpec::new("name", "World")],
        ),
        Route::new("/fail", "fail", failing, vec![]),
        Route::new("/panic", "panic", panicking, vec![]),
    ])
    .unwrap()
}

#[cfg(test)]
mod handler_tests {
    use super::*;

    #[tokio::test]
    async fn test_matched_handler_answers_as_plain_text() {
        let dir = TempDir::new().unwrap();
        let request = parse_request(b"GET /greet?name=Ana HTTP/1.1\r\n\r\n");

        let response = dispatch(&request, &test_registry(), dir.path()).await;
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "text/plain");
        assert_eq!(response.body, "Hola, Ana");
    }

    #[tokio::test]
    async fn test_missing_parameter_uses_the_declared_default() {
        let dir = TempDir::new().unwrap();
        let request = parse_request(b"GET /greet HTTP/1.1\r\n\r\n");

        let response = dispatch(&request, &test_registry(), dir.path()).await;
        assert_eq!(response.body, "Hola, World");
    }

    #[tokio::test]
    async fn test_pure_handlers_are_idempotent() {
        let dir = TempDir::new().unwrap();
        let request = parse_request(b"GET /greet?name=Ana HTTP/1.1\r\n\r\n");
        let registry = test_registry();

        let first = dispatch(&request, &registry, dir.path()).await;
        let second = dispatch(&request, &registry, dir.path()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_handler_error_becomes_a_500() {
        let dir = TempDir::new().unwrap();
        let request = parse_request(b"GET /fail HTTP/1.1\r\n\r\n");

        let response = dispatch(&request, &test_registry(), dir.path()).await;
        assert_eq!(response.status, Status::InternalServerError);
        assert_eq!(response.body, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_a_500() {
        let dir = TempDir::new().unwrap();
        let request = parse_request(b"GET /panic HTTP/1.1\r\n\r\n");

        let response = dispatch(&request, &test_registry(), dir.path()).await;
        assert_eq!(response.status, Status::InternalServerError);
        assert_eq!(response.body, "Internal Server Error");
    }
}

#[cfg(test)]
mod fallback_tests {
    use super::*;

    #[tokio::test]
    async fn test_unmatched_path_falls_through_to_static_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "remember the milk").unwrap();
        let request = parse_request(b"GET /notes.txt HTTP/1.1\r\n\r\n");

        let response = dispatch(&request, &test_registry(), dir.path()).await;
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "application/octet-stream");
        assert_eq!(response.body, "remember the milk");
    }

    #[tokio::test]
    async fn test_unmatched_path_with_no_file_is_a_404() {
        let dir = TempDir::new().unwrap();
        let request = parse_request(b"GET /missing.html HTTP/1.1\r\n\r\n");

        let response = dispatch(&request, &test_registry(), dir.path()).await;
        assert_eq!(response.status, Status::NotFound);
        assert_eq!(response.body, "File not found");
    }

    #[tokio::test]
    async fn test_query_on_an_unmatched_path_stays_out_of_the_file_lookup() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("page.html"), "<p>hi</p>").unwrap();
        let request = parse_request(b"GET /page.html?ignored=1 HTTP/1.1\r\n\r\n");

        let response = dispatch(&request, &test_registry(), dir.path()).await;
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.body, "<p>hi</p>");
    }
}
