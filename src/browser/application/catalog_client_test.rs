#[cfg(test)]
mod tests {
    use super::super::catalog_client::*;
    use crate::browser::domain::models::{CatalogKind, MediaItem};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The blocking client must be built and dropped off the async runtime.
    async fn run_blocking<T, F>(uri: String, kind: CatalogKind, f: F) -> T
    where
        T: Send + 'static,
        F: FnOnce(&HttpCatalogClient) -> T + Send + 'static,
    {
        tokio::task::spawn_blocking(move || {
            let client = HttpCatalogClient::new(&uri, kind, Duration::from_secs(5)).unwrap();
            f(&client)
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_catalog_normalizes_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/movie-images"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":"a1","Title":"Matrix","TitleEnglish":"","image":"m.jpg"}]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let items = run_blocking(server.uri(), CatalogKind::Movies, |client| {
            client.fetch_catalog()
        })
        .await
        .unwrap();

        assert_eq!(items, vec![MediaItem::new("a1", "Matrix", "", "m.jpg")]);
    }

    #[tokio::test]
    async fn test_search_sends_encoded_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search-shows"))
            .and(query_param("q", "star & wars"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"_id":"s1","title":"Star Wars","titleEnglish":"SW","Image":"s.jpg"}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let items = run_blocking(server.uri(), CatalogKind::Shows, |client| {
            client.search("star & wars")
        })
        .await
        .unwrap();

        assert_eq!(items, vec![MediaItem::new("s1", "Star Wars", "SW", "s.jpg")]);
    }

    #[tokio::test]
    async fn test_search_error_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = run_blocking(server.uri(), CatalogKind::Movies, |client| {
            client.search("matrix")
        })
        .await;

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("Unexpected status"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/movie-images"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = run_blocking(server.uri(), CatalogKind::Movies, |client| {
            client.fetch_catalog()
        })
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let result = run_blocking(uri, CatalogKind::Movies, |client| client.search("matrix")).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_detail_url_trims_trailing_slash() {
        let client = HttpCatalogClient::new(
            "http://localhost:8080/",
            CatalogKind::Movies,
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(client.detail_url("abc"), "http://localhost:8080/api/movie/abc");
    }
}
