use sea_orm::Value;

use crate::common::{ALLOWED_ORIGIN, TestApp, flaky_db, row, routes};

mod health {
    use super::*;

    #[tokio::test]
    async fn home_reports_service_is_up() {
        let app = TestApp::spawn_without_data().await;

        let res = app.get(routes::HOME).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body["message"],
            "Competitive programming statistics API"
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let app = TestApp::spawn_without_data().await;

        let res = app.get("/no_such_statistic").await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod docs {
    use super::*;

    #[tokio::test]
    async fn openapi_document_lists_every_endpoint() {
        let app = TestApp::spawn_without_data().await;

        let res = app.get(routes::OPENAPI).await;

        assert_eq!(res.status, 200, "openapi failed: {}", res.text);
        let paths = res.body["paths"]
            .as_object()
            .expect("document should have paths");
        for path in [
            routes::HOME,
            routes::TOPICS,
            routes::TOPICS_BY_RATING,
            routes::TOPICS_CORRELATION,
            routes::TOPICS_SOLVABILITY,
            routes::TOPICS_SUPERTOPICS,
            routes::RATING_BY_EXPERIENCE,
            routes::RATING_BY_SOLUTIONS_AMOUNT,
            routes::RATING_BY_SOLUTIONS_RATING,
            routes::RATING_BY_SOLUTIONS_SOLVABILITY,
            routes::BLOGS_TOPICS,
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }
}

mod errors {
    use super::*;

    #[tokio::test]
    async fn database_failure_returns_generic_internal_error() {
        let app = TestApp::spawn_without_data().await;

        let res = app.get(routes::TOPICS_CORRELATION).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "INTERNAL_ERROR");
        assert_eq!(res.body["message"], "An unexpected error occurred");
    }

    #[tokio::test]
    async fn failure_is_not_cached() {
        let app = TestApp::spawn(flaky_db(vec![row([("tag", Value::from("greedy"))])])).await;

        let first = app.get(routes::TOPICS).await;
        let second = app.get(routes::TOPICS).await;

        assert_eq!(first.status, 500);
        assert_eq!(second.status, 200, "retry failed: {}", second.text);
        assert_eq!(second.body, serde_json::json!(["greedy"]));
    }
}

mod cors {
    use super::*;

    #[tokio::test]
    async fn allowed_origin_is_echoed_with_credentials() {
        let app = TestApp::spawn_without_data().await;

        let res = app.get_with_origin(routes::HOME, ALLOWED_ORIGIN).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.header("access-control-allow-origin"),
            Some(ALLOWED_ORIGIN)
        );
        assert_eq!(res.header("access-control-allow-credentials"), Some("true"));
    }

    #[tokio::test]
    async fn other_origins_get_no_cors_headers() {
        let app = TestApp::spawn_without_data().await;

        let res = app
            .get_with_origin(routes::HOME, "https://evil.example.com")
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.header("access-control-allow-origin"), None);
    }
}
