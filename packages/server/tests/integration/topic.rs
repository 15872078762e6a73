use sea_orm::Value;
use serde_json::json;

use crate::common::{TestApp, mock_db, row, routes};

mod topics {
    use super::*;

    #[tokio::test]
    async fn lists_distinct_topics() {
        let app = TestApp::spawn(mock_db(vec![vec![
            row([("tag", Value::from("dp"))]),
            row([("tag", Value::from("graphs"))]),
        ]]))
        .await;

        let res = app.get(routes::TOPICS).await;

        assert_eq!(res.status, 200, "topics failed: {}", res.text);
        assert_eq!(res.body, json!(["dp", "graphs"]));
    }

    #[tokio::test]
    async fn repeated_requests_are_served_from_cache() {
        // One result set only: a second database round trip would fail.
        let app = TestApp::spawn(mock_db(vec![vec![row([("tag", Value::from("dp"))])]])).await;

        let first = app.get(routes::TOPICS).await;
        let second = app.get(routes::TOPICS).await;

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 200, "cache miss: {}", second.text);
        assert_eq!(first.body, second.body);
    }

    #[tokio::test]
    async fn supertopics_reuse_cached_topics() {
        let app = TestApp::spawn(mock_db(vec![vec![
            row([("tag", Value::from("dp"))]),
            row([("tag", Value::from("quantum wizardry"))]),
        ]]))
        .await;

        assert_eq!(app.get(routes::TOPICS).await.status, 200);
        let res = app.get(routes::TOPICS_SUPERTOPICS).await;

        assert_eq!(res.status, 200, "supertopics failed: {}", res.text);
        assert_eq!(
            res.body,
            json!([
                {"topic": "dp", "supertopic": "Algorithms"},
                {"topic": "quantum wizardry", "supertopic": "Uncategorized"},
            ])
        );
    }
}

mod distribution {
    use super::*;

    #[tokio::test]
    async fn counts_tasks_per_topic_and_rating() {
        let app = TestApp::spawn(mock_db(vec![vec![row([
            ("topic", Value::from("math")),
            ("rating", Value::from(1200i32)),
            ("number_of_tasks", Value::from(17i64)),
        ])]]))
        .await;

        let res = app.get(routes::TOPICS_BY_RATING).await;

        assert_eq!(res.status, 200, "distribution failed: {}", res.text);
        assert_eq!(
            res.body,
            json!([{"topic": "math", "rating": 1200, "number_of_tasks": 17}])
        );
    }

    #[tokio::test]
    async fn counts_problems_sharing_two_topics() {
        let app = TestApp::spawn(mock_db(vec![vec![
            row([
                ("topic1", Value::from("dp")),
                ("topic2", Value::from("dp")),
                ("number_of_tasks", Value::from(40i64)),
            ]),
            row([
                ("topic1", Value::from("dp")),
                ("topic2", Value::from("greedy")),
                ("number_of_tasks", Value::from(9i64)),
            ]),
        ]]))
        .await;

        let res = app.get(routes::TOPICS_CORRELATION).await;

        assert_eq!(res.status, 200, "correlation failed: {}", res.text);
        assert_eq!(res.body.as_array().unwrap().len(), 2);
        assert_eq!(res.body[1]["topic2"], "greedy");
        assert_eq!(res.body[1]["number_of_tasks"], 9);
    }
}

mod solvability {
    use super::*;

    fn trials(topic: &str, success: i64, failure: i64) -> crate::common::Row {
        row([
            ("topic", Value::from(topic)),
            ("success_trials", Value::from(success)),
            ("unsuccess_trials", Value::from(failure)),
        ])
    }

    #[tokio::test]
    async fn ratio_of_successful_trials() {
        let app = TestApp::spawn(mock_db(vec![vec![trials("dynamic programming", 80, 20)]])).await;

        let res = app.get(routes::TOPICS_SOLVABILITY).await;

        assert_eq!(res.status, 200, "solvability failed: {}", res.text);
        assert_eq!(
            res.body,
            json!([{"topic": "dynamic programming", "solvability": 0.8}])
        );
    }

    #[tokio::test]
    async fn topic_without_trials_is_null() {
        let app = TestApp::spawn(mock_db(vec![vec![
            trials("games", 0, 0),
            trials("strings", 3, 0),
        ]]))
        .await;

        let res = app.get(routes::TOPICS_SOLVABILITY).await;

        assert_eq!(res.status, 200);
        assert!(res.body[0]["solvability"].is_null());
        assert_eq!(res.body[1]["solvability"], 1.0);
    }
}
