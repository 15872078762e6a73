use sea_orm::Value;
use serde_json::json;

use crate::common::{Row, TestApp, mock_db, routes};

fn user(rating: i32, metric: (&'static str, Value)) -> Row {
    Row::from([("rating", Value::from(rating)), metric])
}

mod experience {
    use super::*;

    #[tokio::test]
    async fn buckets_ratings_by_hundreds() {
        let app = TestApp::spawn(mock_db(vec![vec![
            user(1534, ("years", Value::from(3i32))),
            user(2100, ("years", Value::from(6i32))),
        ]]))
        .await;

        let res = app.get(routes::RATING_BY_EXPERIENCE).await;

        assert_eq!(res.status, 200, "experience failed: {}", res.text);
        assert_eq!(
            res.body["data"][0],
            json!({
                "rating": 1534,
                "rating_lower_bound": 1500,
                "rating_upper_bound": 1599,
                "time_registration_years": 3,
            })
        );
        assert_eq!(res.body["data"][1]["rating_lower_bound"], 2100);
        assert_eq!(res.body["data"][1]["rating_upper_bound"], 2199);
        // Two points always lie on a line.
        let r = res.body["correlation"].as_f64().unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn zero_variance_correlation_is_null() {
        let app = TestApp::spawn(mock_db(vec![vec![
            user(1200, ("years", Value::from(2i32))),
            user(1900, ("years", Value::from(2i32))),
            user(2400, ("years", Value::from(2i32))),
        ]]))
        .await;

        let res = app.get(routes::RATING_BY_EXPERIENCE).await;

        assert_eq!(res.status, 200);
        assert!(res.body["correlation"].is_null());
        assert_eq!(res.body["data"].as_array().unwrap().len(), 3);
    }
}

mod solutions {
    use super::*;

    #[tokio::test]
    async fn amount_correlates_with_rating() {
        let app = TestApp::spawn(mock_db(vec![vec![
            user(800, ("solved", Value::from(10i64))),
            user(1400, ("solved", Value::from(120i64))),
            user(2000, ("solved", Value::from(90i64))),
        ]]))
        .await;

        let res = app.get(routes::RATING_BY_SOLUTIONS_AMOUNT).await;

        assert_eq!(res.status, 200, "solutions amount failed: {}", res.text);
        assert_eq!(res.body["data"][1]["number_of_solved_problems"], 120);
        let r = res.body["correlation"].as_f64().unwrap();
        assert!((-1.0..=1.0).contains(&r));
        assert!(r > 0.0);
    }

    #[tokio::test]
    async fn average_problem_rating() {
        let app = TestApp::spawn(mock_db(vec![vec![user(
            1650,
            ("avg_problem_rating", Value::from(1387.5f64)),
        )]]))
        .await;

        let res = app.get(routes::RATING_BY_SOLUTIONS_RATING).await;

        assert_eq!(res.status, 200, "solutions rating failed: {}", res.text);
        assert_eq!(res.body["data"][0]["avg_rating_of_solved_problems"], 1387.5);
        // A single user has no correlation.
        assert!(res.body["correlation"].is_null());
    }

    #[tokio::test]
    async fn average_solvability_may_be_null() {
        let app = TestApp::spawn(mock_db(vec![vec![
            user(1000, ("avg_solvability", Value::from(0.75f64))),
            user(1500, ("avg_solvability", Value::Double(None))),
        ]]))
        .await;

        let res = app.get(routes::RATING_BY_SOLUTIONS_SOLVABILITY).await;

        assert_eq!(res.status, 200, "solutions solvability failed: {}", res.text);
        assert_eq!(res.body["data"][0]["avg_solvability_of_solved_problems"], 0.75);
        assert!(res.body["data"][1]["avg_solvability_of_solved_problems"].is_null());
        assert!(res.body["correlation"].is_null());
    }
}
