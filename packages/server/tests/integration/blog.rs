use sea_orm::Value;
use serde_json::json;

use crate::common::{TestApp, mock_db, row, routes};

#[tokio::test]
async fn blog_topics_carry_supertopic() {
    let app = TestApp::spawn(mock_db(vec![vec![
        row([
            ("topic", Value::from("graphs")),
            ("avg_rating", Value::from(42.5f64)),
            ("avg_number_of_comments", Value::from(13.0f64)),
            ("number_of_blogs", Value::from(8i64)),
        ]),
        row([
            ("topic", Value::from("announcement")),
            ("avg_rating", Value::from(-3.0f64)),
            ("avg_number_of_comments", Value::from(0.5f64)),
            ("number_of_blogs", Value::from(2i64)),
        ]),
    ]]))
    .await;

    let res = app.get(routes::BLOGS_TOPICS).await;

    assert_eq!(res.status, 200, "blogs failed: {}", res.text);
    assert_eq!(
        res.body[0],
        json!({
            "topic": "graphs",
            "avg_rating": 42.5,
            "avg_number_of_comments": 13.0,
            "number_of_blogs": 8,
            "supertopic": "Graphs",
        })
    );
    assert!(res.body[1]["supertopic"].is_string());
}

#[tokio::test]
async fn empty_result_is_empty_list() {
    let app = TestApp::spawn(mock_db(vec![vec![]])).await;

    let res = app.get(routes::BLOGS_TOPICS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, json!([]));
}
