// Integration tests for the backend client's search and stats routes.
use mockito::{Matcher, Server};
use serde_json::json;

use examcal::client::BackendClient;

#[tokio::test]
async fn search_forwards_all_filters() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/exams/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "prelims".into()),
            Matcher::UrlEncoded("conducting_body".into(), "UPSC".into()),
            Matcher::UrlEncoded("days".into(), "30".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": 5,
                "name": "Civil Services Prelims",
                "date": "2024-06-16",
                "body": "UPSC",
                "link": null,
                "app_start": "2024-02-14",
                "app_end": "2024-03-05"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let client = BackendClient::new(&server.url());
    let exams = client
        .search_exams(Some("prelims"), Some("UPSC"), Some(30))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(exams.len(), 1);
    assert_eq!(exams[0].name, "Civil Services Prelims");
    // The search route omits formatted fields; they default to None.
    assert_eq!(exams[0].exam_date_formatted, None);
}

#[tokio::test]
async fn stats_are_decoded() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "total_exams": 120,
                "upcoming_exams": 34,
                "this_month_exams": 6,
                "body_stats": {"UPSC": 4, "SSC": 11}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = BackendClient::new(&server.url());
    let stats = client.stats().await.unwrap();

    mock.assert();
    assert_eq!(stats.total_exams, 120);
    assert_eq!(stats.body_stats.get("SSC"), Some(&11));
}

#[tokio::test]
async fn backend_error_detail_is_surfaced() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/api/stats")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "backend down for maintenance"}"#)
        .create_async()
        .await;

    let client = BackendClient::new(&server.url());
    let err = client.stats().await.unwrap_err();

    assert!(
        err.to_string().contains("backend down for maintenance"),
        "Error should carry the backend detail, got: {}",
        err
    );
}

#[tokio::test]
async fn trailing_slash_in_server_url_is_tolerated() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "total_exams": 0,
                "upcoming_exams": 0,
                "this_month_exams": 0,
                "body_stats": {}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = BackendClient::new(&format!("{}/", server.url()));
    let stats = client.stats().await.unwrap();

    mock.assert();
    assert_eq!(stats.total_exams, 0);
}
