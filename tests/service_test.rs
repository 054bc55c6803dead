//! End-to-end trend service tests against a mock trends API

mod common;

use std::sync::Arc;

use serde_json::json;
use trendscope::analytics::random::FixedRandom;
use trendscope::models::{DataSource, Sentiment};
use trendscope::trends::{sample_trends, TrendFetcher, TrendService};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api_config, raw_item, trends_body};

async fn service_for(mock_server: &MockServer, limit: usize) -> TrendService {
    let config = api_config(&mock_server.uri(), "/v1/trends");
    let fetcher = TrendFetcher::from_config(&config).unwrap();
    TrendService::new(Arc::new(fetcher), limit)
}

#[tokio::test]
async fn test_live_trends_are_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/trends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trends_body(vec![
            raw_item("SmartGadgets", 1_200_000, 5_400, 242.0),
            raw_item("#FitnessGoals", 999, 12, 45.5),
        ])))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server, 10).await;
    let outcome = service.fetch_trends_with_outcome(&mut FixedRandom(0.0)).await;

    assert_eq!(outcome.source, DataSource::Live);
    assert!(outcome.failure.is_none());
    assert_eq!(outcome.records.len(), 2);

    let first = &outcome.records[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.hashtag, "#SmartGadgets");
    assert_eq!(first.views, "1.2M");
    assert_eq!(first.videos, "5.4K");
    assert_eq!(first.growth, "+242%");
    assert!(first.is_new);
    assert_eq!(first.sentiment, Sentiment::Positive);

    let second = &outcome.records[1];
    assert_eq!(second.id, 2);
    assert_eq!(second.hashtag, "#FitnessGoals");
    assert_eq!(second.views, "999");
    assert!(!second.is_new);
}

#[tokio::test]
async fn test_alias_fields_and_alternate_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/trends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"hashtagName": "TravelHacks", "views": "2500", "posts": 40, "growth": 12}]
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server, 10).await;
    let records = service.fetch_live(&mut FixedRandom(0.0)).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hashtag, "#TravelHacks");
    assert_eq!(records[0].views, "2.5K");
    assert_eq!(records[0].videos, "40");
    assert_eq!(records[0].growth, "+12%");
}

#[tokio::test]
async fn test_duplicates_removed_before_truncation() {
    let mock_server = MockServer::start().await;

    let mut items: Vec<_> = (0..15)
        .map(|i| raw_item(&format!("Tag{i}"), 100, 1, 1.0))
        .collect();
    items.insert(1, raw_item("Tag0", 999_999, 1, 1.0));

    Mock::given(method("GET"))
        .and(path("/v1/trends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trends_body(items)))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server, 10).await;
    let records = service.fetch_live(&mut FixedRandom(0.5)).await.unwrap();

    assert_eq!(records.len(), 10);
    assert_eq!(records[0].views, "100");
    assert_eq!(records[1].hashtag, "#Tag1");
    assert_eq!(records[9].hashtag, "#Tag9");
    assert!(records.iter().enumerate().all(|(i, r)| r.id == i as u32 + 1));
}

#[tokio::test]
async fn test_server_error_falls_back_to_sample() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/trends"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server, 10).await;
    let outcome = service.fetch_trends_with_outcome(&mut FixedRandom(0.0)).await;

    assert_eq!(outcome.source, DataSource::Sample);
    assert!(outcome.is_fallback());
    assert!(outcome.failure.is_some());
    assert_eq!(outcome.records, sample_trends());
}

#[tokio::test]
async fn test_unreachable_api_never_returns_empty() {
    let fetcher = TrendFetcher::with_endpoint("http://127.0.0.1:1/v1/trends").unwrap();
    let service = TrendService::new(Arc::new(fetcher), 10);

    let trends = service.fetch_trends().await;
    assert_eq!(trends.len(), 10);
    assert_eq!(trends[0].hashtag, "#SmartGadgets");
}

#[tokio::test]
async fn test_body_without_collection_is_empty_live_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/trends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200})))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server, 10).await;
    let outcome = service.fetch_trends_with_outcome(&mut FixedRandom(0.0)).await;

    assert_eq!(outcome.source, DataSource::Live);
    assert!(outcome.records.is_empty());
}
