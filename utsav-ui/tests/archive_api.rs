//! Read-side API integration tests
//!
//! Drives the real HTTP surface against a mock backend: year index, year
//! view assembly, degradation on fetch failure, and viewer model
//! resolution.

mod helpers;

use helpers::{sample_years, start_mock_backend, start_ui};
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let backend = start_mock_backend(sample_years()).await;
    let ui = start_ui(&backend.base_url, "").await;

    let body: Value = reqwest::get(format!("{}/health", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["module"], "utsav-ui");
}

#[tokio::test]
async fn test_home_feed_samples_declared_images_across_years() {
    let backend = start_mock_backend(sample_years()).await;
    let ui = start_ui(&backend.base_url, "").await;

    let body: Value = reqwest::get(format!("{}/api/home", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Only imgA.jpg is declared "image"; the undeclared video stays out
    let images = body["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["url"], "imgA.jpg");
    assert_eq!(images[0]["year"], 2024);

    assert_eq!(body["startYear"], 2023);
    assert_eq!(body["endYear"], 2024);
    assert_eq!(body["totalYears"], 2);
}

#[tokio::test]
async fn test_home_feed_degrades_when_backend_down() {
    // Port 9 is discard; nothing is listening there
    let ui = start_ui("http://127.0.0.1:9", "").await;

    let response = reqwest::get(format!("{}/api/home", ui)).await.unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["images"].as_array().unwrap().len(), 0);
    assert!(body.get("startYear").is_none());
}

#[tokio::test]
async fn test_year_index_with_computed_remaining() {
    let backend = start_mock_backend(sample_years()).await;
    let ui = start_ui(&backend.base_url, "").await;

    let body: Value = reqwest::get(format!("{}/api/years", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let years = body["years"].as_array().unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[0]["year"], 2024);
    // 1000 + 501 (numeric string coerced) - 600
    assert_eq!(years[0]["remaining"], 901.0);
    assert_eq!(years[0]["reportedRemaining"], 901.0);
    assert_eq!(years[1]["year"], 2023);
    assert_eq!(years[1]["remaining"], 0.0);
    assert!(years[1].get("reportedRemaining").is_none());
}

#[tokio::test]
async fn test_year_view_assembly() {
    let backend = start_mock_backend(sample_years()).await;
    let ui = start_ui(&backend.base_url, "").await;

    let view: Value = reqwest::get(format!("{}/api/archive/2024", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(view["year"], 2024);
    assert_eq!(view["loaded"], true);
    assert_eq!(view["summary"]["totalContribution"], 1501.0);
    assert_eq!(view["summary"]["totalExpenses"], 600.0);
    assert_eq!(view["summary"]["remaining"], 901.0);

    // gallery(2) + laddu(1) + event winners with images(1)
    let media = view["media"].as_array().unwrap();
    assert_eq!(media.len(), 4);
    assert_eq!(media[1]["kind"], "video");
    assert_eq!(media[2]["sourceSection"], "ladduWinner");
    assert_eq!(media[3]["url"], "imgD.jpg");

    assert_eq!(view["galleryPage"]["hasOverflow"], false);
    assert_eq!(view["record"]["collection"], 25000.0);
}

#[tokio::test]
async fn test_unknown_year_degrades_to_empty_view() {
    let backend = start_mock_backend(sample_years()).await;
    let ui = start_ui(&backend.base_url, "").await;

    let response = reqwest::get(format!("{}/api/archive/1999", ui)).await.unwrap();
    // Never an error page; an empty default view instead
    assert!(response.status().is_success());
    let view: Value = response.json().await.unwrap();
    assert_eq!(view["loaded"], false);
    assert_eq!(view["media"].as_array().unwrap().len(), 0);
    assert_eq!(view["summary"]["remaining"], 0.0);
}

#[tokio::test]
async fn test_current_reflects_last_viewed_year() {
    let backend = start_mock_backend(sample_years()).await;
    let ui = start_ui(&backend.base_url, "").await;

    // Nothing viewed yet
    let response = reqwest::get(format!("{}/api/archive/current", ui)).await.unwrap();
    assert_eq!(response.status(), 404);

    reqwest::get(format!("{}/api/archive/2023", ui)).await.unwrap();
    reqwest::get(format!("{}/api/archive/2024", ui)).await.unwrap();

    let view: Value = reqwest::get(format!("{}/api/archive/current", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["year"], 2024);
}

#[tokio::test]
async fn test_viewer_model_resolves_clicked_url() {
    let backend = start_mock_backend(sample_years()).await;
    let ui = start_ui(&backend.base_url, "").await;

    let model: Value = reqwest::get(format!("{}/api/archive/2024/viewer?open=imgC.jpg", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(model["open"], true);
    assert_eq!(model["initialIndex"], 2);

    // Unmatched URL falls back to index 0
    let model: Value = reqwest::get(format!("{}/api/archive/2024/viewer?open=nope.jpg", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(model["open"], true);
    assert_eq!(model["initialIndex"], 0);

    // Empty media sequence refuses to open
    let model: Value = reqwest::get(format!("{}/api/archive/2023/viewer?open=imgC.jpg", ui))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(model["open"], false);
    assert!(model.get("initialIndex").is_none());
    assert_eq!(model["items"].as_array().unwrap().len(), 0);
}
