use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use taxcalc_core::TaxSchedule;
use taxcalc_web::routes::create_router;
use taxcalc_web::state::AppState;
use tower::ServiceExt;

fn test_app() -> Router {
    create_router(AppState::new(TaxSchedule::simplified()))
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_calculate(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_index_renders_empty_form() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Income Tax Calculator"));
    assert!(html.contains(r#"name="income1""#));
    assert!(html.contains(r#"name="income2""#));
    assert!(!html.contains(r#"<div class="results">"#));
}

#[tokio::test]
async fn post_calculate_renders_all_four_figures() {
    let response = test_app()
        .oneshot(post_calculate("income1=60000&income2=40000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Total Income: $100000.00"));
    assert!(html.contains("Tax Amount: $16500.00"));
    assert!(html.contains("Tax Rate: 24%"));
    assert!(html.contains("Final Income (After Tax): $83500.00"));
}

#[tokio::test]
async fn post_calculate_at_band_boundary_uses_closing_band() {
    let response = test_app()
        .oneshot(post_calculate("income1=40000&income2=0"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Tax Amount: $3000.00"));
    assert!(html.contains("Tax Rate: 10%"));
}

#[tokio::test]
async fn post_calculate_with_empty_body_reports_both_fields_required() {
    let response = test_app().oneshot(post_calculate("")).await.unwrap();

    // Validation failures re-render the form rather than erroring.
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Income Source 1 is required"));
    assert!(html.contains("Income Source 2 is required"));
    assert!(!html.contains(r#"<div class="results">"#));
}

#[tokio::test]
async fn post_calculate_with_invalid_value_reports_only_that_field() {
    let response = test_app()
        .oneshot(post_calculate("income1=abc&income2=40000"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Income Source 1 must be a valid positive number"));
    assert!(!html.contains("Income Source 1 is required"));
    assert!(!html.contains("Income Source 2 is required"));
    assert!(!html.contains("Income Source 2 must be a valid positive number"));
}

#[tokio::test]
async fn post_calculate_with_negative_value_reports_invalid() {
    let response = test_app()
        .oneshot(post_calculate("income1=-100&income2=40000"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Income Source 1 must be a valid positive number"));
}

#[tokio::test]
async fn post_calculate_echoes_submitted_values_escaped() {
    let response = test_app()
        .oneshot(post_calculate("income1=%3Cscript%3E&income2=40000"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains(r#"value="40000""#));
}

#[tokio::test]
async fn post_calculate_accepts_comma_separated_amounts() {
    let response = test_app()
        .oneshot(post_calculate("income1=1%2C500&income2=23%2C500"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Total Income: $25000.00"));
    assert!(html.contains("Tax Amount: $1500.00"));
    assert!(html.contains("Tax Rate: 10%"));
}
