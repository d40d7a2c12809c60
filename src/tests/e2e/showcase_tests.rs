use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn it_should_serve_every_display_mode() {
    let app = router(make_test_state());
    for uri in [
        "/showcase/products",
        "/showcase/static",
        "/showcase/formatted",
        "/showcase/metrics",
        "/showcase/editor",
        "/showcase/styled",
        "/showcase/columns",
        "/showcase/pivot",
    ] {
        let (status, json) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(json.is_object(), "{uri}");
    }
}

#[tokio::test]
async fn it_should_recompute_revenue_for_the_edited_row_only() {
    let state = make_test_state();
    let base = state.catalog.rows().to_vec();
    let app = router(state);
    let target = &base[2];
    let edits = serde_json::json!([
        { "id": target.id, "units": target.units + 50, "price": 1.0 }
    ]);

    let response = app
        .clone()
        .oneshot(
            Request::post("/showcase/editor")
                .header("content-type", "application/json")
                .body(Body::from(edits.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let table: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // product, units, price, revenue, in_stock
    for (index, product) in base.iter().enumerate() {
        let row = &table["rows"][index];
        let expected_units = if product.id == target.id {
            product.units + 50
        } else {
            product.units
        };
        assert_eq!(row[1]["value"], expected_units);
        assert_eq!(row[2]["value"], product.price);
        assert_eq!(row[3]["value"], f64::from(expected_units) * product.price);
    }
}

#[tokio::test]
async fn it_should_reject_unknown_columns_in_the_selection() {
    let app = router(make_test_state());

    let (status, json) = get_json(&app, "/showcase/columns?select=units,rating").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["columns"][0]["key"], "units");
    assert_eq!(json["columns"][1]["key"], "rating");

    let (status, _) = get_json(&app, "/showcase/columns?select=units,margin").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_summarise_categories_by_descending_revenue() {
    let app = router(make_test_state());
    let (status, json) = get_json(&app, "/showcase/pivot").await;
    assert_eq!(status, StatusCode::OK);

    let revenues: Vec<f64> = json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row[1]["value"].as_f64().unwrap())
        .collect();
    assert_eq!(revenues.len(), 3);
    assert!(revenues.windows(2).all(|w| w[0] >= w[1]));
}
