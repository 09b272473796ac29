mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{id_of, TestApp};

async fn setup(app: &TestApp) -> Result<(String, Uuid, Uuid)> {
    let (token, mechanic_id) = app.signup("Luis", "luis@taller.com").await?;
    let client_id = app.create_client(&token, "María López").await?;
    let vehicle_id = app.create_vehicle(&token, client_id, "1234ABC").await?;
    Ok((token, mechanic_id, vehicle_id))
}

#[tokio::test]
async fn test_create_repair_defaults() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, mechanic_id, vehicle_id) = setup(&app).await?;

    let response = app
        .post(
            &format!("/vehicles/{}/repairs/", vehicle_id),
            &token,
            json!({ "description": "Cambio de aceite" }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "pending");
    assert_eq!(response.body["mechanic_id"], mechanic_id.to_string());
    assert_eq!(response.body["vehicle_id"], vehicle_id.to_string());
    assert!(response.body["finish_date"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_create_repair_with_missing_references() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _, vehicle_id) = setup(&app).await?;

    let response = app
        .post(
            &format!("/vehicles/{}/repairs/", Uuid::new_v4()),
            &token,
            json!({ "description": "Cambio de aceite" }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .post(
            &format!("/vehicles/{}/repairs/", vehicle_id),
            &token,
            json!({ "description": "Cambio de aceite", "mechanic_id": Uuid::new_v4() }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_finish_before_start_is_rejected() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _, vehicle_id) = setup(&app).await?;

    let response = app
        .post(
            &format!("/vehicles/{}/repairs/", vehicle_id),
            &token,
            json!({
                "description": "Frenos",
                "start_date": "2024-05-10T09:00:00Z",
                "finish_date": "2024-05-09T09:00:00Z",
            }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn test_update_status_any_order() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _, vehicle_id) = setup(&app).await?;

    let response = app
        .post(
            &format!("/vehicles/{}/repairs/", vehicle_id),
            &token,
            json!({ "description": "Embrague", "status": "ready" }),
        )
        .await?;
    let repair_id = id_of(&response.body)?;

    let response = app
        .patch(&format!("/repairs/{}", repair_id), &token, json!({ "status": "in_repair" }))
        .await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "in_repair");
    assert_eq!(response.body["description"], "Embrague");

    let response = app
        .patch(&format!("/repairs/{}", repair_id), &token, json!({ "status": "broken" }))
        .await?;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn test_finish_date_can_be_cleared() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _, vehicle_id) = setup(&app).await?;

    let response = app
        .post(
            &format!("/vehicles/{}/repairs/", vehicle_id),
            &token,
            json!({
                "description": "Embrague",
                "status": "delivered",
                "start_date": "2024-05-01T09:00:00Z",
                "finish_date": "2024-05-03T09:00:00Z",
            }),
        )
        .await?;
    let repair_id = id_of(&response.body)?;
    assert!(!response.body["finish_date"].is_null());

    // Sin `finish_date` en el body, se conserva
    let response = app
        .patch(&format!("/repairs/{}", repair_id), &token, json!({ "status": "in_repair" }))
        .await?;
    assert!(!response.body["finish_date"].is_null());

    let response = app
        .patch(&format!("/repairs/{}", repair_id), &token, json!({ "finish_date": null }))
        .await?;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["finish_date"].is_null());

    let response = app.get(&format!("/repairs/{}", repair_id), &token).await?;
    assert!(response.body["finish_date"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_blank_repair_filters_return_nothing() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _, vehicle_id) = setup(&app).await?;
    app.post(
        &format!("/vehicles/{}/repairs/", vehicle_id),
        &token,
        json!({ "description": "Aceite" }),
    )
    .await?;

    let response = app.get("/repairs/?client_name=%20%20&license_plate=%20", &token).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn test_repair_search() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _, vehicle_id) = setup(&app).await?;
    let other_client = app.create_client(&token, "Pedro Sanz").await?;
    let other_vehicle = app.create_vehicle(&token, other_client, "5678DEF").await?;

    for (vehicle, description, status, start) in [
        (vehicle_id, "Aceite", "pending", "2024-05-02T09:00:00Z"),
        (vehicle_id, "Frenos", "delivered", "2024-05-01T09:00:00Z"),
        (other_vehicle, "Ruedas", "pending", "2024-05-03T09:00:00Z"),
    ] {
        let response = app
            .post(
                &format!("/vehicles/{}/repairs/", vehicle),
                &token,
                json!({ "description": description, "status": status, "start_date": start }),
            )
            .await?;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app.get("/repairs/", &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));

    let response = app.get("/repairs/?license_plate=1234", &token).await?;
    let found = response.body.as_array().cloned().unwrap_or_default();
    assert_eq!(found.len(), 2);
    // Ordenadas por fecha de inicio
    assert_eq!(found[0]["description"], "Frenos");
    assert_eq!(found[1]["description"], "Aceite");

    let response = app.get("/repairs/?status=pending", &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));

    let response = app.get("/repairs/?client_name=pedro&status=pending", &token).await?;
    let found = response.body.as_array().cloned().unwrap_or_default();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["description"], "Ruedas");

    let response = app.get("/repairs/?status=pending&limit=1", &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_repair_listings_and_soft_delete() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, mechanic_id, vehicle_id) = setup(&app).await?;

    let response = app
        .post(
            &format!("/vehicles/{}/repairs/", vehicle_id),
            &token,
            json!({ "description": "Aceite" }),
        )
        .await?;
    let repair_id = id_of(&response.body)?;

    let response = app.get(&format!("/vehicles/{}/repairs/", vehicle_id), &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));

    let response = app.get(&format!("/mechanic/{}/repairs/", mechanic_id), &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));

    let response = app.delete(&format!("/repairs/{}", repair_id), &token).await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.get(&format!("/repairs/{}", repair_id), &token).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.get(&format!("/vehicles/{}/repairs/", vehicle_id), &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));

    let response = app.get("/repairs/?license_plate=1234", &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));
    Ok(())
}
