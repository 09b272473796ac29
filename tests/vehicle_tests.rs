mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::TestApp;

#[tokio::test]
async fn test_vehicle_for_unknown_client_is_not_found() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _) = app.signup("Luis", "luis@taller.com").await?;

    let response = app
        .post(
            &format!("/clients/{}/vehicles/", Uuid::new_v4()),
            &token,
            json!({ "license_plate": "1234ABC", "brand": "Seat", "model": "Ibiza", "year": 2018 }),
        )
        .await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_plate_is_normalized_and_unique() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _) = app.signup("Luis", "luis@taller.com").await?;
    let client_id = app.create_client(&token, "María López").await?;

    let response = app
        .post(
            &format!("/clients/{}/vehicles/", client_id),
            &token,
            json!({ "license_plate": " 1234abc ", "brand": "Seat", "model": "Ibiza", "year": 2018 }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["license_plate"], "1234ABC");

    // Otro cliente, misma matrícula en minúsculas
    let other = app.create_client(&token, "Pedro Sanz").await?;
    let response = app
        .post(
            &format!("/clients/{}/vehicles/", other),
            &token,
            json!({ "license_plate": "1234abc", "brand": "Opel", "model": "Corsa", "year": 2015 }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "CONFLICT");
    Ok(())
}

#[tokio::test]
async fn test_plate_is_reusable_after_soft_delete() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _) = app.signup("Luis", "luis@taller.com").await?;
    let client_id = app.create_client(&token, "María López").await?;
    let vehicle_id = app.create_vehicle(&token, client_id, "1234ABC").await?;

    let response = app.delete(&format!("/vehicles/{}", vehicle_id), &token).await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.get(&format!("/vehicles/{}", vehicle_id), &token).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    app.create_vehicle(&token, client_id, "1234ABC").await?;
    Ok(())
}

#[tokio::test]
async fn test_update_plate_conflict() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _) = app.signup("Luis", "luis@taller.com").await?;
    let client_id = app.create_client(&token, "María López").await?;
    app.create_vehicle(&token, client_id, "1234ABC").await?;
    let vehicle_id = app.create_vehicle(&token, client_id, "5678DEF").await?;

    let response = app
        .patch(&format!("/vehicles/{}", vehicle_id), &token, json!({ "license_plate": "1234abc" }))
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "CONFLICT");

    // Reenviar su propia matrícula no es conflicto
    let response = app
        .patch(
            &format!("/vehicles/{}", vehicle_id),
            &token,
            json!({ "license_plate": "5678DEF", "year": 2020 }),
        )
        .await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["year"], 2020);
    assert_eq!(response.body["brand"], "Seat");
    Ok(())
}

#[tokio::test]
async fn test_vehicle_search() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _) = app.signup("Luis", "luis@taller.com").await?;
    let maria = app.create_client(&token, "María López").await?;
    let pedro = app.create_client(&token, "Pedro Sanz").await?;
    app.create_vehicle(&token, maria, "1234ABC").await?;
    app.create_vehicle(&token, maria, "5678DEF").await?;
    app.create_vehicle(&token, pedro, "9999ABC").await?;

    // Sin filtros: vacío
    let response = app.get("/vehicles/", &token).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));

    let response = app.get("/vehicles/?q=mar", &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(2));

    let response = app.get("/vehicles/?license_plate=abc", &token).await?;
    let found = response.body.as_array().cloned().unwrap_or_default();
    assert_eq!(found.len(), 2);
    // Ordenados por nombre del cliente
    assert_eq!(found[0]["client_id"], maria.to_string());
    assert_eq!(found[1]["client_id"], pedro.to_string());

    let response = app.get("/vehicles/?q=pedro&license_plate=abc", &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));

    let response = app.get("/vehicles/?license_plate=ab", &token).await?;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn test_list_client_vehicles() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _) = app.signup("Luis", "luis@taller.com").await?;
    let client_id = app.create_client(&token, "María López").await?;
    app.create_vehicle(&token, client_id, "1234ABC").await?;
    let removed = app.create_vehicle(&token, client_id, "5678DEF").await?;
    app.delete(&format!("/vehicles/{}", removed), &token).await?;

    let response = app.get(&format!("/clients/{}/vehicles/", client_id), &token).await?;
    assert_eq!(response.status, StatusCode::OK);
    let found = response.body.as_array().cloned().unwrap_or_default();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["license_plate"], "1234ABC");

    let response = app.get(&format!("/clients/{}/vehicles/", Uuid::new_v4()), &token).await?;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_blank_search_terms_are_not_filters() -> Result<()> {
    let app = TestApp::new().await?;
    let (token, _) = app.signup("Luis", "luis@taller.com").await?;
    let client_id = app.create_client(&token, "María López").await?;
    app.create_vehicle(&token, client_id, "1234ABC").await?;
    app.create_vehicle(&token, client_id, "5678DEF").await?;

    let response = app.get("/vehicles/?q=%20%20", &token).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));

    let response = app.get("/vehicles/?q=%20%20&license_plate=%20%20%20", &token).await?;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));

    // El término se recorta antes de validar la longitud
    let response = app.get("/vehicles/?license_plate=ab%20%20", &token).await?;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.get("/vehicles/?license_plate=%201234%20", &token).await?;
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));
    Ok(())
}
