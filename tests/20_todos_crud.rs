mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn list_includes_seed_entry() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = reqwest::get(format!("{}/todos", server.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let todos = res.json::<Vec<Value>>().await?;
    assert!(!todos.is_empty(), "seeded repository should never be empty");
    Ok(())
}

#[tokio::test]
async fn create_sets_location_and_item_is_retrievable() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::bearer_token(server).await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/todos", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "value": "Buy groceries" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let location = res
        .headers()
        .get("location")
        .expect("201 must carry a Location header")
        .to_str()?
        .to_string();

    let created = res.json::<Value>().await?;
    let id = created["id"].as_str().expect("created item carries its id");
    assert_eq!(location, format!("/todos/{id}"));

    let res = reqwest::get(format!("{}{location}", server.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = res.json::<Value>().await?;
    assert_eq!(fetched["value"], "Buy groceries");
    assert_eq!(fetched["id"], created["id"]);
    Ok(())
}

#[tokio::test]
async fn create_with_same_id_replaces_instead_of_duplicating() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::bearer_token(server).await?;
    let client = reqwest::Client::new();
    let id = Uuid::new_v4();

    for value in ["First attempt", "Second attempt"] {
        let res = client
            .post(format!("{}/todos", server.base_url))
            .bearer_auth(&token)
            .json(&json!({ "id": id, "value": value }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let todos = reqwest::get(format!("{}/todos", server.base_url))
        .await?
        .json::<Vec<Value>>()
        .await?;
    let matching: Vec<_> = todos
        .iter()
        .filter(|t| t["id"] == json!(id))
        .collect();
    assert_eq!(matching.len(), 1, "repeated create must replace, not append");
    assert_eq!(matching[0]["value"], "Second attempt");
    Ok(())
}

#[tokio::test]
async fn create_without_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/todos", server.base_url))
        .json(&json!({ "value": "Buy groceries" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn get_unknown_id_is_not_found() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = reqwest::get(format!("{}/todos/{}", server.base_url, Uuid::new_v4())).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_overwrites_existing_item() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::bearer_token(server).await?;
    let client = reqwest::Client::new();
    let id = Uuid::new_v4();

    let res = client
        .post(format!("{}/todos", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": id, "value": "Walk the dog" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .put(format!("{}/todos/{id}", server.base_url))
        .json(&json!({ "value": "Walk the cat instead" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let fetched = reqwest::get(format!("{}/todos/{id}", server.base_url))
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(fetched["id"], json!(id), "path id is authoritative");
    assert_eq!(fetched["value"], "Walk the cat instead");
    Ok(())
}

#[tokio::test]
async fn update_unknown_id_is_not_found_and_creates_nothing() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let id = Uuid::new_v4();

    let res = client
        .put(format!("{}/todos/{id}", server.base_url))
        .json(&json!({ "value": "Ghost entry" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = reqwest::get(format!("{}/todos/{id}", server.base_url)).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND, "404 update must not create");
    Ok(())
}

#[tokio::test]
async fn delete_twice_is_ok_then_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::bearer_token(server).await?;
    let client = reqwest::Client::new();
    let id = Uuid::new_v4();

    let res = client
        .post(format!("{}/todos", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": id, "value": "Take out the trash" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/todos/{id}", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/todos/{id}", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
