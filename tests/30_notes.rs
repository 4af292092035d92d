mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

use notes_api_rust::auth::TokenService;

fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}+{}@example.com", prefix, nanos)
}

/// Mint a token the spawned server will accept, without touching the
/// database; useful for exercising validation paths
fn minted_token(user_id: Uuid, name: &str) -> String {
    TokenService::new(common::TEST_SECRET, 1)
        .unwrap()
        .issue(user_id, name)
        .unwrap()
}

async fn signup_and_login(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    password: &str,
) -> Result<(String, Uuid)> {
    let email = unique_email(name);

    let res = client
        .post(format!("{}/auth/signup", base_url))
        .json(&json!({ "name": name, "email": email, "password": password }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "signup failed");

    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "login failed");

    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"].as_str().expect("token").to_string();
    let user_id = TokenService::new(common::TEST_SECRET, 1)
        .unwrap()
        .verify(&token)
        .expect("token verifies")
        .sub;

    Ok((token, user_id))
}

async fn create_note(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    user_id: Uuid,
    heading: &str,
) -> Result<()> {
    let res = client
        .post(format!("{}/notes/create", base_url))
        .bearer_auth(token)
        .json(&json!({
            "userId": user_id,
            "heading": heading,
            "description": "a longer description",
            "tag": "test",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "note create failed");
    Ok(())
}

#[tokio::test]
async fn note_routes_require_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/notes/create", server.base_url))
        .json(&json!({ "heading": "x" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .delete(format!("{}/notes/{}", server.base_url, Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn note_create_rejects_missing_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let user_id = Uuid::new_v4();
    let token = minted_token(user_id, "validator");

    for payload in [
        json!({}),
        json!({ "heading": "h" }),
        json!({ "userId": user_id, "heading": "h", "description": "d" }),
        json!({ "userId": user_id, "heading": "", "description": "d", "tag": "t" }),
    ] {
        let res = client
            .post(format!("{}/notes/create", server.base_url))
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);

        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["msg"], "Please fill all the input fields");
    }
    Ok(())
}

#[tokio::test]
async fn note_create_for_other_user_is_forbidden() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = minted_token(Uuid::new_v4(), "self");

    // Fully valid payload, but under somebody else's id; rejected before
    // anything reaches the store
    let res = client
        .post(format!("{}/notes/create", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "userId": Uuid::new_v4(),
            "heading": "h",
            "description": "d",
            "tag": "t",
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn notes_crud_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (token, user_id) = signup_and_login(&client, &server.base_url, "owner", "p").await?;
    create_note(&client, &server.base_url, &token, user_id, "first note").await?;

    // The list shows the note under the owner's name
    let res = client
        .get(format!("{}/notes", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["msg"], "Data fetched");
    assert_eq!(body["name"], "owner");
    let note_id = body["notes"][0]["id"].as_str().expect("note id").to_string();
    assert_eq!(body["notes"][0]["heading"], "first note");

    // Fetch by id
    let res = client
        .get(format!("{}/notes/{}", server.base_url, note_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["note"]["heading"], "first note");
    assert_eq!(body["note"]["userId"], user_id.to_string());

    // Update
    let res = client
        .patch(format!("{}/notes/update/{}", server.base_url, note_id))
        .bearer_auth(&token)
        .json(&json!({ "heading": "renamed" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/notes/{}", server.base_url, note_id))
        .bearer_auth(&token)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["note"]["heading"], "renamed");
    // untouched fields survive a partial update
    assert_eq!(body["note"]["tag"], "test");

    // Empty update is rejected
    let res = client
        .patch(format!("{}/notes/update/{}", server.base_url, note_id))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Delete, then the note is gone
    let res = client
        .delete(format!("{}/notes/{}", server.base_url, note_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/notes/{}", server.base_url, note_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn foreign_note_is_indistinguishable_from_absent() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (owner_token, owner_id) = signup_and_login(&client, &server.base_url, "alice", "p").await?;
    create_note(&client, &server.base_url, &owner_token, owner_id, "private").await?;

    let res = client
        .get(format!("{}/notes", server.base_url))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    let note_id = body["notes"][0]["id"].as_str().expect("note id").to_string();

    let (intruder_token, _) = signup_and_login(&client, &server.base_url, "bob", "p").await?;

    // Read, update, and delete of a foreign note all 404
    let res = client
        .get(format!("{}/notes/{}", server.base_url, note_id))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let foreign_body = res.json::<serde_json::Value>().await?;

    let res = client
        .patch(format!("{}/notes/update/{}", server.base_url, note_id))
        .bearer_auth(&intruder_token)
        .json(&json!({ "heading": "hijacked" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/notes/{}", server.base_url, note_id))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The body for a foreign note is byte-for-byte the body for a note
    // that does not exist
    let res = client
        .get(format!("{}/notes/{}", server.base_url, Uuid::new_v4()))
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let absent_body = res.json::<serde_json::Value>().await?;
    assert_eq!(foreign_body, absent_body);

    // The owner still sees the note, unchanged
    let res = client
        .get(format!("{}/notes/{}", server.base_url, note_id))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["note"]["heading"], "private");

    Ok(())
}
