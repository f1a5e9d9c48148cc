mod common;

use anyhow::Result;
use ledgerline::database::Store;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn rent(email: &str) -> Value {
    json!({
        "name": "Rent",
        "email": email,
        "period": "monthly",
        "description": "rent",
        "amount": 1000,
        "expenses": 950
    })
}

async fn list(server: &common::TestServer) -> Result<Vec<Value>> {
    let res = server.client.get(server.url("/Budgets/budget.html")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(res.json::<Vec<Value>>().await?)
}

#[tokio::test]
async fn submitted_budget_appears_in_listing() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/budget-submit-form"))
        .json(&rent("u@u.com"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["expense"], 950.0);

    let budgets = list(&server).await?;
    assert!(budgets
        .iter()
        .any(|b| b["name"] == "Rent" && b["expense"] == 950.0));
    Ok(())
}

#[tokio::test]
async fn form_encoded_submission_is_accepted() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/budget-submit-form"))
        .form(&[
            ("name", "Food"),
            ("email", "form@x.com"),
            ("period", "weekly"),
            ("description", "groceries"),
            ("amount", "120"),
            ("expenses", "80.5"),
        ])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let budgets = list(&server).await?;
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["amount"], 120.0);
    assert_eq!(budgets[0]["expense"], 80.5);
    Ok(())
}

#[tokio::test]
async fn resubmitting_updates_the_same_record() -> Result<()> {
    let server = common::spawn_server().await?;

    server
        .client
        .post(server.url("/budget-submit-form"))
        .json(&rent("u@u.com"))
        .send()
        .await?;

    let mut update = rent("u@u.com");
    update["name"] = json!("Mortgage");
    update["expenses"] = json!(700);
    server
        .client
        .post(server.url("/budget-submit-form"))
        .json(&update)
        .send()
        .await?;

    let budgets = list(&server).await?;
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["name"], "Mortgage");
    assert_eq!(budgets[0]["expense"], 700.0);
    Ok(())
}

#[tokio::test]
async fn incomplete_submission_is_rejected_without_writing() -> Result<()> {
    let server = common::spawn_server().await?;

    for field in ["name", "email", "period", "description", "amount", "expenses"] {
        let mut body = rent("partial@x.com");
        body.as_object_mut().expect("object").remove(field);

        let res = server
            .client
            .post(server.url("/budget-submit-form"))
            .json(&body)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "missing {}", field);
        let error: Value = res.json().await?;
        assert!(error["field_errors"].get(field).is_some(), "missing {}", field);
    }

    // Zero counts as missing
    let mut body = rent("partial@x.com");
    body["amount"] = json!(0);
    let res = server
        .client
        .post(server.url("/budget-submit-form"))
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert!(list(&server).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn listing_returns_every_budget() -> Result<()> {
    let server = common::spawn_server().await?;

    for email in ["a@x.com", "b@x.com"] {
        server
            .client
            .post(server.url("/budget-submit-form"))
            .json(&rent(email))
            .send()
            .await?;
    }

    let mut emails: Vec<String> = list(&server)
        .await?
        .iter()
        .filter_map(|b| b["email"].as_str().map(str::to_string))
        .collect();
    emails.sort();
    assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    Ok(())
}

#[tokio::test]
async fn delete_removes_by_id_and_ignores_unknown_ids() -> Result<()> {
    let server = common::spawn_server().await?;

    let body: Value = server
        .client
        .post(server.url("/budget-submit-form"))
        .json(&rent("gone@x.com"))
        .send()
        .await?
        .json()
        .await?;
    let id = body["data"]["id"].as_str().expect("id").to_string();

    let res = server
        .client
        .delete(server.url(&format!("/api/v1/budgets/{}", id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "success": true }));
    assert!(server.store.list_budgets().await?.is_empty());

    let missing = server
        .client
        .delete(server.url(&format!("/api/v1/budgets/{}", uuid::Uuid::new_v4())))
        .send()
        .await?;
    assert_eq!(missing.status(), StatusCode::OK);
    assert_eq!(missing.json::<Value>().await?, json!({ "success": true }));
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_a_server_error() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .delete(server.url("/api/v1/budgets/not-a-uuid"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Internal server error");
    Ok(())
}
