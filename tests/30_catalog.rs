mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn added_vendors_are_listed() -> Result<()> {
    let server = common::spawn_server().await?;

    for name in ["Acme", "Globex"] {
        let res = server
            .client
            .post(server.url("/api/v1/auth/addVendor"))
            .json(&json!({ "name": name, "email": format!("{}@vendor.com", name) }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let body: Value = server
        .client
        .get(server.url("/api/v1/auth/displayvendor"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["success"], true);

    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|doc| doc["data"]["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Acme", "Globex"]);
    Ok(())
}

#[tokio::test]
async fn collections_do_not_leak_into_each_other() -> Result<()> {
    let server = common::spawn_server().await?;

    server
        .client
        .post(server.url("/api/v1/auth/addItem"))
        .form(&[("name", "Bolt"), ("price", "3")])
        .send()
        .await?;
    server
        .client
        .post(server.url("/api/v1/auth/addEmployee"))
        .json(&json!({ "name": "Grace" }))
        .send()
        .await?;
    server
        .client
        .post(server.url("/api/v1/auth/new-sales-order"))
        .json(&json!({ "customer": "Initech", "total": 12 }))
        .send()
        .await?;

    let items: Value = server
        .client
        .get(server.url("/api/v1/auth/displayitem"))
        .send()
        .await?
        .json()
        .await?;
    let items = items["data"].as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["collection"], "items");
    assert_eq!(items[0]["data"]["price"], "3");

    let customers: Value = server
        .client
        .get(server.url("/api/v1/auth/displaycustomer"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(customers["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn empty_documents_are_rejected() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/api/v1/auth/addCustomer"))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .client
        .post(server.url("/api/v1/auth/addCustomer"))
        .json(&json!(["not", "an", "object"]))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
