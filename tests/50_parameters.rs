mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn query_parameters_check_age() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/parameters?name=Tim&age=17")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Sorry Tim, you are not old enough.");

    let res = server.client.get(server.url("/parameters?name=Ann&age=30")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["message"], "Welcome Ann, you are old enough!");
    Ok(())
}

#[tokio::test]
async fn url_parameters_check_age() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/url_parameters/Tim/12")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = server.client.get(server.url("/url_parameters/Ann/18")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn malformed_parameters_are_bad_request() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/parameters?name=Tim")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server.client.get(server.url("/url_parameters/Tim/old")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn informational_routes_respond() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["name"], "Planetary API");

    let res = server.client.get(server.url("/super_simple")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["message"], "Hello from the super simple Planetary API. boo yah");

    let res = server.client.get(server.url("/not_found")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
