use hello_metrics::GREETING;
use reqwest::Method;

mod common;

#[tokio::test]
async fn root_endpoint_works() {
    // ---
    let server = common::TestServer::new().await;

    let response = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(body, "Hello, is it me you're looking for?");
}

#[tokio::test]
async fn root_ignores_query_headers_and_body() {
    // ---
    let server = common::TestServer::new().await;

    let response = server
        .client
        .post(server.url("/?greeting=nope&x=1"))
        .header("accept", "application/json")
        .header("x-custom", "whatever")
        .body("{\"unused\": true}")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), GREETING);
}

#[tokio::test]
async fn root_is_method_agnostic() {
    // ---
    let server = common::TestServer::new().await;

    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server
            .client
            .request(method.clone(), server.url("/"))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 200, "method {method}");
        assert_eq!(response.text().await.unwrap(), GREETING);
    }
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    // ---
    let server = common::TestServer::new().await;

    let response = server
        .client
        .get(server.url("/hello"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn startup_on_bound_port_fails_fast() {
    // ---
    let server = common::TestServer::new().await;

    // The port is held by the running server, so a second bind must fail
    let result = hello_metrics::bind_listener(&server.addr.to_string()).await;
    assert!(result.is_err(), "binding a busy port should not succeed");

    // The first server keeps serving on its own port
    let response = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), 200);
}
