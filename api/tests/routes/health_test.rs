#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::ALLOW},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/health")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/no-such-thing")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 404);
        assert_eq!(json["message"], "resource not found");
    }

    #[tokio::test]
    async fn wrong_method_is_json_405() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("PUT")
            .uri("/questions")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(ALLOW));

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 405);
        assert_eq!(json["message"], "method not allowed");
    }

    #[tokio::test]
    async fn malformed_json_body_is_400() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/search")
            .header("Content-Type", "application/json")
            .body(AxumBody::from("{ not json"))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["error"], 400);
        assert_eq!(json["message"], "bad request");
    }
}
