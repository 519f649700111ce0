#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app, mint_token};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use db::models::{
        actor::{self, NewActor},
        movie::{self, NewMovie},
    };
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ASSISTANT: &[&str] = &["get:actors", "get:movies"];
    const PRODUCER: &[&str] = &[
        "get:actors",
        "get:movies",
        "create:actors",
        "create:movies",
        "patch:actors",
        "patch:movies",
        "delete:actors",
        "delete:movies",
    ];

    struct TestData {
        actors: Vec<actor::Model>,
        movie: movie::Model,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let mut actors = Vec::new();
        for i in 0..12 {
            let actor = actor::Model::create(
                db,
                NewActor {
                    name: format!("Actor {i}"),
                    age: 20 + i,
                    gender: if i % 2 == 0 { "female".into() } else { "male".into() },
                },
            )
            .await
            .unwrap();
            actors.push(actor);
        }

        let movie = movie::Model::create(
            db,
            NewMovie {
                title: "Night Train".into(),
                release_date: NaiveDate::from_ymd_opt(2027, 3, 14).unwrap(),
            },
        )
        .await
        .unwrap();

        TestData { actors, movie }
    }

    fn request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<AxumBody> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", bearer(token));
        match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(AxumBody::from(body.to_string()))
                .unwrap(),
            None => builder.body(AxumBody::empty()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_list_actors_paginated() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = mint_token(ASSISTANT, json!({}));

        let response = app
            .clone()
            .oneshot(request("GET", "/actors", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["total_actors"], 12);
        assert_eq!(json["actors"].as_array().unwrap().len(), 10);

        let response = app
            .oneshot(request("GET", "/actors?page=2", &token, None))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        let page = json["actors"].as_array().unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0]["id"], data.actors[10].id);
        assert_eq!(page[1]["name"], "Actor 11");
    }

    #[tokio::test]
    async fn test_list_movies() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = mint_token(ASSISTANT, json!({}));

        let response = app
            .oneshot(request("GET", "/movies", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["total_movies"], 1);
        assert_eq!(json["movies"][0]["id"], data.movie.id);
        assert_eq!(json["movies"][0]["release_date"], "2027-03-14");
    }

    #[tokio::test]
    async fn test_list_movies_empty_is_404() {
        let (app, _) = make_test_app().await;
        let token = mint_token(ASSISTANT, json!({}));

        let response = app
            .oneshot(request("GET", "/movies", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assistant_cannot_create_actor() {
        let (app, app_state) = make_test_app().await;
        let token = mint_token(ASSISTANT, json!({}));

        let body = json!({ "name": "Nobody", "age": 40, "gender": "male" });
        let response = app
            .oneshot(request("POST", "/actors", &token, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(actor::Model::count(app_state.db()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_actor_and_movie() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;
        let token = mint_token(PRODUCER, json!({}));

        let body = json!({ "name": "Ada Brooks", "age": 34, "gender": "female" });
        let response = app
            .clone()
            .oneshot(request("POST", "/actors", &token, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["actors"], 13);
        assert!(json["new_actor"].as_i64().is_some());

        let body = json!({ "title": "Quiet Harbour", "release_date": "2028-01-09" });
        let response = app
            .oneshot(request("POST", "/movies", &token, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["movies"], 2);
        assert!(json["new_movie"].as_i64().is_some());
    }

    #[tokio::test]
    async fn test_create_movie_validation() {
        let (app, _) = make_test_app().await;
        let token = mint_token(PRODUCER, json!({}));

        let response = app
            .clone()
            .oneshot(request("POST", "/movies", &token, Some(json!({ "title": "Untitled" }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "bad request: missing field 'release_date'");

        let body = json!({ "title": "Untitled", "release_date": "next spring" });
        let response = app
            .oneshot(request("POST", "/movies", &token, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_actor_keeps_omitted_fields() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = mint_token(PRODUCER, json!({}));
        let target = &data.actors[3];

        let uri = format!("/actors/{}", target.id);
        let response = app
            .oneshot(request("PATCH", &uri, &token, Some(json!({ "age": 99 }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["update_actor"][0]["id"], target.id);
        assert_eq!(json["update_actor"][0]["age"], 99);
        assert_eq!(json["update_actor"][0]["name"], target.name.as_str());
    }

    #[tokio::test]
    async fn test_patch_unknown_movie_is_400() {
        let (app, _) = make_test_app().await;
        let token = mint_token(PRODUCER, json!({}));

        let response = app
            .oneshot(request("PATCH", "/movies/77", &token, Some(json!({ "title": "X" }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_actor_and_movie() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = mint_token(PRODUCER, json!({}));

        let uri = format!("/actors/{}", data.actors[0].id);
        let response = app
            .clone()
            .oneshot(request("DELETE", &uri, &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["deleted_actor"], data.actors[0].id);

        let uri = format!("/movies/{}", data.movie.id);
        let response = app
            .clone()
            .oneshot(request("DELETE", &uri, &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["deleted_movie"], data.movie.id);

        let response = app
            .oneshot(request("DELETE", &uri, &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(actor::Model::count(app_state.db()).await.unwrap(), 11);
    }
}
