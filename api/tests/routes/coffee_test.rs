#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app, mint_token};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::drink::{self, NewDrink};
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const BARISTA: &[&str] = &["get:drinks-detail"];
    const MANAGER: &[&str] = &[
        "get:drinks-detail",
        "post:drinks",
        "patch:drinks",
        "delete:drinks",
    ];

    async fn seed_drink(db: &DatabaseConnection, title: &str) -> drink::Model {
        let new_drink: NewDrink = serde_json::from_value(json!({
            "title": title,
            "recipe": [
                { "name": "espresso", "color": "brown", "parts": 1 },
                { "name": "milk", "color": "grey", "parts": 2 }
            ]
        }))
        .unwrap();
        drink::Model::create(db, new_drink).await.unwrap()
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<AxumBody> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", bearer(token));
        }
        match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(AxumBody::from(body.to_string()))
                .unwrap(),
            None => builder.body(AxumBody::empty()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_public_menu_hides_ingredient_names() {
        let (app, app_state) = make_test_app().await;
        let flat_white = seed_drink(app_state.db(), "Flat White").await;

        let response = app.oneshot(request("GET", "/drinks", None, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        let drinks = json["drinks"].as_array().unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0]["id"], flat_white.id);
        assert_eq!(drinks[0]["recipe"][1], json!({ "color": "grey", "parts": 2 }));
        assert!(drinks[0]["recipe"][0].get("name").is_none());
    }

    #[tokio::test]
    async fn test_empty_menu_is_404() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(request("GET", "/drinks", None, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_drink_details_requires_token() {
        let (app, app_state) = make_test_app().await;
        seed_drink(app_state.db(), "Flat White").await;

        let response = app
            .oneshot(request("GET", "/drinks-detail", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 401);
        assert_eq!(json["message"], "authentification failed");
        assert_eq!(json["code"], "authorization_header_missing");
    }

    #[tokio::test]
    async fn test_drink_details_shows_full_recipe() {
        let (app, app_state) = make_test_app().await;
        seed_drink(app_state.db(), "Flat White").await;
        let token = mint_token(BARISTA, json!({}));

        let response = app
            .oneshot(request("GET", "/drinks-detail", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["drinks"][0]["recipe"][0]["name"], "espresso");
    }

    #[tokio::test]
    async fn test_barista_cannot_create_drink() {
        let (app, _) = make_test_app().await;
        let token = mint_token(BARISTA, json!({}));

        let body = json!({ "title": "Mocha", "recipe": { "name": "cocoa", "color": "brown", "parts": 1 } });
        let response = app
            .oneshot(request("POST", "/drinks", Some(&token), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = get_json_body(response).await;
        assert_eq!(json["code"], "unauthorized");
    }

    #[tokio::test]
    async fn test_create_drink_accepts_single_ingredient() {
        let (app, app_state) = make_test_app().await;
        let token = mint_token(MANAGER, json!({}));

        let body = json!({ "title": "Water", "recipe": { "name": "water", "color": "blue", "parts": 1 } });
        let response = app
            .oneshot(request("POST", "/drinks", Some(&token), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["drinks"][0]["title"], "Water");
        assert_eq!(
            json["drinks"][0]["recipe"],
            json!([{ "name": "water", "color": "blue", "parts": 1 }])
        );

        let stored = drink::Model::all_ordered(app_state.db()).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_create_drink_missing_recipe_is_400() {
        let (app, _) = make_test_app().await;
        let token = mint_token(MANAGER, json!({}));

        let response = app
            .oneshot(request("POST", "/drinks", Some(&token), Some(json!({ "title": "Air" }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "bad request: missing field 'recipe'");
    }

    #[tokio::test]
    async fn test_create_duplicate_drink_is_422() {
        let (app, app_state) = make_test_app().await;
        seed_drink(app_state.db(), "Flat White").await;
        let token = mint_token(MANAGER, json!({}));

        let body = json!({ "title": "Flat White", "recipe": [{ "name": "milk", "color": "grey", "parts": 1 }] });
        let response = app
            .oneshot(request("POST", "/drinks", Some(&token), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_patch_drink_title() {
        let (app, app_state) = make_test_app().await;
        let drink = seed_drink(app_state.db(), "Flat White").await;
        let token = mint_token(MANAGER, json!({}));

        let uri = format!("/drinks/{}", drink.id);
        let response = app
            .oneshot(request("PATCH", &uri, Some(&token), Some(json!({ "title": "Cortado" }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["drinks"][0]["id"], drink.id);
        assert_eq!(json["drinks"][0]["title"], "Cortado");
        assert_eq!(json["drinks"][0]["recipe"][1]["name"], "milk");
    }

    #[tokio::test]
    async fn test_patch_drink_rejects_empty_and_unknown() {
        let (app, app_state) = make_test_app().await;
        let drink = seed_drink(app_state.db(), "Flat White").await;
        let token = mint_token(MANAGER, json!({}));

        let uri = format!("/drinks/{}", drink.id);
        let response = app
            .clone()
            .oneshot(request("PATCH", &uri, Some(&token), Some(json!({}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(request("PATCH", "/drinks/999", Some(&token), Some(json!({ "title": "X" }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_drink() {
        let (app, app_state) = make_test_app().await;
        let drink = seed_drink(app_state.db(), "Flat White").await;
        let token = mint_token(MANAGER, json!({}));

        let uri = format!("/drinks/{}", drink.id);
        let response = app
            .clone()
            .oneshot(request("DELETE", &uri, Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["delete"], drink.id);

        let response = app
            .oneshot(request("DELETE", &uri, Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
