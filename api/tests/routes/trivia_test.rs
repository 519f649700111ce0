#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::{
        category,
        question::{self, NewQuestion},
    };
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct TestData {
        science: category::Model,
        art: category::Model,
        science_questions: Vec<question::Model>,
        art_question: question::Model,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let science = category::Model::create(db, "Science").await.unwrap();
        let art = category::Model::create(db, "Art").await.unwrap();

        let mut science_questions = Vec::new();
        for i in 1..=12 {
            let q = question::Model::create(
                db,
                NewQuestion {
                    question: format!("Science question {i}?"),
                    answer: format!("Answer {i}"),
                    category: science.id,
                    difficulty: (i % 5 + 1) as i32,
                },
            )
            .await
            .unwrap();
            science_questions.push(q);
        }

        let art_question = question::Model::create(
            db,
            NewQuestion {
                question: "Which Dutch painter cut off part of his ear?".into(),
                answer: "Vincent van Gogh".into(),
                category: art.id,
                difficulty: 2,
            },
        )
        .await
        .unwrap();

        TestData {
            science,
            art,
            science_questions,
            art_question,
        }
    }

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    fn delete(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_categories_success() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app.oneshot(get("/categories")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["total_categories"], 2);
        assert_eq!(json["categories"][data.science.id.to_string()], "Science");
        assert_eq!(json["categories"][data.art.id.to_string()], "Art");
    }

    #[tokio::test]
    async fn test_list_categories_empty_is_404() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/categories")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_questions_paginates_by_ten() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app.clone().oneshot(get("/questions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["total_questions"], 13);
        assert_eq!(json["questions"].as_array().unwrap().len(), 10);
        assert_eq!(json["questions"][0]["id"], data.science_questions[0].id);
        assert_eq!(json["current_category"], Value::Null);
        assert_eq!(json["categories"][data.art.id.to_string()], "Art");

        let response = app.clone().oneshot(get("/questions?page=2")).await.unwrap();
        let json = get_json_body(response).await;
        let page = json["questions"].as_array().unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page[0]["id"], data.science_questions[10].id);
        assert_eq!(page[2]["id"], data.art_question.id);

        let response = app.oneshot(get("/questions?page=9")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert!(json["questions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_questions_rejects_page_zero() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = app.oneshot(get("/questions?page=0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_questions_empty_is_404() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/questions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "resource not found");
    }

    #[tokio::test]
    async fn test_questions_by_category() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let uri = format!("/categories/{}/questions", data.art.id);
        let response = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["total_questions"], 1);
        assert_eq!(json["current_category"], data.art.id);
        assert_eq!(json["questions"][0]["answer"], "Vincent van Gogh");

        let response = app.oneshot(get("/categories/999/questions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .clone()
            .oneshot(post_json("/search", json!({ "searchTerm": "dUTCH" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["total_questions"], 1);
        assert_eq!(json["questions"][0]["id"], data.art_question.id);

        let response = app
            .oneshot(post_json("/search", json!({ "searchTerm": "zebra" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(post_json("/search", json!({ "searchTerm": "%" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_missing_term_is_400() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post_json("/search", json!({ "term": "x" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "bad request: missing field 'searchTerm'");
    }

    #[tokio::test]
    async fn test_add_then_delete_question() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let body = json!({
            "question": "Q",
            "answer": "A",
            "category": data.art.id.to_string(),
            "difficulty": 3
        });
        let response = app
            .clone()
            .oneshot(post_json("/addQuestions", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["questions"], 14);
        let new_id = json["created"].as_i64().unwrap();

        let stored = question::Model::find_by_id(app_state.db(), new_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.category, data.art.id);
        assert_eq!(stored.difficulty, 3);

        let response = app
            .oneshot(delete(&format!("/questions/{new_id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["deleted"], new_id);
        assert_eq!(json["total_questions"], 13);
    }

    #[tokio::test]
    async fn test_add_question_reports_first_missing_field() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(post_json(
                "/addQuestions",
                json!({ "question": "Q", "answer": null, "difficulty": 1 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "bad request: missing field 'answer'");

        assert_eq!(question::Model::count(app_state.db()).await.unwrap(), 13);
    }

    #[tokio::test]
    async fn test_add_question_unknown_category_is_422() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(post_json(
                "/addQuestions",
                json!({ "question": "Q", "answer": "A", "category": 999, "difficulty": 1 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "unprocessable");
    }

    #[tokio::test]
    async fn test_delete_unknown_question_is_400() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(delete("/questions/4242")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "bad request");
    }

    #[tokio::test]
    async fn test_quiz_respects_category_and_previous_questions() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let seen: Vec<i64> = data.science_questions[..11].iter().map(|q| q.id).collect();
        let body = json!({
            "quiz_category": { "type": "Science", "id": data.science.id.to_string() },
            "previous_questions": seen
        });

        let response = app.oneshot(post_json("/quizzes", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["question"]["id"], data.science_questions[11].id);
        assert_eq!(json["question"]["category"], data.science.id);
    }

    #[tokio::test]
    async fn test_quiz_all_categories_never_repeats() {
        let (app, app_state) = make_test_app().await;
        setup_test_data(app_state.db()).await;

        let mut previous: Vec<i64> = Vec::new();
        for _ in 0..13 {
            let body = json!({ "quiz_category": { "id": 0 }, "previous_questions": previous });
            let response = app.clone().oneshot(post_json("/quizzes", body)).await.unwrap();
            let json = get_json_body(response).await;
            assert_eq!(json["success"], true);
            let id = json["question"]["id"].as_i64().unwrap();
            assert!(!previous.contains(&id));
            previous.push(id);
        }

        let body = json!({ "quiz_category": { "id": 0 }, "previous_questions": previous });
        let response = app.oneshot(post_json("/quizzes", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["question"], Value::Null);
    }

    #[tokio::test]
    async fn test_quiz_without_category_is_400() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(post_json("/quizzes", json!({ "previous_questions": [] })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(post_json("/quizzes", json!({ "quiz_category": { "type": "Art" } })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "bad request: missing field 'id'");
    }
}
