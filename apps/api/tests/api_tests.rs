use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::TestServer;
use giftwise::config::Config;
use giftwise::routes::build_router;
use giftwise::state::AppState;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "test-key";

fn test_config(api_key: Option<&str>, llm_url: &str) -> Config {
    Config {
        llm_api_key: api_key.map(str::to_string),
        llm_api_url: llm_url.to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

async fn setup_test_server(api_key: Option<&str>) -> (TestServer, MockServer) {
    let mock_llm = MockServer::start().await;
    let state = AppState::new(test_config(api_key, &mock_llm.uri()))
        .await
        .expect("Failed to build app state");
    let server = TestServer::new(build_router(state)).expect("Failed to create test server");
    (server, mock_llm)
}

fn wizard_body() -> Value {
    json!({
        "userProfile": {
            "recipientName": "Sarah",
            "age": "25-34",
            "gender": "female",
            "relationship": "friend",
            "hobbies": ["Music", "Art"],
            "occasion": "birthday"
        },
        "quizAnswers": {
            "lifestyle": "social",
            "personality": "creative",
            "interests": ["entertainment"],
            "giftStyle": "personalized"
        },
        "budget": {"min": 20, "max": 50}
    })
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 420, "completion_tokens": 180, "total_tokens": 600}
    })
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod generate_gifts {
    use super::*;

    #[tokio::test]
    async fn test_success_returns_parsed_recommendations() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;

        let reply = r#"Here are my picks:
[
  {"name": "Custom Song Portrait", "price": 40, "description": "Art from her favorite song.",
   "reason": "Music plus art.", "category": "Personalized Art", "tags": ["music", "art"]},
  {"name": "Vinyl Cleaning Kit", "price": 25, "description": "Keeps records spotless.",
   "reason": "For the music lover.", "category": "Music", "tags": ["music"]}
]"#;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "google/gemma-3n-e4b-it",
                "temperature": 1.0,
                "max_tokens": 900
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(reply)))
            .expect(1)
            .mount(&mock)
            .await;

        let response = server.post("/api/generate-gifts").json(&wizard_body()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["name"], "Custom Song Portrait");
        assert_eq!(recs[0]["id"], "1");
        assert_eq!(recs[1]["price"], 25.0);
    }

    #[tokio::test]
    async fn test_prompt_sent_upstream_embeds_wizard_input() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("[]")))
            .expect(1)
            .mount(&mock)
            .await;

        server
            .post("/api/generate-gifts")
            .json(&wizard_body())
            .await
            .assert_status_ok();

        let requests = mock.received_requests().await.unwrap();
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["messages"][0]["role"], "system");
        let prompt = sent["messages"][1]["content"].as_str().unwrap();
        assert!(prompt.contains("Recipient: Sarah"));
        assert!(prompt.contains("Gift Style: personalized"));
        assert!(prompt.contains("Budget: $20 - $50"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_returns_empty_list() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("I could not think of anything, sorry.")),
            )
            .mount(&mock)
            .await;

        let response = server.post("/api/generate-gifts").json(&wizard_body()).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["recommendations"], json!([]));
    }

    #[tokio::test]
    async fn test_missing_profile_returns_400() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock)
            .await;

        let response = server
            .post("/api/generate-gifts")
            .json(&json!({"budget": {"min": 20, "max": 50}}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_budget_returns_400() {
        let (server, _mock) = setup_test_server(Some(TEST_KEY)).await;

        let mut body = wizard_body();
        body["budget"] = Value::Null;
        let response = server.post("/api/generate-gifts").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_partial_budget_returns_400_envelope() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock)
            .await;

        let mut body = wizard_body();
        body["budget"] = json!({"min": 20});
        let response = server.post("/api/generate-gifts").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_non_object_profile_returns_400_envelope() {
        let (server, _mock) = setup_test_server(Some(TEST_KEY)).await;

        let mut body = wizard_body();
        body["userProfile"] = json!("");
        let response = server.post("/api/generate-gifts").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_inverted_budget_returns_400() {
        let (server, _mock) = setup_test_server(Some(TEST_KEY)).await;

        let mut body = wizard_body();
        body["budget"] = json!({"min": 80, "max": 20});
        let response = server.post("/api/generate-gifts").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_api_key_returns_500_without_network_call() {
        let (server, mock) = setup_test_server(None).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("[]")))
            .expect(0)
            .mount(&mock)
            .await;

        let response = server.post("/api/generate-gifts").json(&wizard_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
        assert!(mock.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_returns_500() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": {"message": "model overloaded"}
            })))
            .expect(1)
            .mount(&mock)
            .await;

        let response = server.post("/api/generate-gifts").json(&wizard_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_no_content_returns_500() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&mock)
            .await;

        let response = server.post("/api/generate-gifts").json(&wizard_body()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_bearer_token_proceeds_anonymously() {
        let (server, mock) = setup_test_server(Some(TEST_KEY)).await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("[]")))
            .mount(&mock)
            .await;

        let response = server
            .post("/api/generate-gifts")
            .add_header(AUTHORIZATION, bearer("not-a-real-token"))
            .json(&wizard_body())
            .await;

        response.assert_status_ok();
    }
}

mod auth {
    use super::*;

    #[tokio::test]
    async fn test_demo_user_can_log_in() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "demo@example.com", "password": "password123"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["user"]["name"], "Demo User");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(body["user"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_returns_401() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "demo@example.com", "password": "wrong"}))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_unknown_email_returns_401() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "nobody@example.com", "password": "password123"}))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_missing_fields_returns_400() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "demo@example.com"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mistyped_login_body_returns_400_envelope() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": 42, "password": "password"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_register_then_login_and_me() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/register")
            .json(&json!({"email": "kim@example.com", "password": "hunter22", "name": "Kim"}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let registered: Value = response.json();
        assert_eq!(registered["message"], "User created successfully");

        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "kim@example.com", "password": "hunter22"}))
            .await;
        response.assert_status_ok();
        let token = response.json::<Value>()["token"].as_str().unwrap().to_string();

        let response = server
            .get("/api/auth/me")
            .add_header(AUTHORIZATION, bearer(&token))
            .await;
        response.assert_status_ok();
        let me: Value = response.json();
        assert_eq!(me["user"]["email"], "kim@example.com");
        assert_eq!(me["user"]["id"], registered["user"]["id"]);
    }

    #[tokio::test]
    async fn test_duplicate_registration_returns_409() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/register")
            .json(&json!({"email": "demo@example.com", "password": "x", "name": "Again"}))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_missing_name_returns_400() {
        let (server, _mock) = setup_test_server(None).await;

        let response = server
            .post("/api/auth/register")
            .json(&json!({"email": "new@example.com", "password": "x"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_me_without_token_returns_401() {
        let (server, _mock) = setup_test_server(None).await;

        server
            .get("/api/auth/me")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
