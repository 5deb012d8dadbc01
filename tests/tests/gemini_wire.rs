use application::plan_service::PlanRequester;
use domain::generation::Credential;
use domain::language::LanguageSelector;
use infrastructure::config::Config;
use infrastructure::gemini_client::GeminiClient;
use mockito::Matcher;
use serde_json::json;
use tests::SCENARIO_A_BODY;

fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn config_for(server: &mockito::Server, api_key: Option<&str>) -> Config {
    let url = server.url();
    Config::from_lookup(|key| match key {
        "GEMINI_API_KEY" => api_key.map(str::to_string),
        "GEMINI_ENDPOINT" => Some(url.clone()),
        "GEMINI_MODEL" => Some("gemini-test".to_string()),
        _ => None,
    })
}

#[tokio::test]
async fn end_to_end_plan_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .match_header("x-goog-api-key", "secret")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Add a login page".to_string()),
            Matcher::PartialJson(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {
                        "type": "OBJECT",
                        "required": ["steps"]
                    }
                }
            })),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(SCENARIO_A_BODY))
        .expect(1)
        .create_async()
        .await;

    let requester = PlanRequester::from_config(&config_for(&server, Some("secret")));
    let plan = requester
        .generate_plan("Add a login page", LanguageSelector::En)
        .await
        .expect("plan");

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.steps[0].risk, "Hallucinated fields");
    mock.assert_async().await;
}

#[tokio::test]
async fn absent_credential_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let requester = PlanRequester::from_config(&config_for(&server, None));
    assert!(!requester.has_credential());
    assert_eq!(requester.generate_plan("Add a login page", LanguageSelector::Zh).await, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_is_no_result() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-test:generateContent")
        .with_status(500)
        .with_body(r#"{"error":{"code":500,"message":"internal"}}"#)
        .create_async()
        .await;

    let requester = PlanRequester::from_config(&config_for(&server, Some("secret")));
    assert_eq!(requester.generate_plan("task", LanguageSelector::En).await, None);
}

#[tokio::test]
async fn empty_candidate_and_schema_violation_are_no_result() {
    let mut server = mockito::Server::new_async().await;
    let _empty = server
        .mock("POST", "/models/empty:generateContent")
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;
    let _bad = server
        .mock("POST", "/models/bad:generateContent")
        .with_status(200)
        .with_body(envelope("{}"))
        .create_async()
        .await;

    let credential = Credential::from_value(Some("secret".to_string()));
    let empty = PlanRequester::new(GeminiClient::new(server.url()), credential.clone(), "empty");
    let bad = PlanRequester::new(GeminiClient::new(server.url()), credential, "bad");

    assert_eq!(empty.generate_plan("task", LanguageSelector::En).await, None);
    assert_eq!(bad.generate_plan("task", LanguageSelector::En).await, None);
}
