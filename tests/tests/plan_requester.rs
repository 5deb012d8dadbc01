use application::plan_service::PlanRequester;
use domain::generation::Credential;
use domain::language::LanguageSelector;
use domain::plan::{PlanError, PlanStep};
use tests::{test_credential, CountingClient, LogCapture, SCENARIO_A_BODY};
use tracing::Level;

fn requester(client: &CountingClient, credential: Credential) -> PlanRequester<CountingClient> {
    PlanRequester::new(client.clone(), credential, "gemini-test")
}

#[tokio::test]
async fn scenario_a_returns_the_single_step() {
    let (_logs, _guard) = LogCapture::install();
    let client = CountingClient::responding(SCENARIO_A_BODY);

    let plan = requester(&client, test_credential())
        .generate_plan("Add a login page", LanguageSelector::En)
        .await
        .expect("plan");

    assert_eq!(
        plan.steps,
        vec![PlanStep {
            title: "Define types".to_string(),
            prompt_strategy: "Ask for interface only".to_string(),
            risk: "Hallucinated fields".to_string(),
        }]
    );
    assert_eq!(client.calls(), 1);

    let sent = &client.requests()[0];
    assert_eq!(sent.model, "gemini-test");
    assert!(sent.instruction.contains("Add a login page"));
    assert!(sent.instruction.contains("Respond in English."));
    assert_eq!(
        sent.response_schema["properties"]["steps"]["items"]["required"],
        serde_json::json!(["title", "promptStrategy", "risk"])
    );
}

#[tokio::test]
async fn scenario_b_missing_steps_field_is_no_result() {
    let (logs, _guard) = LogCapture::install();
    let client = CountingClient::responding("{}");

    let outcome = requester(&client, test_credential())
        .generate_plan("Add a login page", LanguageSelector::En)
        .await;

    assert_eq!(outcome, None);
    assert_eq!(client.calls(), 1);
    assert_eq!(logs.at_level(Level::WARN).len(), 1);
}

#[tokio::test]
async fn scenario_c_and_p5_absent_credential_never_touches_transport() {
    let (_logs, _guard) = LogCapture::install();
    let client = CountingClient::responding(SCENARIO_A_BODY);
    let requester = requester(&client, Credential::Absent);

    for language in [LanguageSelector::En, LanguageSelector::Zh, LanguageSelector::En] {
        assert_eq!(requester.generate_plan("Add a login page", language).await, None);
    }
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn scenario_d_transport_fault_logs_one_diagnostic() {
    let (logs, _guard) = LogCapture::install();
    let client = CountingClient::failing(PlanError::Transport("connection refused".to_string()));

    let outcome = requester(&client, test_credential())
        .generate_plan("Add a login page", LanguageSelector::Zh)
        .await;

    assert_eq!(outcome, None);
    assert_eq!(client.calls(), 1);
    let warnings = logs.at_level(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("connection refused"));
}

#[tokio::test]
async fn p2_preserves_order_and_values_for_many_steps() {
    let (_logs, _guard) = LogCapture::install();
    let steps: Vec<serde_json::Value> = (0..7)
        .map(|i| {
            serde_json::json!({
                "title": format!("Step title {i}"),
                "promptStrategy": format!("  strategy {i}  "),
                "risk": format!("risk {i}"),
            })
        })
        .collect();
    let body = serde_json::json!({ "steps": steps }).to_string();
    let client = CountingClient::responding(body);

    let plan = requester(&client, test_credential())
        .generate_plan("Migrate the database layer", LanguageSelector::En)
        .await
        .expect("plan");

    assert_eq!(plan.len(), 7);
    for (i, step) in plan.steps.iter().enumerate() {
        assert_eq!(step.title, format!("Step title {i}"));
        assert_eq!(step.prompt_strategy, format!("  strategy {i}  "));
        assert_eq!(step.risk, format!("risk {i}"));
    }
}

#[tokio::test]
async fn p2_zero_steps_is_an_empty_plan() {
    let (_logs, _guard) = LogCapture::install();
    let client = CountingClient::responding(r#"{"steps":[]}"#);

    let plan = requester(&client, test_credential())
        .generate_plan("Nothing to do", LanguageSelector::En)
        .await;

    assert_eq!(plan.map(|p| p.len()), Some(0));
}

#[tokio::test]
async fn p3_contract_violations_are_no_result() {
    let (logs, _guard) = LogCapture::install();
    let bodies = [
        "<html>Service Unavailable</html>",
        r#"{"steps":[{"title":"a","promptStrategy":"b"}]}"#,
        r#"{"steps":[{"title":"a","promptStrategy":"b","risk":"c"},{"promptStrategy":"b","risk":"c"}]}"#,
        r#"{"steps":[{"title":"a","promptStrategy":null,"risk":"c"}]}"#,
        r#"{"steps":"none"}"#,
        r#"[]"#,
    ];

    for body in bodies {
        let client = CountingClient::responding(body);
        let outcome = requester(&client, test_credential())
            .generate_plan("task", LanguageSelector::En)
            .await;
        assert_eq!(outcome, None, "body {body} should be rejected");
    }
    assert_eq!(logs.at_level(Level::WARN).len(), bodies.len());
}

#[tokio::test]
async fn p4_every_transport_error_kind_is_contained() {
    let (_logs, _guard) = LogCapture::install();
    for error in [
        PlanError::Transport("timeout".to_string()),
        PlanError::EmptyResponse,
    ] {
        let client = CountingClient::failing(error);
        let outcome = requester(&client, test_credential())
            .generate_plan("task", LanguageSelector::En)
            .await;
        assert_eq!(outcome, None);
    }
}

#[tokio::test]
async fn request_plan_exposes_the_failure_reason() {
    let (_logs, _guard) = LogCapture::install();
    let absent = CountingClient::responding(SCENARIO_A_BODY);
    assert_eq!(
        requester(&absent, Credential::Absent)
            .request_plan("task", LanguageSelector::En)
            .await,
        Err(PlanError::MissingCredential)
    );

    let empty = CountingClient::failing(PlanError::EmptyResponse);
    assert_eq!(
        requester(&empty, test_credential())
            .request_plan("task", LanguageSelector::En)
            .await,
        Err(PlanError::EmptyResponse)
    );
}
