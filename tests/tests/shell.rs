use application::plan_service::PlanRequester;
use domain::generation::Credential;
use domain::language::LanguageSelector;
use domain::planner_state::PlannerState;
use presentation::cli::CliApp;
use presentation::i18n;
use tests::{test_credential, CountingClient, SCENARIO_A_BODY};

fn app(client: &CountingClient, credential: Credential, language: LanguageSelector) -> CliApp<CountingClient> {
    CliApp::with_requester(PlanRequester::new(client.clone(), credential, "m"), language)
}

#[tokio::test]
async fn shell_settles_on_plan_then_clears_on_next_submit() {
    let client = CountingClient::responding(SCENARIO_A_BODY);
    let mut shell = app(&client, test_credential(), LanguageSelector::En);

    assert_eq!(shell.state(), &PlannerState::Idle);
    let state = shell.submit_task("Add a login page").await;
    assert_eq!(state.plan().map(|p| p.len()), Some(1));

    shell.submit_task("Add a signup page").await;
    assert_eq!(client.calls(), 2);
    assert!(client.requests()[1].instruction.contains("Add a signup page"));
}

#[tokio::test]
async fn shell_shows_generic_localized_error() {
    let client = CountingClient::responding("not json");
    let mut shell = app(&client, test_credential(), LanguageSelector::Zh);

    let state = shell.submit_task("添加登录页").await;
    assert_eq!(state.error(), Some(i18n::PLAN_FAILED.zh));
    assert!(client.requests()[0].instruction.contains("Simplified Chinese"));
}

#[tokio::test]
async fn shell_rejects_whitespace_task_before_requesting() {
    let client = CountingClient::responding(SCENARIO_A_BODY);
    let mut shell = app(&client, test_credential(), LanguageSelector::En);

    let state = shell.submit_task(" \t\n ").await;
    assert_eq!(state.error(), Some(i18n::EMPTY_TASK.en));
    assert_eq!(client.calls(), 0);
    assert_eq!(shell.language(), LanguageSelector::En);
}
