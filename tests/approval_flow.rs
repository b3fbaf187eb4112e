//! End-to-end turns through classify → stage → approve/cancel → record

use std::sync::Arc;

use toolgate::session::{Session, CANCELLED_REPLY, NO_MATCH_REPLY};
use toolgate::tools::interpreter_exists;
use toolgate::{Config, Role, ToolRegistry, TurnOutcome};

fn session() -> Session {
    Session::new(Arc::new(ToolRegistry::new(&Config::default())))
}

#[tokio::test]
async fn arithmetic_query_round_trip() {
    let mut session = session();

    let outcome = session.submit("125 * 48").await.unwrap();
    assert_eq!(outcome, TurnOutcome::AwaitingApproval);

    let draft = session.pending().unwrap();
    assert_eq!(draft.tool.name(), "calculator");
    assert_eq!(draft.display_params["expression"], "125 * 48");

    let result = session.approve().await.unwrap();
    assert_eq!(result, "Result: 6000");

    // user query + one execution record
    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, "Result: 6000");
    assert!(!session.is_pending());
}

#[tokio::test]
async fn factorial_program_computes_120() {
    let mut session = session();

    let outcome = session.submit("factorial of 5").await.unwrap();
    assert_eq!(outcome, TurnOutcome::AwaitingApproval);

    let draft = session.pending().unwrap();
    assert_eq!(draft.tool.name(), "python");
    assert!(draft.display_params["code"].contains("n = 5"));

    // running the generated program needs an interpreter on PATH
    if !interpreter_exists("python3").await {
        return;
    }

    let result = session.approve().await.unwrap();
    assert!(result.contains("120"), "unexpected output: {}", result);
}

#[tokio::test]
async fn unconfigured_weather_key_is_a_rendered_tool_error() {
    let mut session = session();

    session.submit("weather in Tokyo").await.unwrap();
    assert_eq!(session.pending().unwrap().display_params["city"], "Tokyo");

    let result = session.approve().await.unwrap();
    assert_eq!(result, "Error: Weather API key not configured.");

    // the failure is one ordinary record; the conversation continues
    assert_eq!(session.messages().len(), 2);
    let outcome = session.submit("what time is it").await.unwrap();
    assert_eq!(outcome, TurnOutcome::AwaitingApproval);
}

#[tokio::test]
async fn country_query_drafts_the_lookup() {
    let mut session = session();

    session.submit("capital of France").await.unwrap();
    let draft = session.pending().unwrap();
    assert_eq!(draft.tool.name(), "country");
    assert_eq!(draft.display_params["country"], "France");

    // cancelling never reaches the network
    session.cancel().unwrap();
    assert_eq!(session.messages().last().unwrap().content, CANCELLED_REPLY);
}

#[tokio::test]
async fn unmatched_query_bypasses_the_gate() {
    let mut session = session();

    let outcome = session.submit("what is quantum entanglement").await.unwrap();
    assert_eq!(outcome, TurnOutcome::Replied(NO_MATCH_REPLY.to_string()));
    assert!(!session.is_pending());
}

#[tokio::test]
async fn edit_before_approve_executes_the_edited_expression() {
    let mut session = session();

    session.submit("calculate 125 * 48 for me please").await.unwrap();
    // "calculate" routes into the code category, so force a calculator turn
    session.clear();

    session.submit("125 * 48").await.unwrap();
    session.edit("expression", "2+2").unwrap();

    let result = session.approve().await.unwrap();
    assert_eq!(result, "Result: 4");
}
