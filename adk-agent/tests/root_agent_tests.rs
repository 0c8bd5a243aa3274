use adk_agent::{AgentConfig, AgentConfigBuilder, root_agent};
use adk_tool::GoogleSearchTool;
use std::sync::Arc;

#[test]
fn test_root_agent_name() {
    assert_eq!(root_agent().name(), "my-new-agent");
}

#[test]
fn test_root_agent_model() {
    assert_eq!(root_agent().model(), "gemini-1.5-flash");
}

#[test]
fn test_root_agent_instruction() {
    assert_eq!(root_agent().instruction(), "You are a helpful assistant.");
}

#[test]
fn test_root_agent_has_only_google_search() {
    let agent = root_agent();
    assert_eq!(agent.tools().len(), 1);
    assert_eq!(agent.tools()[0].name(), "google_search");
}

#[test]
fn test_root_agent_is_idempotent() {
    let first = root_agent();
    let second = root_agent();
    assert_eq!(first, second);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn test_builder_matches_root_agent() {
    let built: AgentConfig = AgentConfigBuilder::new("my-new-agent")
        .model("gemini-1.5-flash")
        .instruction("You are a helpful assistant.")
        .tool(Arc::new(GoogleSearchTool::new()))
        .build()
        .unwrap();
    assert_eq!(built, root_agent());
}

#[test]
fn test_debug_lists_tool_names() {
    let debug = format!("{:?}", root_agent());
    assert!(debug.contains("google_search"));
    assert!(debug.contains("gemini-1.5-flash"));
}
