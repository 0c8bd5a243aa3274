use adk_extension::{inspect, scaffold};
use std::path::Path;

fn write_agent(dir: &Path, source: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("agent.py"), source).unwrap();
}

#[tokio::test]
async fn test_create_agent_writes_project() {
    let dir = tempfile::tempdir().unwrap();
    let agent_dir = scaffold::create_agent("weather_agent", dir.path()).await.unwrap();

    assert_eq!(agent_dir, dir.path().join("weather_agent"));
    let module = std::fs::read_to_string(agent_dir.join("agent.py")).unwrap();
    assert!(module.contains("    name=\"weather_agent\",\n"));
    assert!(module.contains("    model=\"gemini-1.5-flash\",\n"));
    assert!(module.contains("    tools=[google_search]\n"));
    assert_eq!(
        std::fs::read_to_string(agent_dir.join("__init__.py")).unwrap(),
        "from . import agent\n"
    );
}

#[tokio::test]
async fn test_create_agent_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    write_agent(&dir.path().join("weather_agent"), "stale");
    let agent_dir = scaffold::create_agent("weather_agent", dir.path()).await.unwrap();
    let module = std::fs::read_to_string(agent_dir.join("agent.py")).unwrap();
    assert!(module.starts_with("from google.adk.agents import Agent\n"));
}

#[tokio::test]
async fn test_create_agent_rejects_traversal() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scaffold::create_agent("../escape", dir.path()).await.is_err());
    assert!(!dir.path().join("../escape").exists());
}

#[tokio::test]
async fn test_scaffolded_agent_inspects_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let agent_dir = scaffold::create_agent("weather_agent", dir.path()).await.unwrap();

    assert_eq!(inspect::list_agent_tools(&agent_dir).await.unwrap(), vec!["google_search"]);
    assert!(inspect::scan_agent_safety(&agent_dir).await.unwrap().is_empty());
    assert_eq!(
        inspect::visualize_agent_system(&agent_dir).await.unwrap(),
        "graph TD;\n  weather_agent(weather_agent);\n"
    );
}

#[tokio::test]
async fn test_list_agent_tools_missing_module() {
    let dir = tempfile::tempdir().unwrap();
    assert!(inspect::list_agent_tools(dir.path()).await.is_err());
}

#[tokio::test]
async fn test_scan_agent_safety_reports_module_path() {
    let dir = tempfile::tempdir().unwrap();
    write_agent(dir.path(), "import os\n\ndef run(cmd):\n    os.system(cmd)\n");

    let findings = inspect::scan_agent_safety(dir.path()).await.unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file, dir.path().join("agent.py").display().to_string());
    assert_eq!(findings[0].line, 4);
    assert_eq!(findings[0].issue, "Use of dangerous function: os.system(");
}

#[tokio::test]
async fn test_visualize_missing_root_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(inspect::visualize_agent_system(dir.path()).await.unwrap(), "");
}

#[tokio::test]
async fn test_visualize_expands_sub_agent_projects() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("coordinator");
    write_agent(&root, "root_agent = Agent(name='coordinator', sub_agents=[billing, support])\n");
    write_agent(&root.join("billing"), "root_agent = Agent(name='billing', sub_agents=[refunds])\n");

    let mermaid = inspect::visualize_agent_system(&root).await.unwrap();
    assert_eq!(
        mermaid,
        concat!(
            "graph TD;\n",
            "  coordinator(coordinator);\n",
            "  coordinator --> billing;\n",
            "  coordinator --> support;\n",
            "  billing --> refunds;\n",
        )
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_visualize_symlink_cycle_terminates() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    write_agent(&root, "root_agent = Agent(name='root', sub_agents=[loop_agent])\n");
    std::os::unix::fs::symlink(&root, root.join("loop_agent")).unwrap();

    let mermaid = inspect::visualize_agent_system(&root).await.unwrap();
    assert_eq!(mermaid, "graph TD;\n  root(root);\n  root --> loop_agent;\n");
}
