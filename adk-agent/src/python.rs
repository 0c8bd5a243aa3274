use crate::AgentConfig;

/// Renders an [`AgentConfig`] as the `agent.py` module the Python ADK
/// runtime loads, binding it to `root_agent`.
pub fn render_agent_module(config: &AgentConfig) -> String {
    let tool_names = config.tool_names();
    let mut out = String::from("from google.adk.agents import Agent\n");
    if !tool_names.is_empty() {
        out.push_str(&format!("from google.adk.tools import {}\n", tool_names.join(", ")));
    }
    out.push('\n');
    out.push_str("root_agent = Agent(\n");
    out.push_str(&format!("    name={},\n", py_str(config.name())));
    out.push_str(&format!("    model={},\n", py_str(config.model())));
    out.push_str(&format!("    instruction={},\n", py_str(config.instruction())));
    out.push_str(&format!("    tools=[{}]\n", tool_names.join(", ")));
    out.push_str(")\n");
    out
}

/// Package marker that imports the agent module.
pub fn render_package_init() -> &'static str {
    "from . import agent\n"
}

fn py_str(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
