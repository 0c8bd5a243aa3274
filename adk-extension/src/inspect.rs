//! Static inspection of Python ADK agent projects.
//!
//! Everything here works on the text of `<agent_path>/agent.py`; nothing is
//! imported or executed.

use adk_core::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const AGENT_MODULE: &str = "agent.py";

static TOOLS_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tools=\[([\s\S]*?)\]").expect("valid regex"));
static SUB_AGENTS_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sub_agents=\[([\s\S]*?)\]").expect("valid regex"));
static HARDCODED_SECRET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(api_key|password|secret)['"\s=:]+['"\w-]{16,}"#).expect("valid regex")
});

const DANGEROUS_CALLS: [&str; 3] = ["eval(", "exec(", "os.system("];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    /// 1-based line of the first occurrence.
    pub line: usize,
    pub issue: String,
}

fn list_items(pattern: &Regex, source: &str) -> Vec<String> {
    pattern
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|items| {
            items
                .as_str()
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Entries of the first `tools=[...]` list in `source`.
pub fn tool_names(source: &str) -> Vec<String> {
    list_items(&TOOLS_LIST, source)
}

/// Entries of the first `sub_agents=[...]` list in `source`.
pub fn sub_agent_names(source: &str) -> Vec<String> {
    list_items(&SUB_AGENTS_LIST, source)
}

fn line_of(source: &str, byte_offset: usize) -> usize {
    source[..byte_offset].matches('\n').count() + 1
}

/// Dangerous calls and hardcoded secrets in `source`, reported against `file`.
pub fn scan_source(file: &str, source: &str) -> Vec<Finding> {
    let mut findings: Vec<Finding> = DANGEROUS_CALLS
        .iter()
        .filter_map(|call| {
            source.find(call).map(|offset| Finding {
                file: file.to_string(),
                line: line_of(source, offset),
                issue: format!("Use of dangerous function: {call}"),
            })
        })
        .collect();

    if let Some(found) = HARDCODED_SECRET.find(source) {
        findings.push(Finding {
            file: file.to_string(),
            line: line_of(source, found.start()),
            issue: "Potential hardcoded secret found.".to_string(),
        });
    }
    findings
}

fn agent_module(agent_path: &Path) -> PathBuf {
    agent_path.join(AGENT_MODULE)
}

fn display_name(agent_path: &Path) -> String {
    agent_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| agent_path.display().to_string())
}

/// Tools declared by the agent at `agent_path`.
pub async fn list_agent_tools(agent_path: impl AsRef<Path>) -> Result<Vec<String>> {
    let source = tokio::fs::read_to_string(agent_module(agent_path.as_ref())).await?;
    Ok(tool_names(&source))
}

/// Security findings for the agent at `agent_path`.
pub async fn scan_agent_safety(agent_path: impl AsRef<Path>) -> Result<Vec<Finding>> {
    let module = agent_module(agent_path.as_ref());
    let source = tokio::fs::read_to_string(&module).await?;
    Ok(scan_source(&module.display().to_string(), &source))
}

/// Mermaid flowchart of the agent at `agent_path` and its sub-agents.
///
/// A sub-agent whose project lives in `<agent_path>/<name>/` is expanded in
/// turn; others appear as leaves. Empty when the root has no `agent.py`.
pub async fn visualize_agent_system(agent_path: impl AsRef<Path>) -> Result<String> {
    let root_path = agent_path.as_ref().to_path_buf();
    if !tokio::fs::try_exists(agent_module(&root_path)).await? {
        return Ok(String::new());
    }

    let root_name = display_name(&root_path);
    let mut mermaid = format!("graph TD;\n  {root_name}({root_name});\n");

    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut queue: VecDeque<(PathBuf, String)> = VecDeque::from([(root_path, root_name)]);

    while let Some((path, name)) = queue.pop_front() {
        // Symlinked project directories resolve to the same real path.
        let Ok(resolved) = tokio::fs::canonicalize(&path).await else {
            continue;
        };
        if !visited.insert(resolved) {
            continue;
        }
        let module = agent_module(&path);
        if !tokio::fs::try_exists(&module).await? {
            continue;
        }
        let source = tokio::fs::read_to_string(&module).await?;
        for sub_agent in sub_agent_names(&source) {
            mermaid.push_str(&format!("  {name} --> {sub_agent};\n"));
            queue.push_back((path.join(&sub_agent), sub_agent));
        }
    }

    Ok(mermaid)
}
