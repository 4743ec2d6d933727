//! Fixed-format guide rendering.
//!
//! Everything here is pure string assembly; no files are touched.

use crate::analyzer::{CommandMention, ProblemDomain};
use crate::domains::title_case;

/// Examples rendered per command at most
pub const MAX_EXAMPLES_PER_COMMAND: usize = 2;

const DESCRIPTION_PLACEHOLDER: &str = "*[Add description]*";
const TRADEOFFS_PLACEHOLDER: &str = "*[Add tradeoffs and when to use]*";
const NO_TOOLS_PLACEHOLDER: &str = "*[No commands found - add tool descriptions]*";
const SINGLE_TOOL_GUIDANCE: &str = "*[Add guidance on when to use this approach]*";
const RELATED_PLACEHOLDER: &str = "*[Add links to related problem guides]*";
const EXAMPLE_EXPLANATION: &str = "# What does this do? [Add explanation]";

const SCENARIOS: &[&str] = &[
    "- *[Add specific scenario when you'd encounter this problem]*",
    "- *[Add another real-world use case]*",
    "- *[Add a third common scenario]*",
];

const AI_PROMPTS: &[&str] = &[
    "**Effective prompts to try:**\n",
    "- \"Show me how to [specific task related to this problem]\"",
    "- \"What's the best way to [another task]?\"",
    "- \"Explain what this command does: [paste command]\"",
    "\n**When asking AI:**",
    "- Be specific about what you want to accomplish",
    "- Mention any constraints (file types, size limits, etc.)",
    "- Ask for explanations, not just commands",
];

/// Render the complete guide for one domain.
pub fn render_guide(domain: &ProblemDomain) -> String {
    format!(
        r#"# Problem: {title}

## What problem does this solve?

{description}

## When do you encounter this?

{scenarios}

## Available approaches

{tools}

## Decision tree

{decision_tree}

## Examples to recognize

{examples}

## Try with AI

{ai_prompts}

## Related problems

{related}

---

*This guide was generated from existing content. Please review and enhance with:*
- *More real-world scenarios*
- *Better decision guidance*
- *Additional examples*
- *Clearer AI prompt templates*
"#,
        title = title_case(&domain.key),
        description = domain.description,
        scenarios = render_scenarios(),
        tools = render_tools(&domain.commands),
        decision_tree = render_decision_tree(&domain.commands),
        examples = render_examples(&domain.commands),
        ai_prompts = render_ai_prompts(),
        related = render_related(),
    )
}

pub fn render_scenarios() -> String {
    SCENARIOS.join("\n")
}

/// One numbered block per command, numbered from 1 in list order.
pub fn render_tools(commands: &[CommandMention]) -> String {
    if commands.is_empty() {
        return NO_TOOLS_PLACEHOLDER.to_string();
    }

    commands
        .iter()
        .enumerate()
        .map(|(i, command)| render_tool(i + 1, command))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tool(number: usize, command: &CommandMention) -> String {
    format!(
        "### {number}. **{name}**\n   - **Best for:** {best_for}\n   - **Recognition:** `{recognition}`\n   - **Tradeoffs:** {tradeoffs}\n",
        name = command.name,
        best_for = command
            .description
            .as_deref()
            .unwrap_or(DESCRIPTION_PLACEHOLDER),
        recognition = recognition_pattern(&command.name),
        tradeoffs = TRADEOFFS_PLACEHOLDER,
    )
}

/// Generic invocation shape shown for a command
pub fn recognition_pattern(name: &str) -> String {
    format!("{name} [options] [arguments]")
}

pub fn render_decision_tree(commands: &[CommandMention]) -> String {
    if commands.len() <= 1 {
        return SINGLE_TOOL_GUIDANCE.to_string();
    }

    let mut lines = vec!["**Which tool should I use?**\n".to_string()];
    lines.extend(
        commands
            .iter()
            .map(|c| format!("- Use `{}` when: *[add condition]*", c.name)),
    );
    lines.join("\n")
}

/// Up to [`MAX_EXAMPLES_PER_COMMAND`] fenced examples per command, or a
/// single placeholder block when the domain has none.
pub fn render_examples(commands: &[CommandMention]) -> String {
    let mut blocks: Vec<String> = commands
        .iter()
        .flat_map(|c| c.examples.iter().take(MAX_EXAMPLES_PER_COMMAND))
        .map(|example| format!("```bash\n{example}\n{EXAMPLE_EXPLANATION}\n```\n"))
        .collect();

    if blocks.is_empty() {
        blocks.push(format!(
            "```bash\n# [Add example command]\n{EXAMPLE_EXPLANATION}\n```\n"
        ));
    }

    blocks.join("\n")
}

pub fn render_ai_prompts() -> String {
    AI_PROMPTS.join("\n")
}

pub fn render_related() -> String {
    RELATED_PLACEHOLDER.to_string()
}
