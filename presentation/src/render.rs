use colored::Colorize;
use domain::catalog::Phase;
use domain::language::LanguageSelector;
use domain::plan::ExecutionPlan;
use domain::planner_state::PlannerState;
use shared::terminal::heading;

use crate::i18n;

pub fn render_phase_list(phases: &[Phase], language: LanguageSelector) -> String {
    let mut out = heading(i18n::PHASES.get(language));
    out.push('\n');
    for (i, phase) in phases.iter().enumerate() {
        out.push_str(&format!(
            "  {} {:<10} {}\n",
            format!("[{}]", i + 1).blue(),
            phase.id,
            phase.title.get(language)
        ));
    }
    out
}

pub fn render_phase(phase: &Phase, language: LanguageSelector) -> String {
    let mut out = heading(phase.title.get(language));
    out.push('\n');
    out.push_str(&format!("{}\n\n", phase.summary.get(language).italic()));
    out.push_str(phase.guidance.get(language));
    out.push_str("\n\n");

    out.push_str(&format!("{}\n", i18n::DOS.get(language).green().bold()));
    for item in phase.dos {
        out.push_str(&format!("  {} {}\n", "✓".green(), item.get(language)));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", i18n::DONTS.get(language).red().bold()));
    for item in phase.donts {
        out.push_str(&format!("  {} {}\n", "✗".red(), item.get(language)));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", i18n::EXAMPLE_PROMPTS.get(language).yellow().bold()));
    for prompt in phase.example_prompts {
        out.push_str(&format!("  > {}\n", prompt.get(language)));
    }
    out
}

pub fn render_plan(plan: &ExecutionPlan, language: LanguageSelector) -> String {
    if plan.is_empty() {
        return format!("{}\n", i18n::EMPTY_PLAN.get(language).yellow());
    }
    let mut out = heading(i18n::PLAN_HEADING.get(language));
    out.push('\n');
    for (i, step) in plan.steps.iter().enumerate() {
        out.push_str(&format!(
            "{} {}\n",
            format!("{} {}.", i18n::STEP.get(language), i + 1).green().bold(),
            step.title.bold()
        ));
        out.push_str(&format!(
            "   {} {}\n",
            format!("{}:", i18n::PROMPT_STRATEGY.get(language)).cyan(),
            step.prompt_strategy
        ));
        out.push_str(&format!(
            "   {} {}\n\n",
            format!("{}:", i18n::RISK.get(language)).red(),
            step.risk
        ));
    }
    out
}

/// Plain markdown for the clipboard.
pub fn plan_to_markdown(plan: &ExecutionPlan, language: LanguageSelector) -> String {
    let mut out = format!("# {}\n\n", i18n::PLAN_HEADING.get(language));
    for (i, step) in plan.steps.iter().enumerate() {
        out.push_str(&format!("{}. **{}**\n", i + 1, step.title));
        out.push_str(&format!(
            "   - {}: {}\n",
            i18n::PROMPT_STRATEGY.get(language),
            step.prompt_strategy
        ));
        out.push_str(&format!("   - {}: {}\n", i18n::RISK.get(language), step.risk));
    }
    out
}

/// What the planner view shows for each state.
pub fn render_state(state: &PlannerState, language: LanguageSelector) -> String {
    match state {
        PlannerState::Idle => format!("{}\n", i18n::TASK_PROMPT.get(language)),
        PlannerState::InFlight => format!("{}\n", i18n::GENERATING.get(language).cyan()),
        PlannerState::Succeeded(plan) => render_plan(plan, language),
        PlannerState::Failed(message) => format!("{}\n", message.red()),
    }
}
