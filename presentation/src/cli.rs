use application::guide_service::GuideService;
use application::plan_service::PlanRequester;
use clap::{Parser, Subcommand};
use colored::Colorize;
use domain::catalog::Phase;
use domain::generation::GenerationClient;
use domain::language::LanguageSelector;
use domain::planner_state::PlannerState;
use infrastructure::config::Config;
use infrastructure::gemini_client::GeminiClient;
use shared::confirmation::{ask_choice, ask_confirmation, ask_text};
use shared::terminal::clear_screen;
use shared::types::Result;
use shared::utils::normalize_task;

use crate::clipboard::copy_to_clipboard;
use crate::i18n;
use crate::render::{plan_to_markdown, render_phase, render_phase_list, render_state};

#[derive(Parser, Debug)]
#[command(name = "vibe_sop")]
#[command(about = "Bilingual SOP guide for AI-assisted coding, with a Gemini-backed plan generator")]
pub struct Cli {
    /// Display and plan language: en or zh (default: VIBE_SOP_LANG, else en)
    #[arg(long, short, global = true)]
    pub lang: Option<LanguageSelector>,

    /// Verbose logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the guide's phases
    Phases,

    /// Show one phase by id or number
    Show { phase: String },

    /// Generate an execution plan for a coding task
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        /// Copy the plan to the clipboard as markdown
        #[arg(long)]
        copy: bool,

        /// The task description
        #[arg(trailing_var_arg = true, required = true)]
        task: Vec<String>,
    },
}

pub struct CliApp<C: GenerationClient = GeminiClient> {
    guide: GuideService,
    requester: PlanRequester<C>,
    language: LanguageSelector,
    state: PlannerState,
}

impl CliApp<GeminiClient> {
    pub fn new(config: &Config, language: Option<LanguageSelector>) -> Self {
        Self::with_requester(
            PlanRequester::from_config(config),
            language.unwrap_or(config.language),
        )
    }
}

impl<C: GenerationClient> CliApp<C> {
    pub fn with_requester(requester: PlanRequester<C>, language: LanguageSelector) -> Self {
        Self {
            guide: GuideService::new(),
            requester,
            language,
            state: PlannerState::default(),
        }
    }

    pub fn language(&self) -> LanguageSelector {
        self.language
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    /// Returns `false` when the command did not succeed (unknown phase, no plan).
    pub async fn run(&mut self, cli: Cli) -> Result<bool> {
        match cli.command {
            Some(Command::Phases) => {
                print!("{}", render_phase_list(self.guide.phases(), self.language));
                Ok(true)
            }
            Some(Command::Show { phase }) => self.handle_show(&phase),
            Some(Command::Plan { json, copy, task }) => {
                self.handle_plan(&task.join(" "), json, copy).await
            }
            None => {
                self.handle_browse().await?;
                Ok(true)
            }
        }
    }

    /// Submit a task through the planner state machine. Whitespace-only
    /// tasks never reach the requester.
    pub async fn submit_task(&mut self, raw_task: &str) -> &PlannerState {
        let Some(task) = normalize_task(raw_task) else {
            if !self.state.is_in_flight() {
                self.state = PlannerState::Failed(i18n::EMPTY_TASK.get(self.language).to_string());
            }
            return &self.state;
        };
        if !self.state.submit() {
            tracing::debug!("ignoring submit while a plan request is in flight");
            return &self.state;
        }
        println!("{}", render_state(&self.state, self.language).trim_end());

        let outcome = self.requester.generate_plan(&task, self.language).await;
        self.state.resolve(outcome, i18n::PLAN_FAILED.get(self.language));
        &self.state
    }

    fn handle_show(&self, key: &str) -> Result<bool> {
        match self.guide.find(key) {
            Some(phase) => {
                print!("{}", render_phase(phase, self.language));
                Ok(true)
            }
            None => {
                eprintln!(
                    "{} '{}'. {}: {}",
                    i18n::UNKNOWN_PHASE.get(self.language).red(),
                    key,
                    i18n::AVAILABLE_PHASES.get(self.language),
                    self.guide.ids().join(", ")
                );
                Ok(false)
            }
        }
    }

    async fn handle_plan(&mut self, task: &str, json: bool, copy: bool) -> Result<bool> {
        if !self.requester.has_credential() {
            eprintln!("{}", i18n::NO_API_KEY.get(self.language).yellow());
        }

        let language = self.language;
        let state = self.submit_task(task).await;
        let Some(plan) = state.plan() else {
            eprint!("{}", render_state(state, language));
            return Ok(false);
        };

        if json {
            println!("{}", serde_json::to_string_pretty(plan)?);
        } else {
            print!("{}", render_state(state, language));
        }

        if copy {
            match copy_to_clipboard(&plan_to_markdown(plan, language)) {
                Ok(()) => eprintln!("{}", i18n::COPIED.get(language).green()),
                Err(err) => eprintln!("{} {}", i18n::COPY_FAILED.get(language).red(), err),
            }
        }
        Ok(true)
    }

    async fn handle_browse(&mut self) -> Result<()> {
        loop {
            clear_screen()?;
            let phases = self.guide.phases();
            println!("{}", render_phase_list(phases, self.language));

            let mut items: Vec<String> = phases
                .iter()
                .map(|p| p.title.get(self.language).to_string())
                .collect();
            items.push(i18n::SWITCH_LANGUAGE.get(self.language).to_string());
            items.push(i18n::QUIT.get(self.language).to_string());

            let choice = ask_choice(i18n::MENU_PROMPT.get(self.language), &items, 0)?;
            if choice == phases.len() {
                self.language = self.language.toggle();
                continue;
            }
            if choice > phases.len() {
                return Ok(());
            }

            if !self.show_phase(&phases[choice]).await? {
                return Ok(());
            }
        }
    }

    /// Returns `false` when the user wants to leave.
    async fn show_phase(&mut self, phase: &Phase) -> Result<bool> {
        clear_screen()?;
        println!("{}", render_phase(phase, self.language));

        if phase.interactive_planner {
            self.run_planner().await?;
        }
        ask_confirmation(i18n::BACK_TO_MENU.get(self.language), true)
    }

    async fn run_planner(&mut self) -> Result<()> {
        println!("{}", shared::terminal::heading(i18n::PLANNER_HEADING.get(self.language)));
        if !self.requester.has_credential() {
            println!("{}", i18n::NO_API_KEY.get(self.language).yellow());
            return Ok(());
        }

        let mut prompt = i18n::GENERATE_NOW;
        while ask_confirmation(prompt.get(self.language), true)? {
            let task = ask_text(i18n::TASK_PROMPT.get(self.language))?;
            let language = self.language;
            let state = self.submit_task(&task).await;
            println!("{}", render_state(state, language));
            prompt = i18n::GENERATE_ANOTHER;
        }
        self.state.reset();
        Ok(())
    }
}
