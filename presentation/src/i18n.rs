//! Interface strings. Guide content lives in `domain::catalog`.

use domain::language::LocalizedText as T;

pub const PHASES: T = T::new("Phases", "阶段");
pub const MENU_PROMPT: T = T::new("Choose a phase", "选择一个阶段");
pub const SWITCH_LANGUAGE: T = T::new("切换到中文", "Switch to English");
pub const QUIT: T = T::new("Quit", "退出");
pub const BACK_TO_MENU: T = T::new("Back to the phase list?", "返回阶段列表？");

pub const DOS: T = T::new("Do", "建议");
pub const DONTS: T = T::new("Don't", "避免");
pub const EXAMPLE_PROMPTS: T = T::new("Example prompts", "示例提示词");

pub const PLANNER_HEADING: T = T::new("Execution plan generator", "执行计划生成器");
pub const GENERATE_NOW: T = T::new("Generate an execution plan for your task?", "为你的任务生成执行计划吗？");
pub const GENERATE_ANOTHER: T = T::new("Generate another plan?", "再生成一个计划吗？");
pub const TASK_PROMPT: T = T::new("Describe your coding task", "描述你的编程任务");
pub const EMPTY_TASK: T = T::new("Please enter a task description.", "请输入任务描述。");
pub const GENERATING: T = T::new("Generating plan...", "正在生成计划……");
pub const ALREADY_RUNNING: T = T::new("A plan is already being generated.", "计划正在生成中。");
pub const PLAN_FAILED: T = T::new(
    "Could not generate a plan. Check your API key and connection, then try again.",
    "无法生成计划。请检查 API 密钥和网络连接后重试。",
);
pub const NO_API_KEY: T = T::new(
    "No API key configured (GEMINI_API_KEY); plan generation is unavailable.",
    "未配置 API 密钥（GEMINI_API_KEY），无法生成计划。",
);
pub const EMPTY_PLAN: T = T::new("The service returned a plan with no steps.", "服务返回了一个没有步骤的计划。");

pub const PLAN_HEADING: T = T::new("Execution plan", "执行计划");
pub const STEP: T = T::new("Step", "步骤");
pub const PROMPT_STRATEGY: T = T::new("Prompt strategy", "提示策略");
pub const RISK: T = T::new("Risk", "风险");

pub const COPIED: T = T::new("Plan copied to clipboard.", "计划已复制到剪贴板。");
pub const COPY_FAILED: T = T::new("Clipboard copy failed:", "复制到剪贴板失败：");
pub const UNKNOWN_PHASE: T = T::new("Unknown phase", "未知阶段");
pub const AVAILABLE_PHASES: T = T::new("Available phases", "可用阶段");
