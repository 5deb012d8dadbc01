//! Static guide content: the phases of working with an AI coding assistant.
//!
//! Everything here is compiled in and never mutated.

use crate::language::LocalizedText as T;

#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub id: &'static str,
    pub title: T,
    pub summary: T,
    pub guidance: T,
    pub dos: &'static [T],
    pub donts: &'static [T],
    pub example_prompts: &'static [T],
    /// The decomposition phase hosts the interactive plan generator.
    pub interactive_planner: bool,
}

pub static PHASES: &[Phase] = &[
    Phase {
        id: "context",
        title: T::new("Context Setup", "上下文准备"),
        summary: T::new(
            "Give the assistant the ground truth before asking it for anything.",
            "在提出任何请求之前，先让助手掌握真实的项目背景。",
        ),
        guidance: T::new(
            "Collect the files, types, conventions and constraints the task touches. \
             State the language version, frameworks and the coding style you expect. \
             The assistant only knows what is in its context window.",
            "收集任务涉及的文件、类型、约定和约束。说明语言版本、框架以及期望的代码风格。\
             助手只知道上下文窗口里的内容。",
        ),
        dos: &[
            T::new(
                "Paste the relevant type definitions and interfaces.",
                "粘贴相关的类型定义和接口。",
            ),
            T::new(
                "Name the framework versions and build tools in use.",
                "写明正在使用的框架版本和构建工具。",
            ),
            T::new(
                "Link or quote existing code that shows the house style.",
                "引用能体现团队风格的现有代码。",
            ),
        ],
        donts: &[
            T::new(
                "Dump the whole repository into the prompt.",
                "把整个仓库一股脑塞进提示词。",
            ),
            T::new(
                "Assume the assistant remembers earlier sessions.",
                "默认助手记得之前的会话。",
            ),
        ],
        example_prompts: &[
            T::new(
                "Here are our `User` and `Session` types and the router file. We use React 18 with TypeScript strict mode. Acknowledge and summarize the constraints before writing code.",
                "这是我们的 `User` 和 `Session` 类型以及路由文件。我们使用 React 18 和 TypeScript 严格模式。请先复述这些约束，再开始写代码。",
            ),
        ],
        interactive_planner: false,
    },
    Phase {
        id: "decompose",
        title: T::new("Task Decomposition", "任务拆解"),
        summary: T::new(
            "Split the task into small, verifiable steps before any code is written.",
            "在写代码之前，把任务拆成可验证的小步骤。",
        ),
        guidance: T::new(
            "Large requests produce large, unreviewable diffs. Break the work into phases \
             that each end in something you can run or read in a few minutes. For every \
             step decide how you will prompt for it and what is most likely to go wrong.",
            "大请求会产生难以审查的大改动。把工作拆成若干阶段，每个阶段的产出都能在几分钟内运行或读懂。\
             为每一步确定提示策略，并预判最可能出错的地方。",
        ),
        dos: &[
            T::new(
                "Start with types and interfaces, then implementation.",
                "先定义类型和接口，再写实现。",
            ),
            T::new(
                "Make each step independently testable.",
                "让每一步都可以单独测试。",
            ),
            T::new(
                "Write down the risk of each step up front.",
                "提前写下每一步的风险。",
            ),
        ],
        donts: &[
            T::new(
                "Ask for the whole feature in one prompt.",
                "用一个提示词要求完成整个功能。",
            ),
            T::new(
                "Move on before the current step is verified.",
                "当前步骤未验证就进入下一步。",
            ),
        ],
        example_prompts: &[
            T::new(
                "Before writing code, propose a numbered plan for adding password reset. For each step give the prompt you would use and the main risk.",
                "写代码之前，请为“找回密码”功能给出编号计划。每一步写出你会使用的提示词和主要风险。",
            ),
        ],
        interactive_planner: true,
    },
    Phase {
        id: "implement",
        title: T::new("Incremental Implementation", "增量实现"),
        summary: T::new(
            "Generate one step at a time and keep every diff reviewable.",
            "一次只生成一步，保证每个改动都能被审查。",
        ),
        guidance: T::new(
            "Feed the assistant exactly one plan step with its context. Ask for the \
             smallest change that satisfies it, and for tests alongside the code.",
            "每次只给助手一个计划步骤及其上下文。要求做出满足该步骤的最小改动，并同时编写测试。",
        ),
        dos: &[
            T::new(
                "Ask for tests in the same response as the code.",
                "要求在同一次回复中给出代码和测试。",
            ),
            T::new(
                "Keep generated functions short and named.",
                "保持生成的函数简短并有清晰命名。",
            ),
        ],
        donts: &[
            T::new(
                "Accept code that touches files outside the step.",
                "接受修改了步骤范围以外文件的代码。",
            ),
            T::new(
                "Let the assistant invent APIs you did not show it.",
                "让助手臆造你没有提供过的 API。",
            ),
        ],
        example_prompts: &[
            T::new(
                "Implement step 2 only: the `resetToken` repository method. Use the interface above, no new dependencies, and include unit tests.",
                "只实现第 2 步：`resetToken` 仓储方法。使用上面的接口，不要引入新依赖，并附带单元测试。",
            ),
        ],
        interactive_planner: false,
    },
    Phase {
        id: "review",
        title: T::new("Review & Verify", "审查与验证"),
        summary: T::new(
            "Treat generated code as a pull request from a fast but careless colleague.",
            "把生成的代码当作一位速度快但粗心的同事提交的合并请求。",
        ),
        guidance: T::new(
            "Run the tests, read every line, and check edge cases the prompt did not \
             mention. Ask the assistant to critique its own output against the plan.",
            "运行测试，逐行阅读，并检查提示词中未提及的边界情况。让助手对照计划审查自己的输出。",
        ),
        dos: &[
            T::new(
                "Run the code before reading the explanation.",
                "先运行代码，再看解释。",
            ),
            T::new(
                "Check error handling and empty inputs explicitly.",
                "专门检查错误处理和空输入。",
            ),
        ],
        donts: &[
            T::new(
                "Trust a confident explanation over a failing test.",
                "相信自信的解释而忽略失败的测试。",
            ),
            T::new(
                "Merge code you cannot explain yourself.",
                "合并你自己都解释不了的代码。",
            ),
        ],
        example_prompts: &[
            T::new(
                "Review the diff above against step 2 of the plan. List anything missing, any untested branch, and any behavior change outside the step.",
                "对照计划第 2 步审查上面的改动。列出遗漏项、未测试的分支以及超出该步骤的行为变化。",
            ),
        ],
        interactive_planner: false,
    },
    Phase {
        id: "debug",
        title: T::new("Debugging", "调试"),
        summary: T::new(
            "Give the assistant evidence, not guesses.",
            "给助手证据，而不是猜测。",
        ),
        guidance: T::new(
            "Reproduce the failure, then share the exact error, the input that triggers \
             it and the code path. Ask for hypotheses ranked by likelihood before fixes.",
            "先复现问题，再提供准确的报错、触发输入和代码路径。在要求修复之前，先让助手按可能性排列假设。",
        ),
        dos: &[
            T::new(
                "Paste full stack traces and failing test output.",
                "粘贴完整的堆栈和失败的测试输出。",
            ),
            T::new(
                "Ask for a minimal reproduction first.",
                "先要求给出最小复现。",
            ),
        ],
        donts: &[
            T::new(
                "Say \"it doesn't work\" without the error.",
                "只说“不能用”却不给报错。",
            ),
            T::new(
                "Apply several suggested fixes at once.",
                "一次性应用多个建议的修复。",
            ),
        ],
        example_prompts: &[
            T::new(
                "This test fails with the trace below. Give three hypotheses ranked by likelihood and how to confirm each one. Do not propose a fix yet.",
                "这个测试失败了，堆栈如下。请按可能性给出三个假设以及验证方法，暂时不要给出修复方案。",
            ),
        ],
        interactive_planner: false,
    },
    Phase {
        id: "ship",
        title: T::new("Refactor & Ship", "重构与交付"),
        summary: T::new(
            "Clean up, document and hand over code a human can maintain.",
            "整理、补充文档，交付人类可以维护的代码。",
        ),
        guidance: T::new(
            "Once behavior is pinned by tests, ask for refactors that keep the tests \
             green. Finish with a change summary written for the reviewer.",
            "在测试固定了行为之后，再要求进行保持测试通过的重构。最后给审查者写一份变更摘要。",
        ),
        dos: &[
            T::new(
                "Refactor only under passing tests.",
                "只在测试通过的前提下重构。",
            ),
            T::new(
                "Ask for a commit message and reviewer notes.",
                "让助手生成提交信息和审查说明。",
            ),
        ],
        donts: &[
            T::new(
                "Mix refactors with behavior changes.",
                "把重构和行为变更混在一起。",
            ),
            T::new(
                "Ship generated comments that restate the code.",
                "交付只是复述代码的生成注释。",
            ),
        ],
        example_prompts: &[
            T::new(
                "All tests pass. Suggest refactors that reduce duplication in these two modules without changing behavior, then write a short PR description.",
                "所有测试已通过。请在不改变行为的前提下，建议减少这两个模块重复代码的重构，然后写一段简短的 PR 描述。",
            ),
        ],
        interactive_planner: false,
    },
];
