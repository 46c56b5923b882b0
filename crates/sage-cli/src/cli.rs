//! Command handlers and argument wrappers.
//!
//! Implements the CLI side of the parameter wrapper pattern: each command
//! defines a clap `Args` struct here that converts into the core parameter
//! type via `From`, keeping the core crate free of clap derives. The
//! [`Cli`] runner owns the engine and the terminal renderer and maps each
//! command to an engine call plus a rendered result.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use sage_core::{
    params::{GeneratePlan, TaskScope, ToggleTask},
    Engine, EngineError, OperationStatus, PlanHistory, ReviewTasks, TaskTitles,
};

use crate::renderer::TerminalRenderer;

/// Generate a new four-week study plan
#[derive(Args)]
pub struct GenerateArgs {
    /// Skill or subject to learn
    pub skill: String,
    /// Daily study budget in hours
    #[arg(long, default_value_t = 1)]
    pub hours: u32,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,
    /// Weekdays to leave free, comma-separated (e.g. sat,sun)
    #[arg(long, value_delimiter = ',')]
    pub rest_days: Vec<String>,
    /// Self-assessed level (free form)
    #[arg(long, default_value = "beginner")]
    pub level: String,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            skill: val.skill,
            hours_per_day: val.hours,
            start_date: val.start,
            rest_days: val.rest_days,
            self_level: val.level,
        }
    }
}

/// Command-line representation of the listing scope
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Tasks scheduled today
    Daily,
    /// Tasks in the calendar week containing today
    Weekly,
    /// Tasks in the calendar month containing today
    Monthly,
}

impl From<ScopeArg> for TaskScope {
    fn from(val: ScopeArg) -> Self {
        match val {
            ScopeArg::Daily => TaskScope::Daily,
            ScopeArg::Weekly => TaskScope::Weekly,
            ScopeArg::Monthly => TaskScope::Monthly,
        }
    }
}

impl std::fmt::Display for ScopeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeArg::Daily => write!(f, "daily"),
            ScopeArg::Weekly => write!(f, "weekly"),
            ScopeArg::Monthly => write!(f, "monthly"),
        }
    }
}

/// List task titles within a scope window
#[derive(Args)]
pub struct TasksArgs {
    /// Window to list tasks for
    #[arg(long, value_enum, default_value_t = ScopeArg::Daily)]
    pub scope: ScopeArg,
}

/// Show the schedule for a specific date
#[derive(Args)]
pub struct DateArgs {
    /// Date to look up (YYYY-MM-DD)
    pub date: String,
}

/// Look up learning materials for a topic
#[derive(Args)]
pub struct MaterialsArgs {
    /// Topic to search materials for
    pub topic: String,
}

/// Mark a task as done or not done
#[derive(Args)]
pub struct CompleteArgs {
    /// Date the task is scheduled on (YYYY-MM-DD)
    pub date: String,
    /// Identifier of the task
    pub task_id: String,
    /// Mark the task as not done instead of done
    #[arg(long)]
    pub not_done: bool,
}

impl From<CompleteArgs> for ToggleTask {
    fn from(val: CompleteArgs) -> Self {
        ToggleTask {
            date: val.date,
            task_id: val.task_id,
            completed: !val.not_done,
        }
    }
}

/// Command runner owning the engine and renderer.
pub struct Cli {
    engine: Engine,
    renderer: TerminalRenderer,
    user: String,
}

impl Cli {
    pub fn new(engine: Engine, renderer: TerminalRenderer, user: String) -> Self {
        Self {
            engine,
            renderer,
            user,
        }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let params: GeneratePlan = args.into();
        let plan = self.engine.generate_plan(&self.user, &params).await?;
        self.renderer.render(&plan.to_string())
    }

    pub async fn tasks(&self, args: TasksArgs) -> Result<()> {
        let titles = self.engine.list_tasks(&self.user, args.scope.into()).await?;
        self.renderer.render(&TaskTitles(titles).to_string())
    }

    pub async fn plans(&self) -> Result<()> {
        let plans = self.engine.all_plans(&self.user).await?;
        self.renderer.render(&PlanHistory(plans).to_string())
    }

    pub async fn date(&self, args: DateArgs) -> Result<()> {
        let detail = self.engine.plan_by_date(&self.user, &args.date).await?;
        self.renderer.render(&detail.to_string())
    }

    pub async fn review(&self) -> Result<()> {
        let items = self.engine.completed_yesterday(&self.user).await?;
        self.renderer.render(&ReviewTasks(items).to_string())
    }

    pub async fn yesterday(&self) -> Result<()> {
        let review = self.engine.yesterday_review(&self.user).await?;
        self.renderer.render(&review.to_string())
    }

    pub async fn materials(&self, args: MaterialsArgs) -> Result<()> {
        let materials = self.engine.related_materials(&args.topic).await?;
        let mut output = String::new();
        for material in &materials {
            output.push_str(&format!("- {material}\n"));
        }
        self.renderer.render(&output)
    }

    pub async fn complete(&self, args: CompleteArgs) -> Result<()> {
        let params: ToggleTask = args.into();
        match self.engine.set_task_completion(&self.user, &params).await {
            Ok(()) => {
                let state = if params.completed { "done" } else { "not done" };
                let status = OperationStatus::success(format!(
                    "Task {} on {} marked {state}",
                    params.task_id, params.date
                ));
                self.renderer.render(&status.to_string())
            }
            Err(EngineError::TaskNotFound { date, task_id }) => {
                bail!("Task {task_id} on {date} not found")
            }
            Err(e) => Err(e.into()),
        }
    }
}
