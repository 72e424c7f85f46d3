use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use contrib_chain::config;
use contrib_chain::grading::{self, GradeResult, GradingConfig, PolicyKind};
use contrib_chain::output;
use contrib_chain::report;
use contrib_chain::reward::{self, RewardDispatcher};
use contrib_chain::role::Role;
use contrib_chain::store::{self, ContributionDraft};
use contrib_chain::team::{self, MemberId, TeamMember};
use contrib_chain::timeline::{self, Priority, TaskDraft, TaskStatus};

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log a work contribution
    Log {
        /// Member identity (wallet address or name)
        #[arg(short, long)]
        member: String,
        /// What was worked on
        #[arg(short, long)]
        task: String,
        /// Hours spent (zero allowed, negative rejected)
        #[arg(long)]
        hours: f64,
        /// Proof links (repeatable)
        #[arg(short, long)]
        link: Vec<String>,
    },
    /// Show aggregated team statistics
    Stats,
    /// Run fair grading over the logged contributions
    Grade {
        /// Grading policy: weighted or share (default from config)
        #[arg(short, long)]
        policy: Option<String>,
    },
    /// Export the grading report as CSV
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(short, long)]
        policy: Option<String>,
    },
    /// Dispatch rewards to every pending member, in ranked order
    RewardAll {
        /// Your role; dispatch requires leader
        #[arg(long, default_value = "member")]
        role: Role,
        #[arg(short, long)]
        policy: Option<String>,
        /// Print what would be paid instead of paying; required until a
        /// payment backend is configured
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage the project timeline
    #[command(subcommand)]
    Task(TaskCommands),
}

#[derive(Subcommand, Debug)]
enum TaskCommands {
    /// Create a task (leader only)
    Add {
        #[arg(long, default_value = "member")]
        role: Role,
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Member identity to assign the task to
        #[arg(short, long)]
        assign: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        #[arg(long, default_value_t = 1.0)]
        hours: f64,
        /// low, medium, or high
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Edit every field of a task (leader only)
    Edit {
        #[arg(long, default_value = "member")]
        role: Role,
        #[arg(long)]
        id: u64,
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long)]
        assign: String,
        #[arg(long)]
        due: String,
        #[arg(long, default_value_t = 1.0)]
        hours: f64,
        #[arg(long, default_value = "medium")]
        priority: String,
        /// todo, in-progress, or done
        #[arg(long, default_value = "todo")]
        status: String,
    },
    /// Delete a task permanently (leader only)
    Delete {
        #[arg(long, default_value = "member")]
        role: Role,
        #[arg(long)]
        id: u64,
    },
    /// Advance a task one step: todo -> in-progress -> done -> todo
    Cycle {
        #[arg(long)]
        id: u64,
    },
    /// List tasks with progress and overdue flags
    List,
}

#[derive(Parser, Debug)]
#[command(name = "contrib-chain")]
#[command(about = "Team contribution tracking and fair grading CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/contrib-chain/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Dispatcher for the CLI demo path: prints what would be paid and answers
/// with a synthetic reference. A real payment backend plugs in behind the
/// same trait.
struct DryRunDispatcher;

impl RewardDispatcher for DryRunDispatcher {
    async fn dispatch(&self, recipient: &MemberId, amount: f64, memo: &str) -> Result<String> {
        println!("  dry-run: {} <- {} ({})", recipient.short(), amount, memo);
        Ok(format!("DRYRUN-{}", recipient.short()))
    }
}

fn parse_policy(arg: Option<&str>, config: &GradingConfig) -> Result<PolicyKind, String> {
    match arg {
        None => Ok(config.policy()),
        Some("weighted") => Ok(PolicyKind::Weighted),
        Some("share") => Ok(PolicyKind::Share),
        Some(other) => Err(format!("unknown policy '{}' (expected weighted or share)", other)),
    }
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    match s {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(format!("unknown priority '{}'", other)),
    }
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    match s {
        "todo" => Ok(TaskStatus::Todo),
        "in-progress" => Ok(TaskStatus::InProgress),
        "done" => Ok(TaskStatus::Done),
        other => Err(format!("unknown status '{}'", other)),
    }
}

/// Load the log, aggregate it, and run the selected grading policy.
fn graded_results(
    grading_config: &GradingConfig,
    policy_arg: Option<&str>,
) -> Result<(Vec<TeamMember>, Vec<GradeResult>), i32> {
    let kind = match parse_policy(policy_arg, grading_config) {
        Ok(k) => k,
        Err(e) => {
            eprintln!("{}", e);
            return Err(EXIT_CONFIG);
        }
    };

    let log = match store::load_log(&store::get_store_path()) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Storage error: {}", e);
            return Err(EXIT_STORAGE);
        }
    };

    let members = match team::aggregate(&log.contributions) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Aggregation error: {}", e);
            return Err(EXIT_VALIDATION);
        }
    };

    let policy = grading::policy_for(kind);
    let results = policy.grade(&members, grading_config);
    Ok((members, results))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let grading_config = config.grading.clone().unwrap_or_default();
    if let Err(errors) = grading::validate_grading(&grading_config) {
        eprintln!("Grading config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Log { member, task, hours, link } => {
            let store_path = store::get_store_path();
            let mut log = match store::load_log(&store_path) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Storage error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            };

            let draft = ContributionDraft {
                member: MemberId::new(member),
                task,
                hours,
                links: link,
                files: vec![],
            };
            let id = match log.log(draft) {
                Ok(c) => c.id,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_VALIDATION);
                }
            };

            if let Err(e) = store::save_log(&store_path, &log) {
                eprintln!("Storage error: {}", e);
                std::process::exit(EXIT_STORAGE);
            }
            println!("Logged contribution #{} ({} total)", id, log.len());
        }

        Commands::Stats => {
            let log = match store::load_log(&store::get_store_path()) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Storage error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            };
            let mut members = match team::aggregate(&log.contributions) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("Aggregation error: {}", e);
                    std::process::exit(EXIT_VALIDATION);
                }
            };
            println!("{}", output::format_stats(&team::stats(&members)));
            members.sort_by(|a, b| b.percentage.cmp(&a.percentage));
            for m in &members {
                println!(
                    "  {:<20} {:>6.1}h  {:>2} entries  {:>3}%",
                    m.member.short(),
                    m.total_hours,
                    m.contributions,
                    m.percentage
                );
            }
        }

        Commands::Grade { policy } => {
            let (_, results) = match graded_results(&grading_config, policy.as_deref()) {
                Ok(r) => r,
                Err(code) => std::process::exit(code),
            };
            if cli.verbose {
                for r in &results {
                    println!("{}", output::format_grade_detail(r, use_colors));
                    println!();
                }
            }
            println!("{}", output::format_grade_table(&results, use_colors));
        }

        Commands::Export { out, policy } => {
            let (members, results) = match graded_results(&grading_config, policy.as_deref()) {
                Ok(r) => r,
                Err(code) => std::process::exit(code),
            };
            let rows = report::build_report(&results, &members);
            let csv = report::to_csv(&rows);
            match out {
                Some(path) => {
                    if let Err(e) = std::fs::write(&path, csv) {
                        eprintln!("Failed to write {}: {}", path.display(), e);
                        std::process::exit(EXIT_STORAGE);
                    }
                    println!("Wrote {} rows to {}", rows.len(), path.display());
                }
                None => print!("{}", csv),
            }
        }

        Commands::RewardAll { role, policy, dry_run } => {
            if !dry_run {
                eprintln!("No payment backend is configured; re-run with --dry-run");
                std::process::exit(EXIT_CONFIG);
            }
            let (_, mut results) = match graded_results(&grading_config, policy.as_deref()) {
                Ok(r) => r,
                Err(code) => std::process::exit(code),
            };
            let delay = match config.reward.clone().unwrap_or_default().dispatch_delay() {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Config error: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            println!("Dispatching rewards (dry run)...");
            match reward::send_all(&mut results, &DryRunDispatcher, role, delay).await {
                Ok(summary) => {
                    println!(
                        "Done: {} sent, {} failed, {} skipped",
                        summary.sent, summary.failed, summary.skipped
                    );
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_VALIDATION);
                }
            }
        }

        Commands::Task(task_command) => {
            let timeline_path = timeline::get_timeline_path();
            let mut tl = match timeline::load_timeline(&timeline_path) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Storage error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            };

            let changed = match run_task_command(&mut tl, task_command, use_colors) {
                Ok(changed) => changed,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_VALIDATION);
                }
            };

            if changed {
                if let Err(e) = timeline::save_timeline(&timeline_path, &tl) {
                    eprintln!("Storage error: {}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}


/// Returns whether the timeline was mutated and needs saving.
fn run_task_command(
    tl: &mut timeline::Timeline,
    command: TaskCommands,
    use_colors: bool,
) -> Result<bool> {
    let today = Utc::now().date_naive();
    match command {
        TaskCommands::Add { role, title, description, assign, due, hours, priority } => {
            let draft = TaskDraft {
                title,
                description,
                assigned_to: MemberId::new(assign),
                due_date: Some(due.parse()?),
                estimated_hours: hours,
                status: TaskStatus::Todo,
                priority: parse_priority(&priority).map_err(anyhow::Error::msg)?,
            };
            let id = tl.add_task(draft, role)?;
            println!("Created task #{}", id);
            Ok(true)
        }
        TaskCommands::Edit {
            role, id, title, description, assign, due, hours, priority, status,
        } => {
            let draft = TaskDraft {
                title,
                description,
                assigned_to: MemberId::new(assign),
                due_date: Some(due.parse()?),
                estimated_hours: hours,
                status: parse_status(&status).map_err(anyhow::Error::msg)?,
                priority: parse_priority(&priority).map_err(anyhow::Error::msg)?,
            };
            tl.edit_task(id, draft, role)?;
            println!("Updated task #{}", id);
            Ok(true)
        }
        TaskCommands::Delete { role, id } => {
            tl.delete_task(id, role)?;
            println!("Deleted task #{}", id);
            Ok(true)
        }
        TaskCommands::Cycle { id } => {
            let status = tl.cycle_status(id)?;
            println!("Task #{} is now {}", id, status);
            Ok(true)
        }
        TaskCommands::List => {
            println!("{}", output::format_task_table(&tl.tasks, today, use_colors));
            if !tl.tasks.is_empty() {
                println!();
                println!(
                    "Progress: {}% ({} done, {} in progress, {} to do)",
                    tl.progress(),
                    tl.count_status(TaskStatus::Done),
                    tl.count_status(TaskStatus::InProgress),
                    tl.count_status(TaskStatus::Todo)
                );
                if let Some(days) = tl.days_left(today) {
                    if days < 0 {
                        println!("Project end date passed {} days ago", -days);
                    } else {
                        println!("{} days left until project end", days);
                    }
                }
            }
            Ok(false)
        }
    }
}
