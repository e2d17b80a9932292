use anyhow::Result;
use clap::{Parser, Subcommand};

use tasklist::api;
use tasklist::cli;
use tasklist::config::{self, Config};
use tasklist::service::{ListFilter, TaskService};
use tasklist::storage::TaskStore;

#[derive(Parser)]
#[command(
    name = "tasklist",
    about = "Minimal to-do manager with a CLI and a JSON REST API",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path of the backing JSON task file
    #[arg(
        long,
        env = "TASKLIST_DATA_FILE",
        default_value = config::DEFAULT_DATA_FILE,
        global = true
    )]
    data_file: std::path::PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task
    Add {
        /// Title of the task
        #[arg(short, long)]
        title: String,
        /// Description of the task
        #[arg(long = "desc", default_value = "")]
        description: String,
        /// Deadline of the task in YYYY-MM-DD format
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// Remove a task
    Remove {
        /// Title of the task
        #[arg(short, long)]
        title: String,
    },
    /// Mark a task as completed
    Done {
        /// Title of the task
        #[arg(short, long)]
        title: String,
    },
    /// List tasks
    List {
        /// List only completed tasks
        #[arg(long)]
        done: bool,
        /// List tasks due on the given date (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
        /// List tasks due today
        #[arg(long)]
        today: bool,
        /// List tasks due tomorrow
        #[arg(long)]
        tomorrow: bool,
    },
    /// Start the REST API server
    Serve {
        /// Bind address for the HTTP server
        #[arg(long, env = "TASKLIST_HOST", default_value = config::DEFAULT_HOST)]
        host: String,
        /// Port for the HTTP server
        #[arg(long, env = "TASKLIST_PORT", default_value_t = config::DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let service = TaskService::new(TaskStore::new(args.data_file.clone()));

    match args.command {
        Command::Add {
            title,
            description,
            deadline,
        } => cli::add(&service, &title, &description, deadline.as_deref()),
        Command::Remove { title } => cli::remove(&service, &title),
        Command::Done { title } => cli::done(&service, &title),
        Command::List {
            done,
            deadline,
            today,
            tomorrow,
        } => cli::list(
            &service,
            &ListFilter {
                deadline,
                today,
                tomorrow,
                done,
            },
        ),
        Command::Serve { host, port } => {
            let config = Config {
                data_file: args.data_file,
                host,
                port,
            };
            api::serve(config).await
        }
    }
}
