use clap::{Parser, Subcommand};

use goals_frontend::api::{ApiClient, GoalRequest, RequestError, TaskRequest};
use goals_frontend::config::ApiConfig;

#[derive(Parser)]
#[command(name = "goals-cli")]
#[command(about = "Management CLI for the goals API", long_about = None)]
struct Cli {
    /// Origin the base path is joined onto (the dev server by default).
    #[arg(short, long, default_value = "http://localhost:8081")]
    origin: String,

    /// API base path or absolute base URL.
    #[arg(short, long, default_value = "/api")]
    base_uri: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List goals, newest first
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Show a single goal
    Get { id: i64 },
    /// Create a goal with its initial tasks
    Create {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Task names; the backend requires at least one
        #[arg(short, long = "task", required = true)]
        tasks: Vec<String>,
    },
    /// Delete a goal
    Delete { id: i64 },
    /// List the tasks under a goal
    Tasks {
        goal_id: i64,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Full-text search across goals and tasks
    Search { query: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ApiClient::new(&ApiConfig {
        origin: cli.origin,
        base_uri: cli.base_uri,
        ..ApiConfig::default()
    })?;

    let outcome = match cli.command {
        Commands::List { page, size } => {
            client.list_goals(page, size).await.map(|response| {
                print_json(&response);
            })
        }
        Commands::Get { id } => client.get_goal(id).await.map(|goal| {
            print_json(&goal);
        }),
        Commands::Create {
            name,
            description,
            tasks,
        } => {
            let request = GoalRequest {
                name,
                description,
                tasks: tasks
                    .into_iter()
                    .map(|name| TaskRequest {
                        id: None,
                        name,
                        completed: Some(false),
                        goal_id: None,
                    })
                    .collect(),
            };
            client.create_goal(&request).await.map(|goal| {
                print_json(&goal);
            })
        }
        Commands::Delete { id } => client.delete_goal(id).await.map(|()| {
            println!("deleted goal {}", id);
        }),
        Commands::Tasks {
            goal_id,
            page,
            size,
        } => client.list_goal_tasks(goal_id, page, size).await.map(|response| {
            print_json(&response);
        }),
        Commands::Search { query } => client.search_goals(&query).await.map(|hits| {
            print_json(&hits);
        }),
    };

    if let Err(err) = outcome {
        print_error(&err);
        std::process::exit(1);
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: failed to render response: {}", e),
    }
}

fn print_error(err: &RequestError) {
    eprintln!("Error: {}", err);
    // The server's structured payload, when present, is the useful part.
    if let Some(pretty) = err.pretty() {
        match serde_json::to_string_pretty(pretty) {
            Ok(text) => eprintln!("{}", text),
            Err(_) => eprintln!("{}", pretty),
        }
    }
}
