//! Command-line client for the todo service.

use clap::{Parser, Subcommand};
use todo_client::{HttpTodoApi, SortOrder, StatusFilter, TodoView};
use todo_domain::Status;

#[derive(Parser)]
#[command(name = "todo", about = "Command-line client for the todo service")]
struct Cli {
    /// Base URL of the API (defaults to $TODO_API_URL, then localhost)
    #[arg(long)]
    api_url: Option<String>,

    /// Show only matching todos: all, pending, done
    #[arg(long, default_value = "all")]
    filter: StatusFilter,

    /// Ordering: newest, oldest, alpha
    #[arg(long, default_value = "newest")]
    sort: SortOrder,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List todos
    List,
    /// Add a new todo
    Add { task: String },
    /// Mark a todo done
    Done { id: String },
    /// Mark a todo pending again
    Reopen { id: String },
    /// Delete a todo
    Rm { id: String },
}

fn main() {
    let cli = Cli::parse();

    let api = match cli.api_url {
        Some(url) => HttpTodoApi::new(url),
        None => HttpTodoApi::from_env(),
    };

    let mut view = TodoView::new(api);
    view.filter = cli.filter;
    view.sort = cli.sort;
    view.refresh();

    match cli.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add { task } => view.add(&task),
        Command::Done { id } => view.set_status(&id, Status::Done),
        Command::Reopen { id } => view.set_status(&id, Status::Pending),
        Command::Rm { id } => view.remove(&id),
    }

    if view.is_demo() {
        eprintln!("backend unreachable, showing local demo data");
    }
    if let Some(err) = view.error() {
        eprintln!("error: {err}");
    }

    for todo in view.visible() {
        let mark = if todo.status.is_done() { "x" } else { " " };
        println!("[{mark}] {}  {}", todo.id, todo.task);
    }
}
