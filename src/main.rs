use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use todo_cli::handler::{Command, Handler, Response};
use todo_cli::logging;
use todo_cli::repository::Repository;
use todo_cli::store::JsonStore;
use todo_cli::todo::Status;

const DATA_FILE: &str = "data.json";

#[derive(Parser, Debug)]
#[command(name = "todo-cli", about = "Track todos from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// Positional arguments stay optional at the clap level; the handler owns
// the missing/invalid-argument messages.
#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// List todos, optionally narrowed to one status
    List { filter: Option<String> },
    /// Create a new todo
    Create { description: Option<String> },
    /// Show a single todo
    Get { id: Option<String> },
    /// Delete a todo
    Delete { id: Option<String> },
    /// Replace a todo's description
    Update {
        id: Option<String>,
        description: Option<String>,
    },
    /// Mark a todo as not started
    MarkTodo { id: Option<String> },
    /// Mark a todo as in progress
    MarkInprogress { id: Option<String> },
    /// Mark a todo as paused
    MarkPause { id: Option<String> },
    /// Mark a todo as done
    MarkDone { id: Option<String> },
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            println!("Invalid command.");
            return;
        }
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            println!("No command provided.");
            println!("usage: todo-cli <command> [arguments]");
            return;
        }
        Err(err) => {
            // --help, --version, and anything else clap reports itself
            let _ = err.print();
            return;
        }
    };

    let command = match build_command(cli.command) {
        Ok(command) => command,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    let handler = Handler::new(Repository::new(JsonStore::new(DATA_FILE)));
    print_response(&handler.handle(command));
}

fn build_command(command: Commands) -> Result<Command, todo_cli::ValidationError> {
    match command {
        Commands::List { filter } => Command::list(filter.as_deref()),
        Commands::Create { description } => Command::create(description.as_deref()),
        Commands::Get { id } => Command::get(id.as_deref()),
        Commands::Delete { id } => Command::delete(id.as_deref()),
        Commands::Update { id, description } => {
            Command::update(id.as_deref(), description.as_deref())
        }
        Commands::MarkTodo { id } => Command::change_status(id.as_deref(), Status::Todo),
        Commands::MarkInprogress { id } => Command::change_status(id.as_deref(), Status::InProgress),
        Commands::MarkPause { id } => Command::change_status(id.as_deref(), Status::Paused),
        Commands::MarkDone { id } => Command::change_status(id.as_deref(), Status::Done),
    }
}

fn print_response(response: &Response) {
    match response {
        Response::Write { message } => println!("{}", message),
        Response::Read { message, todos } => {
            println!("{}", message);
            println!("{}", "=".repeat(40));

            for todo in todos {
                println!("ID         : {}", todo.id);
                println!("Description: {}", todo.description);
                println!("Status     : {}", todo.status);
                println!("Created    : {}", todo.created_at.format("%Y-%m-%d %H:%M"));
                println!("Updated    : {}", todo.updated_at.format("%Y-%m-%d %H:%M"));
                println!("{}", "-".repeat(40));
                println!();
            }
        }
    }
}
