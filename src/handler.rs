use crate::repository::Repository;
use crate::store::StoreError;
use crate::todo::{Status, Todo};
use thiserror::Error;

/// A fully validated command, ready to dispatch. Arguments are typed here so
/// nothing downstream has to re-check them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List(Option<Status>),
    Create(String),
    Get(u32),
    Delete(u32),
    Update { id: u32, description: String },
    ChangeStatus { id: u32, status: Status },
}

/// Argument problems caught before any repository call is made. The display
/// strings are the exact messages shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("you have to provide todo description while creating one.")]
    MissingDescription,
    #[error("description can not be empty or white space only.")]
    EmptyDescription,
    #[error("you have to provide todo id.")]
    MissingId,
    #[error("invalid todo id. id must be a non-negative integer.")]
    InvalidId,
    #[error("id and new description must be provided in order to update todo.")]
    MissingUpdateArguments,
    #[error("invalid argument for list command.")]
    InvalidListFilter,
}

fn parse_id(raw: &str) -> Result<u32, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::InvalidId)
}

impl Command {
    pub fn list(filter: Option<&str>) -> Result<Self, ValidationError> {
        let filter = match filter {
            Some(raw) => Some(Status::parse(raw).ok_or(ValidationError::InvalidListFilter)?),
            None => None,
        };
        Ok(Command::List(filter))
    }

    pub fn create(description: Option<&str>) -> Result<Self, ValidationError> {
        let description = description
            .ok_or(ValidationError::MissingDescription)?
            .trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Command::Create(description.to_string()))
    }

    pub fn get(id: Option<&str>) -> Result<Self, ValidationError> {
        let id = id.ok_or(ValidationError::MissingId)?;
        Ok(Command::Get(parse_id(id)?))
    }

    pub fn delete(id: Option<&str>) -> Result<Self, ValidationError> {
        let id = id.ok_or(ValidationError::MissingId)?;
        Ok(Command::Delete(parse_id(id)?))
    }

    pub fn update(id: Option<&str>, description: Option<&str>) -> Result<Self, ValidationError> {
        let (Some(id), Some(description)) = (id, description) else {
            return Err(ValidationError::MissingUpdateArguments);
        };
        Ok(Command::Update {
            id: parse_id(id)?,
            description: description.to_string(),
        })
    }

    pub fn change_status(id: Option<&str>, status: Status) -> Result<Self, ValidationError> {
        let id = id.ok_or(ValidationError::MissingId)?;
        Ok(Command::ChangeStatus {
            id: parse_id(id)?,
            status,
        })
    }
}

/// The uniform outcome of every command: a message plus, for read commands,
/// the todos to render. Raw error strings never reach the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Read { message: String, todos: Vec<Todo> },
    Write { message: String },
}

impl Response {
    fn read(message: impl Into<String>, todos: Vec<Todo>) -> Self {
        Response::Read {
            message: message.into(),
            todos,
        }
    }

    fn write(message: impl Into<String>) -> Self {
        Response::Write {
            message: message.into(),
        }
    }
}

/// Dispatches each validated command to exactly one repository operation.
#[derive(Debug)]
pub struct Handler {
    repository: Repository,
}

impl Handler {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn handle(&self, command: Command) -> Response {
        match command {
            Command::List(filter) => self.list(filter),
            Command::Create(description) => self.create(&description),
            Command::Get(id) => self.get(id),
            Command::Delete(id) => self.delete(id),
            Command::Update { id, description } => self.update(id, &description),
            Command::ChangeStatus { id, status } => self.change_status(id, status),
        }
    }

    fn list(&self, filter: Option<Status>) -> Response {
        match self.repository.list_all(filter) {
            Ok(todos) => Response::read("Todos List: ", todos),
            Err(err) => Response::read(
                report_store_error(&err, "failed to get todos list.", "list todos"),
                Vec::new(),
            ),
        }
    }

    fn create(&self, description: &str) -> Response {
        match self.repository.create(description) {
            Ok(_) => Response::write("Todo created successfully."),
            Err(err) => {
                Response::write(report_store_error(&err, "failed to create todo.", "create todo"))
            }
        }
    }

    fn get(&self, id: u32) -> Response {
        match self.repository.get_by_id(id) {
            Ok(Some(todo)) => Response::read("Todo: ", vec![todo]),
            Ok(None) => Response::read("There is no todo with such id.", Vec::new()),
            Err(err) => Response::read(
                report_store_error(&err, "failed to get todo.", "get todo"),
                Vec::new(),
            ),
        }
    }

    fn delete(&self, id: u32) -> Response {
        match self.repository.delete_by_id(id) {
            Ok(Some(id)) => Response::write(format!("todo with id of {} is deleted.", id)),
            Ok(None) => Response::write("there is no todo with such id."),
            Err(err) => {
                Response::write(report_store_error(&err, "failed to delete todo.", "delete todo"))
            }
        }
    }

    fn update(&self, id: u32, description: &str) -> Response {
        match self.repository.update(id, description) {
            Ok(Some(id)) => Response::write(format!("todo with id of {} is updated.", id)),
            Ok(None) => Response::write("there is no todo with such id."),
            Err(err) => {
                Response::write(report_store_error(&err, "failed to update todo.", "update todo"))
            }
        }
    }

    fn change_status(&self, id: u32, status: Status) -> Response {
        match self.repository.change_status(id, status) {
            Ok(Some(id)) => Response::write(format!("todo status with id of {} is changed.", id)),
            Ok(None) => Response::write("there is no todo with such id."),
            Err(err) => Response::write(report_store_error(
                &err,
                "failed to change todo status.",
                "change todo status",
            )),
        }
    }
}

/// Logs the full diagnostic and maps the failure to its fixed user-facing
/// message. Anything outside the known taxonomy gets the per-operation
/// fallback text.
fn report_store_error(err: &StoreError, fallback: &str, operation: &str) -> String {
    tracing::error!(error = %err, operation, "store operation failed");

    match err {
        StoreError::NotFound => "data file not found.".to_string(),
        StoreError::Corrupt(_) => "data file is corrupted.".to_string(),
        StoreError::Io(_) => fallback.to_string(),
    }
}
