use crate::store::{DataFile, JsonStore, StoreError};
use crate::todo::{Status, Todo};
use chrono::Utc;

/// Implements one domain operation per method, each as a single
/// read-modify-write cycle against the store.
///
/// A requested id that does not exist is an `Ok(None)` outcome, never an
/// error: callers can tell a miss apart from a backing-store failure.
#[derive(Debug)]
pub struct Repository {
    store: JsonStore,
}

impl Repository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Returns all todos in file order, optionally narrowed to one status.
    pub fn list_all(&self, filter: Option<Status>) -> Result<Vec<Todo>, StoreError> {
        let data = self.store.read()?;

        let todos = match filter {
            Some(status) => data
                .todos
                .into_iter()
                .filter(|todo| todo.status == status)
                .collect(),
            None => data.todos,
        };

        Ok(todos)
    }

    /// Appends a new todo and returns its freshly assigned id.
    ///
    /// Creates the data file with an empty snapshot first if this is the
    /// very first todo.
    pub fn create(&self, description: &str) -> Result<u32, StoreError> {
        if !self.store.exists() {
            self.store.write(&DataFile::new())?;
        }

        let mut data = self.store.read()?;

        let id = data.available_id;
        data.todos
            .push(Todo::new(id, description.trim().to_string(), Utc::now()));
        data.available_id += 1;

        self.store.write(&data)?;

        Ok(id)
    }

    pub fn get_by_id(&self, id: u32) -> Result<Option<Todo>, StoreError> {
        let data = self.store.read()?;

        Ok(data.todos.into_iter().find(|todo| todo.id == id))
    }

    /// Replaces a todo's description. Returns the id on success, `None` if
    /// no todo has that id (in which case nothing is written).
    pub fn update(&self, id: u32, description: &str) -> Result<Option<u32>, StoreError> {
        let mut data = self.store.read()?;

        let Some(todo) = data.todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        todo.set_description(description.trim().to_string());

        self.store.write(&data)?;

        Ok(Some(id))
    }

    /// Removes a todo from the file. The id counter is untouched, so a
    /// deleted id is never handed out again.
    pub fn delete_by_id(&self, id: u32) -> Result<Option<u32>, StoreError> {
        let mut data = self.store.read()?;

        let Some(position) = data.todos.iter().position(|todo| todo.id == id) else {
            return Ok(None);
        };
        data.todos.remove(position);

        self.store.write(&data)?;

        Ok(Some(id))
    }

    /// Moves a todo to a new status. Same miss semantics as [`update`].
    ///
    /// [`update`]: Repository::update
    pub fn change_status(&self, id: u32, status: Status) -> Result<Option<u32>, StoreError> {
        let mut data = self.store.read()?;

        let Some(todo) = data.todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        todo.set_status(status);

        self.store.write(&data)?;

        Ok(Some(id))
    }
}
