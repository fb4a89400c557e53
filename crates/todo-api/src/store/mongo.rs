//! MongoDB-backed store. One collection, documents keyed by ObjectId.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use todo_domain::{NewTodo, Status, Todo, TodoPatch};

use super::{StoreError, TodoStore};

const COLLECTION: &str = "todos";

/// On-disk document shape. Ids leave this module as ObjectId hex.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    task: String,
    status: Status,
    created_at: BsonDateTime,
    updated_at: BsonDateTime,
}

impl From<TodoDoc> for Todo {
    fn from(doc: TodoDoc) -> Self {
        Todo {
            id: doc.id.to_hex(),
            task: doc.task,
            status: doc.status,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[derive(Clone)]
pub struct MongoStore {
    todos: Collection<TodoDoc>,
}

impl MongoStore {
    /// Connects to `uri` and uses the `todos` collection of `db`.
    pub async fn connect(uri: &str, db: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(backend)?;
        Ok(Self {
            todos: client.database(db).collection(COLLECTION),
        })
    }

    fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let opts = FindOptions::builder().sort(doc! { "created_at": -1 }).build();
        let docs: Vec<TodoDoc> = self
            .todos
            .find(doc! {}, opts)
            .await
            .map_err(backend)?
            .try_collect()
            .await
            .map_err(backend)?;
        Ok(docs.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, new: NewTodo) -> Result<Todo, StoreError> {
        let now = BsonDateTime::now();
        let doc = TodoDoc {
            id: ObjectId::new(),
            task: new.task.clone(),
            status: new.initial_status(),
            created_at: now,
            updated_at: now,
        };
        self.todos.insert_one(&doc, None).await.map_err(backend)?;
        Ok(doc.into())
    }

    async fn update(&self, id: &str, patch: TodoPatch) -> Result<Option<Todo>, StoreError> {
        let oid = Self::parse_id(id)?;

        let mut set = doc! { "updated_at": BsonDateTime::now() };
        if let Some(task) = &patch.task {
            set.insert("task", task.as_str());
        }
        if let Some(status) = patch.status {
            set.insert("status", status.to_string());
        }

        let opts = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .todos
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set }, opts)
            .await
            .map_err(backend)?;
        Ok(updated.map(Todo::from))
    }

    async fn delete(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let oid = Self::parse_id(id)?;
        let removed = self
            .todos
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await
            .map_err(backend)?;
        Ok(removed.map(Todo::from))
    }
}

fn backend(e: mongodb::error::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}
