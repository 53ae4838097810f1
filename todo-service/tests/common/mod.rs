use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use chrono::Duration;
use serde_json::json;
use todo_service::domain::todo::errors::TodoError;
use todo_service::domain::todo::models::Todo;
use todo_service::domain::todo::ports::TodoRepository;
use todo_service::domain::todo::service::TodoService;
use todo_service::domain::user::errors::UserError;
use todo_service::domain::user::models::EmailAddress;
use todo_service::domain::user::models::User;
use todo_service::domain::user::models::UserId;
use todo_service::domain::user::ports::UserRepository;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-at-least-32-bytes!";

/// Test application on a random loopback port, backed by in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Handler sharing the app's secret, for minting and inspecting tokens
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("Failed to read address").port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET, Duration::hours(1)));

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let todo_repository = Arc::new(InMemoryTodoRepository::default());

        let user_service = Arc::new(UserService::new(user_repository, Arc::clone(&authenticator)));
        let todo_service = Arc::new(TodoService::new(todo_repository));

        let router = create_router(user_service, todo_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register an account, asserting success.
    pub async fn signup(&self, email: &str, name: &str, password: &str) {
        let response = self
            .post("/signup")
            .json(&json!({
                "email": email,
                "name": name,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute signup request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log in and return the issued token, asserting success.
    pub async fn signin_token(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/signin")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute signin request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in response")
            .to_string()
    }
}

/// In-memory account store mirroring the behavior of the real one,
/// including the uniqueness guarantee on insert.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.lock().expect("User store poisoned");
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().expect("User store poisoned");

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory todo store.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: Todo) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().expect("Todo store poisoned");
        todos.push(todo.clone());
        Ok(todo)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Todo>, TodoError> {
        let todos = self.todos.lock().expect("Todo store poisoned");

        let mut owned: Vec<Todo> = todos
            .iter()
            .filter(|t| t.owner_id == *owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned)
    }
}
