#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use service_d::services::publisher::{PublishError, Publisher};
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("service_d=debug")
            .with_test_writer()
            .init();
    });
}

/// A mock publisher that stores published messages for testing purposes.
#[derive(Debug, Default)]
pub struct MockPublisher {
    published: Mutex<Vec<PublishedMessage>>,
}

#[derive(Debug, Clone)]
pub struct PublishedMessage {
    pub queue: String,
    pub payload: Vec<u8>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all published messages for testing verification
    pub fn published(&self) -> Vec<PublishedMessage> {
        self.published.lock().unwrap().clone()
    }

    /// Get the count of published messages
    pub fn published_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    /// Get the last published message
    pub fn last_published(&self) -> Option<PublishedMessage> {
        self.published.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, queue: &str, payload: &[u8]) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(PublishedMessage {
            queue: queue.to_string(),
            payload: payload.to_vec(),
        });
        Ok(())
    }
}

/// A publisher whose broker is never reachable.
#[derive(Debug, Default)]
pub struct UnreachablePublisher;

#[async_trait]
impl Publisher for UnreachablePublisher {
    async fn publish(&self, _queue: &str, _payload: &[u8]) -> Result<(), PublishError> {
        Err(PublishError::MissingConnectionString("RABBITMQ_CONN"))
    }
}

/// Spawns the application on a random port with the given publisher.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(publisher: Arc<dyn Publisher>) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = service_d::app_with_publisher(publisher);
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/api/health"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Spawns the application with a fresh [`MockPublisher`].
pub async fn spawn_app_with_mock() -> (String, Arc<MockPublisher>) {
    let mock = Arc::new(MockPublisher::new());
    let address = spawn_app(Arc::clone(&mock) as Arc<dyn Publisher>).await;
    (address, mock)
}
