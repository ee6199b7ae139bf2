#![allow(dead_code)]

use async_trait::async_trait;
use recipebot::RecipeBot;
use recipebot::ai::RecipeGenerator;
use recipebot::api::signature::compute_signature;
use recipebot::errors::RecipeBotError;
use recipebot::line::MessagingApi;
use recipebot::storage::ImageStore;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const SECRET: &str = "test-channel-secret";
pub const IMAGE_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
pub const RECIPE: &str = "## おすすめレシピ\n**トマトの卵炒め**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Reply { token: String, text: String },
    Push { user_id: String, text: String },
}

#[derive(Default)]
pub struct FakeMessaging {
    pub fail_fetch: bool,
    pub fail_reply: bool,
    pub fail_push: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeMessaging {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pushes(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Push { user_id, text } => Some((user_id, text)),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Reply { token, text } => Some((token, text)),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl MessagingApi for FakeMessaging {
    async fn fetch_message_content(&self, message_id: &str) -> Result<Vec<u8>, RecipeBotError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Fetch(message_id.to_string()));
        if self.fail_fetch {
            return Err(RecipeBotError::LineApiError("content unavailable".to_string()));
        }
        Ok(IMAGE_BYTES.to_vec())
    }

    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), RecipeBotError> {
        self.calls.lock().unwrap().push(Call::Reply {
            token: reply_token.to_string(),
            text: text.to_string(),
        });
        if self.fail_reply {
            return Err(RecipeBotError::LineApiError("Invalid reply token".to_string()));
        }
        Ok(())
    }

    async fn push_text(&self, user_id: &str, text: &str) -> Result<(), RecipeBotError> {
        self.calls.lock().unwrap().push(Call::Push {
            user_id: user_id.to_string(),
            text: text.to_string(),
        });
        if self.fail_push {
            return Err(RecipeBotError::LineApiError("push quota exceeded".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct FakeStore {
    pub fail: bool,
    pub objects: Mutex<Vec<StoredObject>>,
}

impl FakeStore {
    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for FakeStore {
    async fn put_object(
        &self,
        bytes: Vec<u8>,
        key: &str,
        content_type: &str,
    ) -> Result<String, RecipeBotError> {
        if self.fail {
            return Err(RecipeBotError::StorageError("AccessDenied".to_string()));
        }
        self.objects.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            content_type: content_type.to_string(),
            bytes,
        });
        Ok(format!("https://test-bucket.s3.amazonaws.com/{key}"))
    }
}

pub struct FakeRecipes {
    pub text: String,
    pub calls: AtomicUsize,
}

impl Default for FakeRecipes {
    fn default() -> Self {
        Self {
            text: RECIPE.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FakeRecipes {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeGenerator for FakeRecipes {
    async fn generate_recipe(&self, image: &[u8]) -> String {
        assert_eq!(image, IMAGE_BYTES);
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text.clone()
    }
}

pub struct Harness {
    pub bot: RecipeBot,
    pub messaging: Arc<FakeMessaging>,
    pub store: Arc<FakeStore>,
    pub recipes: Arc<FakeRecipes>,
}

pub fn harness_with(messaging: FakeMessaging, store: FakeStore) -> Harness {
    let messaging = Arc::new(messaging);
    let store = Arc::new(store);
    let recipes = Arc::new(FakeRecipes::default());
    let bot = RecipeBot::new(
        SECRET.to_string(),
        messaging.clone(),
        store.clone(),
        recipes.clone(),
    );
    Harness {
        bot,
        messaging,
        store,
        recipes,
    }
}

pub fn harness() -> Harness {
    harness_with(FakeMessaging::default(), FakeStore::default())
}

pub fn text_event(reply_token: &str, text: &str) -> Value {
    json!({
        "type": "message",
        "mode": "active",
        "timestamp": 1_700_000_000_000_i64,
        "replyToken": reply_token,
        "source": { "type": "user", "userId": "U1" },
        "message": { "type": "text", "id": "100", "text": text }
    })
}

pub fn image_event(reply_token: &str, message_id: &str) -> Value {
    json!({
        "type": "message",
        "mode": "active",
        "timestamp": 1_700_000_000_000_i64,
        "replyToken": reply_token,
        "source": { "type": "user", "userId": "U1" },
        "message": {
            "type": "image",
            "id": message_id,
            "contentProvider": { "type": "line" }
        }
    })
}

pub fn envelope(events: Vec<Value>) -> String {
    json!({ "destination": "Ubot", "events": events }).to_string()
}

/// API Gateway proxy event carrying `body` with a valid signature.
pub fn signed_request(body: &str) -> Value {
    request_with_signature(body, &compute_signature(body.as_bytes(), SECRET))
}

pub fn request_with_signature(body: &str, signature: &str) -> Value {
    json!({
        "headers": {
            "content-type": "application/json",
            "x-line-signature": signature
        },
        "body": body,
        "isBase64Encoded": false
    })
}

pub fn response_body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

#[derive(Debug)]
pub struct CapturedRequest {
    pub head: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or("")
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (k, v) = line.split_once(':')?;
            k.trim()
                .eq_ignore_ascii_case(name)
                .then(|| v.trim().to_string())
        })
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

/// Accepts a single HTTP/1.1 request on a loopback port, answers it with the
/// given status and body, and hands back what was received.
pub async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    response_body: Vec<u8>,
) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (k, v) = line.split_once(':')?;
                if k.trim().eq_ignore_ascii_case("content-length") {
                    v.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = buf[header_end..header_end + content_length].to_vec();

        let head_out = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            response_body.len()
        );
        socket.write_all(head_out.as_bytes()).await.unwrap();
        socket.write_all(&response_body).await.unwrap();
        socket.shutdown().await.unwrap();

        CapturedRequest { head, body }
    });

    (base_url, handle)
}
