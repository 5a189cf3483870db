use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct MoodEntry {
    mood: String,
    note: String,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct TextEntry {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GoalProgress {
    total: usize,
    completed: usize,
    ratio: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    username: String,
    streak: u32,
    achievements: Vec<String>,
    moods: Vec<MoodEntry>,
    journal: Vec<TextEntry>,
    gratitude: Vec<TextEntry>,
    progress: GoalProgress,
}

#[derive(Debug, Deserialize)]
struct ChallengeResponse {
    date: String,
    text: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct TrendPoint {
    score: u8,
}

#[derive(Debug, Deserialize)]
struct MoodInsight {
    most_frequent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OverviewResponse {
    streak: u32,
    trend: Vec<TrendPoint>,
    insight: MoodInsight,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("mindspace_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_mindspace"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn login(client: &Client, base_url: &str, username: &str) -> ProfileResponse {
    client
        .post(format!("{base_url}/api/login"))
        .json(&serde_json::json!({ "username": username }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_login_creates_empty_profile() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let profile = login(&client, &server.base_url, "alice-login").await;
    assert_eq!(profile.username, "alice-login");
    assert_eq!(profile.streak, 0);
    assert!(profile.moods.is_empty());
    assert!(profile.achievements.is_empty());
    assert_eq!(profile.progress.ratio, None);
}

#[tokio::test]
async fn http_login_rejects_bad_usernames() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for bad in ["", "   ", "has space", "way_too_long_for_a_username"] {
        let response = client
            .post(format!("{}/api/login", server.base_url))
            .json(&serde_json::json!({ "username": bad }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_client_error(), "accepted {bad:?}");
    }
}

#[tokio::test]
async fn http_mood_appends_and_starts_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url, "alice-mood").await;

    let profile: ProfileResponse = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "Happy", "note": "good morning" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile.moods.len(), 1);
    assert_eq!(profile.moods[0].mood, "Happy");
    assert_eq!(profile.moods[0].note, "good morning");
    assert!(!profile.moods[0].timestamp.is_empty());
    assert_eq!(profile.streak, 1);

    // Same-day repeat appends but leaves the streak alone.
    let profile: ProfileResponse = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "Calm" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile.moods.len(), 2);
    assert_eq!(profile.streak, 1);
}

#[tokio::test]
async fn http_mood_rejects_unknown_name_and_long_note() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url, "alice-badmood").await;

    let response = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "Grumpy" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let response = client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "Sad", "note": "x".repeat(501) }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let profile: ProfileResponse = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(profile.moods.is_empty());
}

#[tokio::test]
async fn http_journal_cap_leaves_log_untouched() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url, "alice-journal").await;

    let response = client
        .post(format!("{}/api/journal", server.base_url))
        .json(&serde_json::json!({ "text": "y".repeat(1001) }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let profile: ProfileResponse = client
        .post(format!("{}/api/journal", server.base_url))
        .json(&serde_json::json!({ "text": "slept well, long walk" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile.journal.len(), 1);
    assert_eq!(profile.journal[0].text, "slept well, long walk");
}

#[tokio::test]
async fn http_goal_toggle_and_out_of_range() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url, "alice-goals").await;

    client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "text": "drink more water" }))
        .send()
        .await
        .unwrap();

    let profile: ProfileResponse = client
        .post(format!("{}/api/goals/toggle", server.base_url))
        .json(&serde_json::json!({ "index": 0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile.progress.completed, 1);
    assert_eq!(profile.progress.total, 1);
    assert_eq!(profile.progress.ratio, Some(1.0));

    let response = client
        .post(format!("{}/api/goals/toggle", server.base_url))
        .json(&serde_json::json!({ "index": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn http_challenge_is_stable_for_the_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url, "alice-challenge").await;

    let first: ChallengeResponse = client
        .get(format!("{}/api/challenge", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: ChallengeResponse = client
        .get(format!("{}/api/challenge", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first.text, second.text);
    assert_eq!(first.date, second.date);
    assert!(!first.completed);

    let done: ChallengeResponse = client
        .post(format!("{}/api/challenge/complete", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(done.completed);
    assert_eq!(done.text, first.text);
}

#[tokio::test]
async fn http_stats_reflect_logged_moods() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url, "alice-stats").await;

    for mood in ["Happy", "Calm"] {
        client
            .post(format!("{}/api/mood", server.base_url))
            .json(&serde_json::json!({ "mood": mood }))
            .send()
            .await
            .unwrap();
    }

    let stats: OverviewResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.streak, 1);
    let scores: Vec<u8> = stats.trend.iter().map(|point| point.score).collect();
    assert_eq!(scores, vec![4, 3]);
    // Happy wins the 1-1 tie by wheel order.
    assert_eq!(stats.insight.most_frequent.as_deref(), Some("Happy"));
}

#[tokio::test]
async fn http_export_round_trips() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    login(&client, &server.base_url, "alice-export").await;

    client
        .post(format!("{}/api/mood", server.base_url))
        .json(&serde_json::json!({ "mood": "Excited", "note": "big day" }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}/api/gratitude", server.base_url))
        .json(&serde_json::json!({ "text": "coffee with a friend" }))
        .send()
        .await
        .unwrap();

    let response = client
        .get(format!("{}/api/export", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("mindspace_alice-export_data.json"));

    let exported: serde_json::Value = response.json().await.unwrap();
    assert_eq!(exported["moods"][0]["mood"], "Excited");
    assert_eq!(exported["gratitude"][0]["text"], "coffee with a friend");

    // The export is the canonical representation: parse(serialize(x)) == x.
    let reparsed: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&exported).unwrap()).unwrap();
    assert_eq!(reparsed, exported);
}

#[tokio::test]
async fn http_requires_login() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    client
        .post(format!("{}/api/logout", server.base_url))
        .send()
        .await
        .unwrap();

    let response = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
