use once_cell::sync::Lazy;
use rapid_jobs_waitlist::configuration::{get_configuration, Settings, DEFAULT_SENDER};
use rapid_jobs_waitlist::startup::Application;
use rapid_jobs_waitlist::telemetry::{get_subscriber, init_subscriber};
use secrecy::Secret;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_waitlist(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/waitlist", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_waitlist_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/waitlist", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_landing_page(&self, query: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// JSON bodies of every request the fake provider has seen so far.
    pub async fn sent_emails(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

/// Provider key present, no operator address.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.authorization_token = Some(Secret::new("re_test_key".to_string()));
        c.email_client.sender = DEFAULT_SENDER.to_string();
        c.email_client.operator_email = None;
        c.email_client.timeout_milliseconds = Some(2_000);
        customise(&mut c);
        c
    };

    let application = Application::build(configuration)
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        email_server,
        api_client: reqwest::Client::new(),
    }
}
