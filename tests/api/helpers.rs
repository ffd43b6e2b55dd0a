use std::net::SocketAddr;

use once_cell::sync::Lazy;
use reqwest::{Client, Method, Response};

use pipeline_banner::{configuration, startup::Application, telemetry};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::initialize_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::initialize_subscriber(subscriber);
    };
});

pub struct App {
    pub address: SocketAddr,
    pub client: Client,
}

impl App {
    pub async fn new() -> Self {
        Lazy::force(&TRACING);

        // loopback on a random port so tests can run in parallel
        let mut configuration =
            configuration::get_configuration().expect("Failed to read configuration");
        configuration.application.host = "127.0.0.1".to_string();
        configuration.application.port = 0;

        let application = Application::build(&configuration)
            .await
            .expect("Failed to start a test application");
        let address = application.address();
        tokio::spawn(application.run_until_stopped());

        App {
            address,
            client: Client::new(),
        }
    }
}

impl App {
    pub fn build_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("http://{}{}", self.address, path);

        self.client.request(method, url)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.build_request(Method::GET, path)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn send(&self, method: Method, path: &str) -> Response {
        self.build_request(method, path)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
