use std::net::{Ipv4Addr, SocketAddr};

use pessoas_api::{PersonService, PersonStore};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub store: PersonStore,
}

impl TestApp {
    pub async fn post_person(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/pessoas", self.address))
            .json(body)
            .send()
            .await
            .expect("failed request")
    }
}

pub async fn spawn_app() -> TestApp {
    let test_address = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
    let test_listener = TcpListener::bind(test_address)
        .await
        .expect("failed to bind random port");
    let local_address = test_listener.local_addr().unwrap();
    let store = PersonStore::new();

    tokio::spawn(pessoas_api::run(test_listener, PersonService::new(store.clone())));

    TestApp {
        address: format!("http://{}", local_address),
        store,
    }
}
