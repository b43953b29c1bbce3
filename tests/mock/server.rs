use axum::Router;
use empath_services::{inference_router, memory_router, InferenceService, MemoryService};
use tokio::net::TcpListener;

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn spawn(router: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_inference(service: InferenceService) -> TestServer {
    spawn(inference_router(service)).await
}

pub async fn spawn_memory(service: MemoryService) -> TestServer {
    spawn(memory_router(service)).await
}
