// Shared test doubles for the behavior tests
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

pub use quotepoll_core::{
    HttpClient, HttpError, HttpRequest, HttpResponse, PollError, Poller, QuoteFeed, QuoteRecord,
};

/// Transport double that replays a fixed response and records every request.
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn responding(response: HttpResponse) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(response),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(HttpError::new(message)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .len()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

/// A well-formed one-element payload in the upstream's shape.
pub const ONE_QUOTE: &str = r#"[{
    "quote": "D'oh!",
    "character": "Homer Simpson",
    "image": "https://cdn.example.test/homer.png",
    "characterDirection": "Left"
}]"#;
