//! In-memory transport for tests.
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use super::{Request, Response, Transport};
use crate::Error;

type Responder = Box<dyn Fn(&Request) -> Result<Response, Error> + Send + Sync>;

/// Records every request and answers with a canned response.
pub struct FakeTransport {
    requests: Mutex<Vec<Request>>,
    responder: Responder,
}

impl FakeTransport {
    pub fn new(
        responder: impl Fn(&Request) -> Result<Response, Error> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(vec![]),
            responder: Box::new(responder),
        })
    }

    pub fn json(value: serde_json::Value) -> Arc<Self> {
        Self::new(move |_| Response::json_body(&value))
    }

    pub fn status(status: u16) -> Arc<Self> {
        Self::new(move |_| Ok(Response::new(status)))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(|_| {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        })
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: Request) -> Result<Response, Error> {
        let response = (self.responder)(&request);
        self.requests.lock().push(request);
        response
    }
}
