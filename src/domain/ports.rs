use crate::utils::error::Result;
use serde::de::DeserializeOwned;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Network capability handed to anything that needs to issue a GET.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> impl std::future::Future<Output = Result<HttpResponse>> + Send;
}

impl<C: HttpClient> HttpClient for &C {
    fn get(&self, url: &str) -> impl std::future::Future<Output = Result<HttpResponse>> + Send {
        (**self).get(url)
    }
}
