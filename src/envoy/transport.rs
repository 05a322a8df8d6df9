use reqwest::StatusCode;
use std::error::Error;
use std::io::Read;
use std::sync::Arc;

pub type TransportError = Box<dyn Error + Send + Sync>;

/// Status and body stream of a completed GET request.
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Read + Send + 'static) -> Self {
        HttpResponse {
            status,
            body: Box::new(body),
        }
    }
}

/// Issues a GET against a full URL. Connection management, TLS, proxying and timeouts are up to the implementation.
pub trait HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl HttpTransport for reqwest::blocking::Client {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = reqwest::blocking::Client::get(self, url).send()?;
        Ok(HttpResponse::new(response.status(), response))
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn reqwest_transport_returns_status_and_body() -> Result<(), TransportError> {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/info.xml").with_status(201).with_body("body").create();

        let client = reqwest::blocking::Client::new();
        let mut response = HttpTransport::get(&client, &format!("{}/info.xml", server.url()))?;

        let mut body = String::new();
        response.body.read_to_string(&mut body)?;

        mock.assert();
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(body, "body");
        Ok(())
    }

    #[test]
    fn reqwest_transport_fails_when_the_connection_is_refused() {
        let client = reqwest::blocking::Client::new();

        let result = HttpTransport::get(&client, "http://127.0.0.1:1/info.xml");

        assert!(result.is_err());
    }

    #[test]
    fn shared_transports_delegate_to_the_inner_transport() -> Result<(), TransportError> {
        struct Teapot;

        impl HttpTransport for Teapot {
            fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
                Ok(HttpResponse::new(StatusCode::IM_A_TEAPOT, io::empty()))
            }
        }

        let shared = Arc::new(Teapot);
        assert_eq!(shared.get("http://envoy")?.status, StatusCode::IM_A_TEAPOT);
        assert_eq!((&Teapot).get("http://envoy")?.status, StatusCode::IM_A_TEAPOT);
        Ok(())
    }
}
