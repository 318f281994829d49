//! Response returned by a transport.
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::http::Headers;
use crate::Error;

#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: Headers,
    body: Bytes,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// `200 OK` with a JSON body.
    pub fn json_body(value: &impl serde::Serialize) -> Result<Self, Error> {
        Ok(Self::new(200)
            .header("content-type", "application/json")
            .body(serde_json::to_vec(value)?))
    }

    pub fn header(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_json() {
        let response = Response::json_body(&vec!["Lisboa", "Leiria"]).expect("json");
        assert!(response.is_success());
        assert_eq!(response.text(), r#"["Lisboa","Leiria"]"#);

        let list: Vec<String> = response.json().expect("decode");
        assert_eq!(list, vec!["Lisboa", "Leiria"]);

        let bad = Response::new(200).body("not json");
        assert!(bad.json::<Vec<String>>().is_err());
        assert!(!Response::new(404).is_success());
    }
}
