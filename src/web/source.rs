use async_trait::async_trait;
use gloo_net::http::Request;
use menuboard_menu::{FetchedDocument, MenuError, MenuSource};

/// Fetches the menu document with the browser's `fetch`
pub struct HttpSource;

#[async_trait(?Send)]
impl MenuSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, MenuError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| MenuError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            return Ok(FetchedDocument {
                status,
                body: String::new(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MenuError::Network(e.to_string()))?;

        Ok(FetchedDocument { status, body })
    }
}
