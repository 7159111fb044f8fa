use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::data::{NewRamen, Ramen, RamenPatch, Scalar};
use crate::error::{CatalogError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// The `/ramens` collection the menu talks to.
#[async_trait]
pub trait RamenApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Ramen>>;
    async fn create(&self, draft: &NewRamen) -> Result<Ramen>;
    async fn update(&self, id: &Scalar, patch: &RamenPatch) -> Result<Ramen>;
    /// The response body is ignored.
    async fn delete(&self, id: &Scalar) -> Result<()>;
}

#[derive(Clone)]
pub struct HttpRamenApi {
    client: Client,
    base: Url,
}

impl HttpRamenApi {
    pub fn new(base: &str) -> Result<Self> {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: &str) -> Result<Self> {
        let invalid = |source| CatalogError::InvalidUrl {
            url: base.to_string(),
            source,
        };
        let base = Url::parse(base).map_err(invalid)?;
        if base.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    // {base}/ramens or {base}/ramens/{id}
    fn endpoint(&self, id: Option<&Scalar>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("ramens");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }

    async fn send(
        &self,
        method: &'static str,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<Response> {
        tracing::debug!(method, url = %url, "sending request");

        let resp = request
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                method,
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }
        Ok(resp)
    }
}

async fn decode<T: DeserializeOwned>(method: &'static str, resp: Response) -> Result<T> {
    let url = resp.url().to_string();
    resp.json::<T>()
        .await
        .map_err(|source| CatalogError::Decode {
            method,
            url,
            source,
        })
}

#[async_trait]
impl RamenApi for HttpRamenApi {
    async fn list(&self) -> Result<Vec<Ramen>> {
        let url = self.endpoint(None);
        let resp = self.send("GET", self.client.get(url.clone()), &url).await?;
        decode("GET", resp).await
    }

    async fn create(&self, draft: &NewRamen) -> Result<Ramen> {
        let url = self.endpoint(None);
        let request = self.client.post(url.clone()).json(draft);
        let resp = self.send("POST", request, &url).await?;
        decode("POST", resp).await
    }

    async fn update(&self, id: &Scalar, patch: &RamenPatch) -> Result<Ramen> {
        let url = self.endpoint(Some(id));
        let request = self.client.patch(url.clone()).json(patch);
        let resp = self.send("PATCH", request, &url).await?;
        decode("PATCH", resp).await
    }

    async fn delete(&self, id: &Scalar) -> Result<()> {
        let url = self.endpoint(Some(id));
        self.send("DELETE", self.client.delete(url.clone()), &url)
            .await?;
        Ok(())
    }
}
