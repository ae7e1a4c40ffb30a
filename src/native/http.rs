use crate::core::{
    domain::Page,
    errors::{Error, Result},
    traits::judge::JudgeClient,
};

/// Plain GET requests to the judge, no authentication or retries.
#[derive(Clone, Debug, Default)]
pub struct HttpJudgeClient {
    client: reqwest::Client,
}

impl HttpJudgeClient {
    pub fn new() -> Self {
        HttpJudgeClient {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl JudgeClient for HttpJudgeClient {
    #[tracing::instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<Page> {
        let response = self.client.get(url).send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        tracing::debug!("{} responded with {}", url, status);

        let body = response.text().await.map_err(network_error)?;
        Ok(Page { status, body })
    }
}

fn network_error(e: reqwest::Error) -> Error {
    Error::Network { msg: e.to_string() }
}
