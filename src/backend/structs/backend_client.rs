use reqwest::Client;

#[derive(Debug, Clone)]
pub struct BackendClient {
    pub(crate) address: String,
    pub(crate) client: Client,
}
