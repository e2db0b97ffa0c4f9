use anyhow::{Context, Result};
use url::Url;

/*
* Client for talking to the device under test
*/
pub struct DeviceClient {
    client: reqwest::Client,
    addr: String,
    base_url: String,
}
impl DeviceClient {
    pub fn new(base_url: &Url) -> Result<DeviceClient> {
        let client = reqwest::Client::builder()
            .build()
            .context("failed to build http client")?;

        let addr = match base_url.host_str() {
            Some(host) => host.to_string(),
            None => base_url.to_string(),
        };

        Ok(DeviceClient {
            client,
            addr,
            // Trim so joining request paths never doubles the slash
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }
    pub fn addr(&self) -> &str {
        &self.addr
    }
    /// Do a plain GET request against the device
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.base_url.clone() + path;
        log::debug!("{}: GET {}", self.addr, url);
        self.client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("{}: failed to send web request", self.addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> DeviceClient {
        DeviceClient::new(&Url::parse(url).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn get_hits_the_requested_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/monitor")
            .with_status(200)
            .with_body("<table></table>")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let response = client.get("/monitor").await.unwrap();

        assert_eq!(response.status(), 200);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn connection_errors_name_the_device() {
        // Bind then drop a listener so the port is known to be closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = client_for(&format!("http://127.0.0.1:{port}"));
        let err = client.get("/").await.unwrap_err();
        assert!(err.to_string().contains("127.0.0.1"));
    }

    #[test]
    fn addr_is_the_host_portion() {
        let client = client_for("http://192.168.0.100:80/");
        assert_eq!(client.addr(), "192.168.0.100");
    }
}
