//! GoDaddy domain-records REST calls.

use async_trait::async_trait;

use crate::error::{Result, SolverError};
use crate::http_client::HttpUtils;
use crate::traits::TxtRecordStore;
use crate::types::DnsRecord;

use super::GodaddyClient;
use super::types::parse_api_error;

const PROVIDER: &str = "godaddy";

impl GodaddyClient {
    /// Path of the TXT record resource for `(domain, record_name)`.
    ///
    /// Both segments are percent-encoded so a name containing `/` or other
    /// reserved characters cannot change the request path.
    fn record_url(&self, domain: &str, record_name: &str) -> String {
        format!(
            "{}/v1/domains/{}/records/TXT/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(domain),
            urlencoding::encode(record_name)
        )
    }

    fn auth_header(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }

    fn api_error(&self, status: u16, body: &str) -> SolverError {
        let (code, message) = parse_api_error(body);
        SolverError::Api {
            provider: PROVIDER.to_string(),
            status,
            code,
            message,
        }
    }
}

#[async_trait]
impl TxtRecordStore for GodaddyClient {
    async fn get_txt_record(&self, zone: &str, record_name: &str) -> Result<Option<DnsRecord>> {
        if record_name.is_empty() {
            return Err(SolverError::InvalidInput {
                provider: PROVIDER.to_string(),
                detail: "record name cannot be empty".to_string(),
            });
        }

        let url = self.record_url(zone, record_name);
        let request = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header());

        let (status, body) = HttpUtils::execute_request(request, PROVIDER, "GET", &url).await?;
        if status != 200 {
            log::error!("[{PROVIDER}] failed to get record {record_name} for domain {zone}");
            return Err(self.api_error(status, &body));
        }

        // The resource is a list; the name filter in the path is a prefix
        // match on some API versions, so match exactly here.
        let records: Vec<DnsRecord> = HttpUtils::parse_json(&body, PROVIDER)?;
        Ok(records.into_iter().find(|r| r.name == record_name))
    }

    async fn set_txt_record(
        &self,
        zone: &str,
        record_name: &str,
        record: &DnsRecord,
    ) -> Result<()> {
        let url = self.record_url(zone, record_name);
        // The API always expects an array, even for a single record.
        let request = self
            .client
            .put(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(std::slice::from_ref(record));

        let (status, body) = HttpUtils::execute_request(request, PROVIDER, "PUT", &url).await?;
        if status != 200 {
            log::error!("[{PROVIDER}] failed to set record {record_name} for domain {zone}");
            return Err(self.api_error(status, &body));
        }

        Ok(())
    }

    async fn delete_txt_record(&self, zone: &str, record_name: &str) -> Result<()> {
        let url = self.record_url(zone, record_name);
        let request = self
            .client
            .delete(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header());

        let (status, body) = HttpUtils::execute_request(request, PROVIDER, "DELETE", &url).await?;
        match status {
            // 404: already absent. Deletion is idempotent.
            204 | 404 => Ok(()),
            _ => {
                log::error!("[{PROVIDER}] failed to delete record {record_name} for domain {zone}");
                Err(self.api_error(status, &body))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GodaddyClient {
        GodaddyClient::new("key".to_string(), "secret".to_string())
    }

    #[test]
    fn record_url_joins_without_double_slash() {
        let c = GodaddyClient::with_base_url(
            "key".to_string(),
            "secret".to_string(),
            "https://api.example.test/",
        );
        assert_eq!(
            c.record_url("example.com", "_acme-challenge"),
            "https://api.example.test/v1/domains/example.com/records/TXT/_acme-challenge"
        );
    }

    #[test]
    fn record_url_encodes_hostile_segments() {
        let c = client();
        let url = c.record_url("example.com", "../../../admin");
        assert!(!url.contains("/../"));
        assert!(url.ends_with("/records/TXT/..%2F..%2F..%2Fadmin"));
    }

    #[test]
    fn auth_header_uses_sso_key_scheme() {
        assert_eq!(client().auth_header(), "sso-key key:secret");
    }

    #[test]
    fn api_error_carries_parsed_code() {
        let err = client().api_error(404, r#"{"code":"NOT_FOUND","message":"no such record"}"#);
        assert!(
            matches!(
                &err,
                SolverError::Api { status: 404, code: Some(code), message, .. }
                    if code == "NOT_FOUND" && message == "no such record"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn api_error_falls_back_to_raw_body() {
        let err = client().api_error(502, "bad gateway");
        assert!(
            matches!(
                &err,
                SolverError::Api { status: 502, code: None, message, .. }
                    if message == "bad gateway"
            ),
            "unexpected error: {err:?}"
        );
    }
}
