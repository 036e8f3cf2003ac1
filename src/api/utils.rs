use crate::api::error::VraAPIError;
use log::{error, warn};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Sends the request, turning transport failures and non-success statuses into errors
pub(crate) async fn send(rb: RequestBuilder) -> Result<Response, VraAPIError> {
    let response = match rb.send().await {
        Ok(response) => response,
        Err(e) => {
            error!("{:?}", e);
            return Err(e.into());
        }
    };
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    warn!("{} result: {}", status, body);
    if status == reqwest::StatusCode::UNAUTHORIZED.as_u16() {
        return Err(VraAPIError::InvalidCredentials(body));
    }
    Err(VraAPIError::APIError { status, body })
}

/// Sends the request and decodes a JSON body
pub(crate) async fn send_json<T: DeserializeOwned>(rb: RequestBuilder) -> Result<T, VraAPIError> {
    let text = send(rb).await?.text().await?;
    decode(&text)
}

pub(crate) fn decode<T: DeserializeOwned>(text: &str) -> Result<T, VraAPIError> {
    serde_json::from_str(text).map_err(|e| {
        error!("{:?}", e);
        VraAPIError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::decode;
    use crate::api::error::VraAPIError;
    use crate::api::types::entitlement::Entitlement;

    #[test]
    fn decode_list() {
        let list: Vec<Entitlement> =
            decode(r#"[{"id":"a","projectId":"p"},{"id":"b","projectId":"p"}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id.as_deref(), Some("b"));
    }

    #[test]
    fn decode_garbage() {
        let result: Result<Vec<Entitlement>, VraAPIError> = decode("<html>");
        assert!(matches!(result, Err(VraAPIError::Decode(_))));
    }
}
