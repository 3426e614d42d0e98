//! Signed request dispatch.
//!
//! Each remote operation is a const [`Endpoint`] pairing a path with its
//! request and response shapes. [`Endpoint::invoke`] flattens the request,
//! signs it, makes exactly one HTTP round trip through the client's agent,
//! and decodes the `{code, msg, data}` envelope. Adding an operation is a
//! new const plus its two shapes; this module stays untouched.

pub mod ops;
pub mod types;

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::sign;
use types::{Envelope, ENVELOPE_OK};

/// HTTP verb of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

/// How the signed parameters travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// All signed parameters ride url-encoded: the body for POST, the
    /// query string for GET.
    Form,
    /// Only `appKey` and `sign` ride the query string; the typed request
    /// itself is the JSON body.
    Json,
}

/// Typed descriptor of one remote operation.
pub struct Endpoint<Q, R> {
    pub path: &'static str,
    pub verb: Verb,
    pub encoding: Encoding,
    marker: PhantomData<fn(&Q) -> R>,
}

impl<Q, R> Endpoint<Q, R> {
    pub const fn post_form(path: &'static str) -> Self {
        Endpoint {
            path,
            verb: Verb::Post,
            encoding: Encoding::Form,
            marker: PhantomData,
        }
    }

    pub const fn post_json(path: &'static str) -> Self {
        Endpoint {
            path,
            verb: Verb::Post,
            encoding: Encoding::Json,
            marker: PhantomData,
        }
    }

    pub const fn get(path: &'static str) -> Self {
        Endpoint {
            path,
            verb: Verb::Get,
            encoding: Encoding::Form,
            marker: PhantomData,
        }
    }
}

impl<Q, R> Endpoint<Q, R>
where
    Q: Serialize,
    R: DeserializeOwned + Default,
{
    /// Perform the operation against `client`.
    ///
    /// The signature covers the flattened business parameters only;
    /// `appKey` and `sign` are attached afterwards. `code != 200` in the
    /// envelope becomes [`Error::Api`]; a successful envelope with no
    /// `data` yields the payload's `Default`.
    pub fn invoke(&self, client: &Client, request: &Q) -> Result<R> {
        let url = format!("{}{}", client.base_url(), self.path);
        let mut params = flatten(request)?;
        let digest = sign::sign(client.app_secret(), &params);

        let mut response = match (self.verb, self.encoding) {
            (Verb::Get, _) => {
                params.insert("sign".to_string(), digest);
                params.insert("appKey".to_string(), client.app_key().to_string());
                if client.debug() {
                    tracing::debug!("GET {url} query={params:?}");
                }
                client
                    .agent()
                    .get(&url)
                    .query_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                    .call()?
            }
            (Verb::Post, Encoding::Form) => {
                params.insert("sign".to_string(), digest);
                params.insert("appKey".to_string(), client.app_key().to_string());
                if client.debug() {
                    tracing::debug!("POST {url} form={params:?}");
                }
                client
                    .agent()
                    .post(&url)
                    .send_form(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))?
            }
            (Verb::Post, Encoding::Json) => {
                if client.debug() {
                    let body = serde_json::to_string(request)?;
                    tracing::debug!("POST {url} sign={digest} body={body}");
                }
                client
                    .agent()
                    .post(&url)
                    .query_pairs([("appKey", client.app_key()), ("sign", digest.as_str())])
                    .send_json(request)?
            }
        };

        let status = response.status();
        if client.debug() {
            tracing::debug!("{url} status={status} headers={:?}", response.headers());
        }
        let text = response.body_mut().read_to_string()?;
        if client.debug() {
            tracing::debug!("{url} body={text}");
        }

        let envelope: Envelope<R> = serde_json::from_str(&text)?;
        if envelope.code != ENVELOPE_OK {
            return Err(Error::Api {
                code: envelope.code,
                message: envelope.msg,
            });
        }
        Ok(envelope.data.unwrap_or_default())
    }
}

/// Flatten a request into the `name -> text` map the signature covers.
///
/// Scalars keep their plain textual form, `null` fields are dropped, and
/// array or object values carry their compact JSON text (the batch
/// operation legitimately sends id arrays). Anything but an object at the
/// top level is a caller bug.
fn flatten<Q: Serialize>(request: &Q) -> Result<BTreeMap<String, String>> {
    let fields = match serde_json::to_value(request)? {
        serde_json::Value::Object(fields) => fields,
        _ => {
            return Err(Error::SignatureInput(
                "request must serialize to a JSON object".to_string(),
            ))
        }
    };

    let mut params = BTreeMap::new();
    for (name, field) in fields {
        let text = match field {
            serde_json::Value::Null => continue,
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s,
            nested => serde_json::to_string(&nested)?,
        };
        params.insert(name, text);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        site_id: u64,
        domain: String,
        https_forward: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        task_id: Option<String>,
    }

    #[test]
    fn test_flatten_stringifies_scalars() {
        let map = flatten(&Sample {
            site_id: 42,
            domain: "shop.kuaizhan.com".to_string(),
            https_forward: true,
            task_id: None,
        })
        .unwrap();
        assert_eq!(map["siteId"], "42");
        assert_eq!(map["domain"], "shop.kuaizhan.com");
        assert_eq!(map["httpsForward"], "true");
        assert!(!map.contains_key("taskId"));
    }

    #[test]
    fn test_flatten_drops_null_fields() {
        #[derive(Serialize)]
        struct WithNull {
            kept: u64,
            gone: Option<String>,
        }
        let map = flatten(&WithNull { kept: 1, gone: None }).unwrap();
        assert_eq!(map["kept"], "1");
        assert!(!map.contains_key("gone"));
    }

    #[test]
    fn test_flatten_encodes_arrays_as_compact_json() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Batch {
            site_ids: Vec<u64>,
            page_ids: Vec<u64>,
        }
        let map = flatten(&Batch {
            site_ids: vec![1, 2],
            page_ids: vec![30],
        })
        .unwrap();
        assert_eq!(map["siteIds"], "[1,2]");
        assert_eq!(map["pageIds"], "[30]");
    }

    #[test]
    fn test_flatten_rejects_non_object_requests() {
        let err = flatten(&"bare string").unwrap_err();
        assert!(matches!(err, Error::SignatureInput(_)));
    }

    #[test]
    fn test_constructors_pick_transport_mode() {
        let form: Endpoint<Sample, types::PublishSiteData> = Endpoint::post_form("/x");
        assert_eq!(form.verb, Verb::Post);
        assert_eq!(form.encoding, Encoding::Form);

        let json: Endpoint<Sample, types::PublishSiteData> = Endpoint::post_json("/x");
        assert_eq!(json.verb, Verb::Post);
        assert_eq!(json.encoding, Encoding::Json);

        let get: Endpoint<Sample, types::PublishSiteData> = Endpoint::get("/x");
        assert_eq!(get.verb, Verb::Get);
    }
}
