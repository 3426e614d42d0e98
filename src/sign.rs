//! Request signature for the Kuaizhan API.
//!
//! Every call carries a `sign` parameter: an MD5 digest over the sorted
//! request parameters bracketed by the application secret. The scheme is
//! fixed by the remote service and has to stay bit-exact — MD5 and the
//! bare concatenation are not ours to strengthen.

use std::collections::BTreeMap;

use md5::{Digest, Md5};

/// Compute the `sign` parameter for a flattened request.
///
/// Parameter names concatenate with their values in byte order (the map's
/// natural order), with no separator, bracketed by `secret` on both
/// sides. Any key literally named `sign` is skipped, so re-signing an
/// already signed map yields the same digest. Returns 32 lowercase hex
/// characters.
pub fn sign(secret: &str, params: &BTreeMap<String, String>) -> String {
    let mut input = String::with_capacity(
        2 * secret.len() + params.iter().map(|(k, v)| k.len() + v.len()).sum::<usize>(),
    );
    input.push_str(secret);
    for (name, value) in params {
        if name == "sign" {
            continue;
        }
        input.push_str(name);
        input.push_str(value);
    }
    input.push_str(secret);

    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
