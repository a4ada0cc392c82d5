use url::form_urlencoded;

use crate::data::ChunkSpec;
use crate::error::EncodingError;

/// Encode key/value pairs as an `application/x-www-form-urlencoded` query.
///
/// Keys and values must be valid UTF-8. Pairs are joined with `&` in the
/// order given, with no trailing separator.
///
/// # Examples
///
/// ```
/// use randorg_fetch::encode_query;
///
/// let query = encode_query([("num", "4"), ("format", "plain")]).unwrap();
/// assert_eq!(query, "num=4&format=plain");
///
/// let query = encode_query([("a b", "x&y")]).unwrap();
/// assert_eq!(query, "a+b=x%26y");
/// ```
pub fn encode_query<I, K, V>(params: I) -> Result<String, EncodingError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    let mut query = form_urlencoded::Serializer::new(String::new());

    for (key, value) in params {
        let key_bytes = key.as_ref();
        let key = std::str::from_utf8(key_bytes).map_err(|source| EncodingError {
            key: String::from_utf8_lossy(key_bytes).into_owned(),
            source,
        })?;
        let value = std::str::from_utf8(value.as_ref()).map_err(|source| EncodingError {
            key: key.to_string(),
            source,
        })?;
        query.append_pair(key, value);
    }

    Ok(query.finish())
}

/// Full request URL for one chunk against `endpoint`.
pub fn chunk_url(endpoint: &str, chunk: &ChunkSpec) -> Result<String, EncodingError> {
    let query = encode_query(chunk.params())?;
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    Ok(format!("{endpoint}{separator}{query}"))
}
