use std::collections::BTreeMap;

/// Fetched page bodies keyed by the URL they were requested with.
///
/// Only successful fetches appear. A URL requested twice occupies one key.
pub type PageContents = BTreeMap<String, String>;
