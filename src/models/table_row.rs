use serde::{de::DeserializeOwned, Serialize};

/// A record stored as one line of a flat table.
///
/// `HEADERS` must list the column names in field declaration order, since
/// rows are written positionally below the header line.
pub trait TableRow: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const HEADERS: &'static [&'static str];
}
