//! Helper functions could be used in api/, front/, services/, ...

use chrono::{NaiveDate, Utc};
use rand::Rng;
use std::sync::LazyLock;
use std::time::Duration;

/// Current date in UTC, the reference "today" for every derived status
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Cosmetic "blockchain" hash: `0x` followed by 64 random hex chars.
/// It is not derived from the record content.
pub fn random_blockchain_hash() -> String {
    let bytes: [u8; 32] = rand::thread_rng().r#gen();

    format!("0x{}", hex::encode(bytes))
}

/// Client to make http requests
pub static REQUEST_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Builds a dedicated client when a timeout is configured, otherwise shares [REQUEST_CLIENT]
pub fn build_request_client(timeout_secs: Option<u64>) -> anyhow::Result<reqwest::Client> {
    match timeout_secs {
        Some(secs) => Ok(reqwest::Client::builder()
            .timeout(Duration::from_secs(secs))
            .build()?),
        None => Ok(REQUEST_CLIENT.clone()),
    }
}
