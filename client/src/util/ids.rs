//! Message identifier generation.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use ::time::OffsetDateTime;

const SUFFIX_LEN: usize = 9;

/// Generate a session-unique message id: `<unix-millis>-<random suffix>`.
///
/// The millisecond prefix keeps ids roughly ordered; the random suffix makes
/// collisions between ids minted in the same millisecond negligible.
pub fn generate_message_id() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &random[..SUFFIX_LEN])
}
