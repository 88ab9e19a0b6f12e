//! Shared helpers for identifiers and filename timestamps

use chrono::Local;
use rand::Rng;

const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_LENGTH: usize = 6;

/// Random 6-character uppercase-alphanumeric identifier, used for
/// experiment names and configuration filenames.
pub fn random_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..ID_CHARSET.len());
            ID_CHARSET[idx] as char
        })
        .collect()
}

/// Current local time in the `DD-MM-YYYY_HH-MM-SS` filename format.
pub fn current_time_as_string() -> String {
    Local::now().format("%d-%m-%Y_%H-%M-%S").to_string()
}
