use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 9;

static LAST_MILLIS: AtomicU64 = AtomicU64::new(0);

/// Fresh record id: nine random base-36 characters followed by a base-36
/// millisecond stamp. The stamp never repeats within the process, so
/// consecutive ids differ even when the clock does not move.
pub fn new_record_id() -> String {
    let mut rng = rand::thread_rng();
    let mut id = String::with_capacity(RANDOM_LEN + 9);
    for _ in 0..RANDOM_LEN {
        id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
    id.push_str(&to_base36(next_stamp()));
    id
}

fn next_stamp() -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let previous = LAST_MILLIS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    now.max(previous + 1)
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
