//! Random site domain labels.
//!
//! New sites and domain rotations need a label that is unique enough in
//! practice: the sub-millisecond offset of the current time in base 36,
//! then four random characters.

use chrono::Utc;
use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh domain label, 5 to 8 characters of `[a-z0-9]`.
pub fn random_label() -> String {
    let time_factor = (Utc::now().timestamp_subsec_nanos() % 1_000_000) as u64;
    let mut label = to_base36(time_factor);
    let mut rng = rand::thread_rng();
    for _ in 0..4 {
        label.push(CHARSET[rng.gen_range(0..CHARSET.len())] as char);
    }
    label
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36_vectors() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(123456), "2n9c");
        assert_eq!(to_base36(999999), "lflr");
    }

    #[test]
    fn test_label_shape() {
        for _ in 0..100 {
            let label = random_label();
            assert!(label.len() >= 5 && label.len() <= 8, "bad length: {label}");
            assert!(
                label
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
                "bad charset: {label}"
            );
        }
    }
}
