//! # Shared Utility Functions
//!
//! Address formatting used by the wallet session notifications and the navbar.
//!
//! - [`format_address`] - Keep the first and last N characters around a separator
//! - [`abbreviate_public_key`] - The wallet notification form: keys longer than
//!   20 characters become `first7.....last7`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 4, 4, "..."), "8W6Q...JKAL");
//! ```

/// Keys up to this many characters are displayed unabbreviated.
pub const ABBREVIATION_THRESHOLD: usize = 20;

/// Characters kept on each side of an abbreviated key.
pub const ABBREVIATION_KEEP: usize = 7;

/// Separator placed between the kept head and tail of an abbreviated key.
pub const ABBREVIATION_SEPARATOR: &str = ".....";

/// Format an address by keeping the first `prefix_len` and last `suffix_len`
/// characters joined by `separator`.
///
/// Addresses of `prefix_len + suffix_len` characters or fewer are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 6, 6, "..."), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4, "..."), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize, separator: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{prefix}{separator}{suffix}")
}

/// Abbreviate a base58 public key for wallet notifications.
///
/// Keys longer than [`ABBREVIATION_THRESHOLD`] characters keep their first and
/// last [`ABBREVIATION_KEEP`] characters around [`ABBREVIATION_SEPARATOR`];
/// shorter keys are returned unchanged.
///
/// ```rust
/// use shared::utils::abbreviate_public_key;
///
/// assert_eq!(abbreviate_public_key("11111111111111111111"), "11111111111111111111");
/// ```
pub fn abbreviate_public_key(key: &str) -> String {
    if key.chars().count() > ABBREVIATION_THRESHOLD {
        format_address(key, ABBREVIATION_KEEP, ABBREVIATION_KEEP, ABBREVIATION_SEPARATOR)
    } else {
        key.to_string()
    }
}
