//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Wallet addresses are too long to show in full, so the UI displays the
//! first and last few characters with an ellipsis in between.

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x9f8c1a2b3c4d5e6f70818293a4b5c6d7e8f90a1b";
/// assert_eq!(format_address(addr, 6, 4), "0x9f8c...0a1b");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Hex addresses are ASCII, so byte slicing is safe once lengths check out
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}
