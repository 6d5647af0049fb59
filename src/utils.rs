//! Utility functions for directory management and small host queries
//!
//! Directory helpers follow the XDG Base Directory specification for portable
//! configuration and data storage across Linux distributions.
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/finentry/` - Config and the key-value store
//! - State: `~/.local/state/finentry/` - Runtime state (log file)

use directories::ProjectDirs;
use std::path::PathBuf;

pub fn get_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "finentry", "finentry").map(|pd| pd.data_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "finentry", "finentry")
        .and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

pub fn ensure_dirs() -> std::io::Result<()> {
    if let Some(dir) = get_data_dir() {
        std::fs::create_dir_all(dir)?;
    }
    if let Some(dir) = get_state_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Reports whether the machine currently has a usable network interface.
///
/// True when any non-loopback interface carries a non-link-local address.
/// This reflects the connectivity signal only; it does not probe a remote
/// host.
pub fn is_online() -> bool {
    use network_interface::{NetworkInterface, NetworkInterfaceConfig};
    use std::net::IpAddr;

    NetworkInterface::show()
        .map(|interfaces| {
            interfaces
                .iter()
                .flat_map(|interface| interface.addr.iter())
                .any(|addr| {
                    let ip = addr.ip();
                    if ip.is_loopback() {
                        return false;
                    }
                    match ip {
                        IpAddr::V4(v4) => !v4.is_link_local(),
                        IpAddr::V6(v6) => v6.segments()[0] & 0xffc0 != 0xfe80,
                    }
                })
        })
        .unwrap_or(false)
}

/// Reads a single query parameter from a URL or bare query string.
///
/// Accepts `https://host/path?a=1&b=2`, `?a=1` or `a=1&b=2`. Values are
/// percent-decoded and `+` is treated as a space. Returns `None` when the
/// parameter is absent; a parameter without `=` yields an empty string.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let query = match url.split_once('?') {
        Some((_, query)) => query,
        None if url.contains('=') => url,
        None => return None,
    };

    // Anything after a fragment marker is not part of the query
    let query = query.split('#').next().unwrap_or(query);

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        if percent_decode(key) == name {
            return Some(percent_decode(value));
        }
    }
    None
}

/// Decodes `%XX` escapes and `+` as space; malformed escapes pass through
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = (
                    (bytes[i + 1] as char).to_digit(16),
                    (bytes[i + 2] as char).to_digit(16),
                );
                if let (Some(hi), Some(lo)) = hex {
                    decoded.push((hi * 16 + lo) as u8);
                    i += 3;
                } else {
                    decoded.push(b'%');
                    i += 1;
                }
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded).unwrap_or_else(|_| input.to_string())
}

/// Truncates a string to a maximum length and adds an ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // Find the nearest character boundary to avoid splitting multi-byte characters
        let end = s
            .char_indices()
            .map(|(idx, _)| idx)
            .take_while(|&idx| idx <= max_len.saturating_sub(3))
            .last()
            .unwrap_or(0);
        format!("{}...", &s[..end])
    }
}
