/// Default HTTP port for server mode
pub const DEFAULT_PORT: u16 = 3000;

/// Default application limit on convertible amounts (inclusive)
///
/// The converter itself handles far larger amounts; this narrower bound is
/// what the service exposes to end users.
pub const DEFAULT_MAX_AMOUNT: u64 = 10_000;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Header used to correlate requests across logs
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_amount_reasonable() {
        assert!(DEFAULT_MAX_AMOUNT > 0);
        assert!(DEFAULT_MAX_AMOUNT < 1_000_000_000); // Below the smallest ceiling
    }

    #[test]
    fn test_request_id_header_not_empty() {
        assert!(!REQUEST_ID_HEADER.is_empty());
    }
}
