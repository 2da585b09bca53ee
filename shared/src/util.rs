/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a document number: `PREFIX-YYYYMMDD` plus four random
/// uppercase alphanumerics, e.g. `GAR-20250807X7Q2`.
///
/// Collision-free enough at back-office volume; uniqueness is ultimately
/// enforced by the storage layer.
pub fn document_no(prefix: &str) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let date = chrono::Utc::now().format("%Y%m%d");
    let mut rng = rand::thread_rng();
    let suffix: String = (0..4)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("{prefix}-{date}{suffix}")
}
