//! Upload progress tracking
//!
//! Uploads are consumed chunk by chunk; the tracker turns byte counts into
//! whole percentages and only reports when the percentage actually moves.

/// Maximum accepted upload size (20MB)
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Supported image extensions
pub const SUPPORTED_IMAGE_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Byte-count based progress for one upload
#[derive(Debug, Clone)]
pub struct UploadProgress {
    /// Expected size, when the client declared one
    expected: Option<u64>,
    received: u64,
    last_percent: Option<u8>,
}

impl UploadProgress {
    pub fn new(expected: Option<u64>) -> Self {
        Self {
            expected: expected.filter(|n| *n > 0),
            received: 0,
            last_percent: None,
        }
    }

    /// Account for a received chunk; returns the new percentage when it changed
    pub fn advance(&mut self, chunk_len: usize) -> Option<u8> {
        self.received += chunk_len as u64;
        let percent = self.percent()?;
        if self.last_percent == Some(percent) {
            return None;
        }
        self.last_percent = Some(percent);
        Some(percent)
    }

    /// Whole percentage received, capped at 100; `None` without a known size
    pub fn percent(&self) -> Option<u8> {
        let expected = self.expected?;
        let pct = (self.received.saturating_mul(100) / expected).min(100);
        Some(pct as u8)
    }

    pub fn received(&self) -> u64 {
        self.received
    }
}

/// Lowercased extension of an uploaded file name
pub fn file_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Storage key `"{prefix}/{millis}_{name}"`, with path separators and
/// whitespace in the client-supplied name replaced
pub fn storage_key(prefix: &str, now_millis: i64, filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();
    format!("{prefix}/{now_millis}_{safe}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_on_change() {
        let mut p = UploadProgress::new(Some(1000));
        assert_eq!(p.advance(5), Some(0));
        assert_eq!(p.advance(4), None);
        assert_eq!(p.advance(241), Some(25));
        assert_eq!(p.advance(750), Some(100));
        assert_eq!(p.received(), 1000);
    }

    #[test]
    fn caps_at_one_hundred() {
        let mut p = UploadProgress::new(Some(10));
        assert_eq!(p.advance(50), Some(100));
        assert_eq!(p.percent(), Some(100));
    }

    #[test]
    fn unknown_size_has_no_percentage() {
        let mut p = UploadProgress::new(None);
        assert_eq!(p.advance(1024), None);
        assert_eq!(p.received(), 1024);
        assert!(UploadProgress::new(Some(0)).percent().is_none());
    }

    #[test]
    fn key_and_extension() {
        assert_eq!(
            storage_key("gallery", 1700, "team photo/../x.PNG"),
            "gallery/1700_team_photo_.._x.PNG"
        );
        assert_eq!(file_extension("x.PNG"), "png");
        assert_eq!(file_extension("noext"), "");
    }
}
