use serde::{Deserialize, Serialize};

/// One captured page state: the DOM markup (or pre-extracted visible text)
/// and an optional screenshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub dom: String,
    #[serde(default)]
    pub screenshot: ScreenshotSource,
}

impl Snapshot {
    pub fn new(dom: impl Into<String>, screenshot: ScreenshotSource) -> Self {
        Self {
            dom: dom.into(),
            screenshot,
        }
    }
}

/// The four accepted screenshot encodings. `Encoded` covers base64 data
/// URIs, filesystem paths and bare base64 payloads; which one it is gets
/// resolved at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenshotSource {
    #[default]
    Absent,
    Encoded(String),
    Bytes(Vec<u8>),
}

impl ScreenshotSource {
    pub fn is_absent(&self) -> bool {
        match self {
            ScreenshotSource::Absent => true,
            ScreenshotSource::Encoded(value) => value.trim().is_empty(),
            ScreenshotSource::Bytes(bytes) => bytes.is_empty(),
        }
    }
}

impl From<Vec<u8>> for ScreenshotSource {
    fn from(bytes: Vec<u8>) -> Self {
        ScreenshotSource::Bytes(bytes)
    }
}

impl From<&str> for ScreenshotSource {
    fn from(value: &str) -> Self {
        ScreenshotSource::Encoded(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_detection_covers_all_encodings() {
        assert!(ScreenshotSource::Absent.is_absent());
        assert!(ScreenshotSource::Encoded("  ".into()).is_absent());
        assert!(ScreenshotSource::Bytes(Vec::new()).is_absent());
        assert!(!ScreenshotSource::Bytes(vec![1, 2, 3]).is_absent());
    }

    #[test]
    fn deserializes_untagged_variants() {
        let bytes: ScreenshotSource = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(bytes, ScreenshotSource::Bytes(vec![1, 2, 3]));

        let encoded: ScreenshotSource = serde_json::from_str("\"/tmp/shot.png\"").unwrap();
        assert_eq!(encoded, ScreenshotSource::Encoded("/tmp/shot.png".into()));

        let absent: ScreenshotSource = serde_json::from_str("null").unwrap();
        assert_eq!(absent, ScreenshotSource::Absent);
    }
}
