/// Text of a survey upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyContent {
    text: String,
}

impl SurveyContent {
    /// Decode raw object bytes. Invalid UTF-8 sequences become U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8() {
        let survey = SurveyContent::from_bytes("Q1: Wi-Fi drops\r\nQ2: yes".as_bytes());
        assert_eq!(survey.as_str(), "Q1: Wi-Fi drops\r\nQ2: yes");
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let survey = SurveyContent::from_bytes(&[b'o', b'k', 0xff]);
        assert_eq!(survey.as_str(), "ok\u{fffd}");
    }
}
