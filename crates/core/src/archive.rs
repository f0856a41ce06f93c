use std::fmt;

/// Path segment that marks survey uploads.
pub const SURVEY_SEGMENT: &str = "surveys";

/// Path segment the matching sysdiagnose archive is stored under.
pub const ARCHIVE_SEGMENT: &str = "logs";

pub const SURVEY_EXTENSION: &str = ".txt";
pub const ARCHIVE_EXTENSION: &str = ".tar.gz";

/// Key of the sysdiagnose archive that belongs to a survey upload.
///
/// Surveys and archives differ only by their path segment and extension, so
/// the archive key is derived by plain substitution. Nothing checks that the
/// survey key actually contains either substring: a key without them passes
/// through that substitution unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReference {
    key: String,
}

impl ArchiveReference {
    /// Replace the first `surveys` with `logs`, then the first `.txt` with
    /// `.tar.gz`.
    pub fn from_survey_key(survey_key: &str) -> Self {
        let key = survey_key
            .replacen(SURVEY_SEGMENT, ARCHIVE_SEGMENT, 1)
            .replacen(SURVEY_EXTENSION, ARCHIVE_EXTENSION, 1);
        Self { key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for ArchiveReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_archive_key() {
        let archive = ArchiveReference::from_survey_key("itslog/surveys/report.txt");
        assert_eq!(archive.key(), "itslog/logs/report.tar.gz");
        assert_eq!(archive.to_string(), "itslog/logs/report.tar.gz");
    }

    #[test]
    fn replaces_only_first_occurrences() {
        let archive = ArchiveReference::from_survey_key("surveys/surveys/a.txt.txt");
        assert_eq!(archive.key(), "logs/surveys/a.tar.gz.txt");
    }

    #[test]
    fn key_without_markers_passes_through() {
        let archive = ArchiveReference::from_survey_key("uploads/report.log");
        assert_eq!(archive.key(), "uploads/report.log");
    }

    #[test]
    fn extension_replaced_even_mid_key() {
        // Not a suffix check: the first `.txt` anywhere is rewritten.
        let archive = ArchiveReference::from_survey_key("itslog/surveys/a.txt.bak");
        assert_eq!(archive.key(), "itslog/logs/a.tar.gz.bak");
    }
}
