use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const SAMPLE_PROFILE: &str = "John Smith - Senior Software Engineer\n\
5+ years Python, JavaScript, React development. Led team of 5, improved performance 40%.\n\
Skills: Python, AWS, Machine Learning, Leadership, Project Management\n\
Built scalable applications, managed CI/CD pipelines.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Paste(String),
    Stdin,
    TextFile(PathBuf),
    Pdf(PathBuf),
    Sample,
    LinkedInUrl(String),
}

impl ProfileSource {
    pub fn load(&self) -> Result<String> {
        match self {
            ProfileSource::Paste(text) => Ok(text.clone()),
            ProfileSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            ProfileSource::TextFile(path) => Ok(std::fs::read_to_string(path)?),
            ProfileSource::Pdf(path) => extract_pdf_text(path),
            ProfileSource::Sample => Ok(SAMPLE_PROFILE.to_string()),
            ProfileSource::LinkedInUrl(url) => Err(Error::UnsupportedSource(format!(
                "LinkedIn blocks scraping, cannot fetch {}",
                url
            ))),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ProfileSource::Paste(_) => "pasted text".to_string(),
            ProfileSource::Stdin => "stdin".to_string(),
            ProfileSource::TextFile(path) => path.display().to_string(),
            ProfileSource::Pdf(path) => format!("{} (PDF)", path.display()),
            ProfileSource::Sample => "sample profile".to_string(),
            ProfileSource::LinkedInUrl(url) => url.clone(),
        }
    }
}

// A PDF without a text layer yields an empty string
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        Error::PdfExtraction(format!("'{}': {}", path.display(), e))
    })?;

    let text = normalize_pdf_text(&text);
    if text.is_empty() {
        tracing::warn!("No text found in PDF {}", path.display());
    } else {
        tracing::info!("Extracted {} characters from {}", text.len(), path.display());
    }

    Ok(text)
}

fn normalize_pdf_text(raw: &str) -> String {
    raw.split('\u{c}')
        .flat_map(str::lines)
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_profile_text() {
        let text = ProfileSource::Sample.load().unwrap();
        assert!(text.starts_with("John Smith - Senior Software Engineer\n5+ years"));
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.split_whitespace().count(), 33);
    }

    #[test]
    fn test_paste_and_text_file() {
        assert_eq!(
            ProfileSource::Paste("hello".to_string()).load().unwrap(),
            "hello"
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Data engineer with Python").unwrap();
        let source = ProfileSource::TextFile(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), "Data engineer with Python");
    }

    #[test]
    fn test_linkedin_url_is_unsupported() {
        let source = ProfileSource::LinkedInUrl("https://www.linkedin.com/in/someone".to_string());
        let err = source.load().unwrap_err();
        assert!(matches!(err, Error::UnsupportedSource(_)));
        assert!(err.remediation().contains("--text"));
    }

    #[test]
    fn test_unreadable_pdf_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "this is not a pdf").unwrap();
        let err = ProfileSource::Pdf(file.path().to_path_buf()).load().unwrap_err();
        assert!(matches!(err, Error::PdfExtraction(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ProfileSource::Pdf(PathBuf::from("/no/such/profile.pdf"))
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_normalize_pdf_text() {
        let raw = "  \nPage one line  \n\u{c}Page two\n\n";
        assert_eq!(normalize_pdf_text(raw), "Page one line\nPage two");
    }
}
