//! Uploaded-resume text extraction. Supported formats: .txt and .pdf.

use crate::errors::AppError;

pub fn extract_resume_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    let lower = filename.to_lowercase();

    if lower.ends_with(".txt") {
        Ok(String::from_utf8_lossy(data).into_owned())
    } else if lower.ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Validation(format!("Could not read PDF resume: {e}")))
    } else {
        Err(AppError::Validation(
            "Unsupported file format (use .txt or .pdf)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_passes_through() {
        let text = extract_resume_text("resume.txt", b"Jane Doe\nRust Engineer").unwrap();
        assert_eq!(text, "Jane Doe\nRust Engineer");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(extract_resume_text("RESUME.TXT", b"Jane Doe").is_ok());
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = extract_resume_text("resume.docx", b"").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_invalid_pdf_rejected() {
        let err = extract_resume_text("resume.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
