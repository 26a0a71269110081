use std::fmt;

/// Comprehensive error types for formsight operations
#[derive(Debug)]
pub enum FormsightError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Workbook reading error (xlsx/xls/xlsm/xlsb)
    Spreadsheet(calamine::Error),

    /// CSV reading error
    Csv(csv::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// The file parsed but holds zero data rows; the run must halt
    EmptyInput,

    /// File extension maps to no known parser
    UnsupportedFormat(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// File not found error
    FileNotFound(String),
}

impl fmt::Display for FormsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormsightError::Io(err) => write!(f, "IO error: {err}"),
            FormsightError::Config(msg) => write!(f, "Configuration error: {msg}"),
            FormsightError::Spreadsheet(err) => write!(f, "Spreadsheet error: {err}"),
            FormsightError::Csv(err) => write!(f, "CSV error: {err}"),
            FormsightError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            FormsightError::Json(err) => write!(f, "JSON serialization error: {err}"),
            FormsightError::EmptyInput => write!(f, "input file contains no data rows"),
            FormsightError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported file format: '{ext}'. Expected xlsx, xls, xlsm, xlsb, or csv")
            }
            FormsightError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            FormsightError::FileNotFound(path) => write!(f, "File not found: {path}"),
        }
    }
}

impl std::error::Error for FormsightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormsightError::Io(err) => Some(err),
            FormsightError::Spreadsheet(err) => Some(err),
            FormsightError::Csv(err) => Some(err),
            FormsightError::TomlParsing(err) => Some(err),
            FormsightError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormsightError {
    fn from(err: std::io::Error) -> Self {
        FormsightError::Io(err)
    }
}

impl From<calamine::Error> for FormsightError {
    fn from(err: calamine::Error) -> Self {
        FormsightError::Spreadsheet(err)
    }
}

impl From<csv::Error> for FormsightError {
    fn from(err: csv::Error) -> Self {
        FormsightError::Csv(err)
    }
}

impl From<toml::de::Error> for FormsightError {
    fn from(err: toml::de::Error) -> Self {
        FormsightError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for FormsightError {
    fn from(err: serde_json::Error) -> Self {
        FormsightError::Json(err)
    }
}

/// Type alias for Results using FormsightError
pub type Result<T> = std::result::Result<T, FormsightError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = FormsightError::Config("max_comments out of range".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: max_comments out of range"
        );

        let file_error = FormsightError::FileNotFound("/path/to/file".to_string());
        assert_eq!(format!("{file_error}"), "File not found: /path/to/file");

        let format_error = FormsightError::UnsupportedFormat("pdf".to_string());
        assert!(format!("{format_error}").contains("'pdf'"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let formsight_error = FormsightError::from(io_error);

        match formsight_error {
            FormsightError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let formsight_error = FormsightError::from(io_error);
        assert!(formsight_error.source().is_some());

        let empty = FormsightError::EmptyInput;
        assert!(empty.source().is_none());
    }

    #[test]
    fn test_error_from_toml() {
        #[derive(serde::Deserialize)]
        struct Dummy {
            #[allow(dead_code)]
            key: Option<String>,
        }

        let toml_error = toml::from_str::<Dummy>("not [ valid").unwrap_err();
        let formsight_error = FormsightError::from(toml_error);

        match formsight_error {
            FormsightError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }
}
