//! Error handling for the generator.
//!
//! Fatal conditions are modelled by [`HeroiconsError`]. Recoverable per-stage
//! failures (a single unreadable source file, a single icon that fails to
//! download or parse, an unreachable catalog) have their own error types in
//! the modules that produce them and never reach this enum.
//!
//! At the CLI boundary every error is converted into an [`ErrorContext`] by
//! [`user_friendly_error`], which attaches details and an actionable
//! suggestion and prints them with terminal colours.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Fatal errors that abort a generator run.
#[derive(Error, Debug)]
pub enum HeroiconsError {
    /// The directory to scan does not exist or is not a directory.
    #[error("Input directory '{path}' not found or is not a directory")]
    InputDirNotFound {
        /// Path as given by the user
        path: String,
    },

    /// The output directory could not be created.
    #[error("Could not create output directory '{path}': {reason}")]
    OutputDirError {
        /// Directory that could not be created
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// An explicitly requested configuration file is missing.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path of the missing file
        path: String,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("Invalid configuration file {file}: {reason}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Icons were referenced but every one of them failed to download or parse.
    #[error("Failed to process any of the {requested} referenced icon(s)")]
    NoIconsResolved {
        /// Number of icons that were referenced
        requested: usize,
    },

    /// The component template could not be rendered.
    #[error("Template rendering failed: {reason}")]
    TemplateError {
        /// Tera's error chain, flattened
        reason: String,
    },

    /// The generated document could not be written.
    #[error("Failed to write '{path}': {reason}")]
    WriteError {
        /// Target file
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Catch-all for errors without a dedicated variant.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// An error bundled with optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: HeroiconsError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no suggestion or details.
    #[must_use]
    pub const fn new(error: HeroiconsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for CLI display.
///
/// Known [`HeroiconsError`] variants and I/O error kinds get tailored
/// suggestions; anything else is shown with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(context) = error.downcast_ref::<ErrorContext>() {
        return ErrorContext {
            error: HeroiconsError::Other {
                message: context.error.to_string(),
            },
            suggestion: context.suggestion.clone(),
            details: context.details.clone(),
        };
    }

    if let Some(known) = error.downcast_ref::<HeroiconsError>() {
        return create_error_context(known);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(HeroiconsError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion(
                    "Check file ownership and permissions of the input, output and cache directories",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(HeroiconsError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(HeroiconsError::Other {
        message: format_chain(&error),
    })
}

fn create_error_context(error: &HeroiconsError) -> ErrorContext {
    match error {
        HeroiconsError::InputDirNotFound { path } => {
            ErrorContext::new(HeroiconsError::InputDirNotFound { path: path.clone() })
                .with_suggestion("Pass the root of your templ project with --input-dir")
        }
        HeroiconsError::OutputDirError { path, reason } => {
            ErrorContext::new(HeroiconsError::OutputDirError {
                path: path.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Choose a writable location with --output-dir")
        }
        HeroiconsError::ConfigNotFound { path } => {
            ErrorContext::new(HeroiconsError::ConfigNotFound { path: path.clone() })
                .with_suggestion(
                    "Check the --config path or unset TEMPL_HEROICONS_CONFIG to use defaults",
                )
        }
        HeroiconsError::ConfigParseError { file, reason } => {
            ErrorContext::new(HeroiconsError::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Verify the TOML syntax and field names of the configuration file")
        }
        HeroiconsError::NoIconsResolved { requested } => {
            ErrorContext::new(HeroiconsError::NoIconsResolved { requested: *requested })
                .with_details("The existing output file was left untouched")
                .with_suggestion(
                    "Check your network connection and the configured asset URL, or run with --verbose",
                )
        }
        HeroiconsError::TemplateError { reason } => {
            ErrorContext::new(HeroiconsError::TemplateError { reason: reason.clone() })
        }
        HeroiconsError::WriteError { path, reason } => {
            ErrorContext::new(HeroiconsError::WriteError {
                path: path.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Check free disk space and write permissions on the output directory")
        }
        HeroiconsError::Other { message } => ErrorContext::new(HeroiconsError::Other {
            message: message.clone(),
        }),
    }
}

fn format_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }
    message
}
