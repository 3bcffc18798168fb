// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error notices shown by the editor UI.
//
// Every technical error is mapped to a short plain-language message with a
// suggestion. Severity drives how the notice is presented.

use crate::error::ImagedError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth trying again as-is (device busy, transient I/O).
    Transient,
    /// User must change something (pick another file, fix a field, plug in a camera).
    ActionRequired,
    /// Cannot be fixed by retrying — a bug or unsupported data.
    Permanent,
}

/// A human-readable error with a message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Short summary (notice title).
    pub message: String,
    /// What the user should try (notice body).
    pub suggestion: String,
    /// Whether repeating the same action may succeed.
    pub retriable: bool,
    /// Severity level.
    pub severity: Severity,
}

/// Convert an `ImagedError` into a notice the user can act on.
pub fn humanize_error(err: &ImagedError) -> HumanError {
    match err {
        ImagedError::Decode(_) => HumanError {
            message: "The image could not be opened.".into(),
            suggestion: "The file may be damaged or in an unsupported format. Try a PNG or JPEG file.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ImagedError::Encode(detail) => HumanError {
            message: "An error occurred while saving the file.".into(),
            suggestion: format!("Check that the folder exists and that you can write to it. ({detail})"),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        ImagedError::UnsupportedFormat(detail) => HumanError {
            message: "An error occurred while saving the file.".into(),
            suggestion: format!("Check the extension of the file name; use .png or .jpg. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ImagedError::Device(_) => HumanError {
            message: "The webcam could not be used.".into(),
            suggestion: "Check that your webcam is connected to this device and not in use by another program.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ImagedError::InvalidChannel(detail) => HumanError {
            message: "That colour channel does not exist.".into(),
            suggestion: format!("Choose red, green or blue. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ImagedError::InvalidSize { width, height } => HumanError {
            message: "The new size is not valid.".into(),
            suggestion: format!("Width and height must both be greater than zero (got {width}x{height})."),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ImagedError::InvalidRadius(radius) => HumanError {
            message: "The circle radius is not valid.".into(),
            suggestion: format!("Enter a radius greater than zero (got {radius})."),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ImagedError::NoImageLoaded => HumanError {
            message: "No image is loaded.".into(),
            suggestion: "Load an image or take a photo first.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ImagedError::InvalidInput { field, reason } => HumanError {
            message: format!("The {field} value is not valid."),
            suggestion: format!("Enter a whole number: {reason}."),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ImagedError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or choose a different location.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, the disk may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        ImagedError::Serialization(_) => HumanError {
            message: "The settings file could not be read.".into(),
            suggestion: "Delete the settings file to restore the defaults.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_failure_is_transient() {
        let human = humanize_error(&ImagedError::Device("no frame returned".into()));
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
        assert!(human.suggestion.contains("webcam"));
    }

    #[test]
    fn unsupported_extension_points_at_extension() {
        let human = humanize_error(&ImagedError::UnsupportedFormat(".xyz".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("extension"));
        assert!(human.suggestion.contains(".xyz"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = ImagedError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn invalid_input_names_the_field() {
        let err = ImagedError::InvalidInput {
            field: "brightness".into(),
            reason: "must be between 0 and 255".into(),
        };
        let human = humanize_error(&err);
        assert!(human.message.contains("brightness"));
    }
}
