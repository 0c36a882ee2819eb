//! File picker and drop zone.
//!
//! The host hands over [`SelectedFile`] descriptors (from an `<input>` change
//! or a drop); [`FileInput`] validates them against its props and keeps the
//! accepted list. A rejected batch leaves the list untouched and records a
//! [`FileError`] for display.

use thiserror::Error;

use crate::aria::AriaAttributes;

/// A file chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, possibly empty when the browser does not know it.
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Images get a preview.
    pub fn has_preview(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInputProps {
    /// Comma-separated list of `.ext`, `type/*` or exact MIME types.
    pub accept: Option<String>,
    pub multiple: bool,
    pub disabled: bool,
    /// Largest accepted file, in bytes.
    pub max_size: Option<u64>,
    /// Applies only with `multiple`.
    pub max_files: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("file size exceeds {}", format_file_size(*.max))]
    TooLarge { max: u64 },

    #[error("you can upload up to {max} files")]
    TooMany { max: usize },

    #[error("this file type is not allowed")]
    InvalidType,
}

/// Human-readable byte count: `512B`, `1.5KB`, `2.0MB`.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{}B", bytes)
    } else if bytes < MB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    }
}

fn accepts(accept: &str, file: &SelectedFile) -> bool {
    accept.split(',').map(str::trim).any(|pattern| {
        if pattern.starts_with('.') {
            file.name.to_lowercase().ends_with(&pattern.to_lowercase())
        } else if let Some(major) = pattern.strip_suffix("/*") {
            file.mime
                .strip_prefix(major)
                .is_some_and(|rest| rest.starts_with('/'))
        } else {
            file.mime == pattern
        }
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileInputState {
    pub disabled: bool,
    pub is_dragging: bool,
    pub has_error: bool,
    pub has_files: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FileInput {
    props: FileInputProps,
    files: Vec<SelectedFile>,
    is_dragging: bool,
    error: Option<FileError>,
}

impl FileInput {
    pub fn new(props: FileInputProps) -> Self {
        Self {
            props,
            ..Default::default()
        }
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn error(&self) -> Option<&FileError> {
        self.error.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn state(&self) -> FileInputState {
        FileInputState {
            disabled: self.props.disabled,
            is_dragging: self.is_dragging,
            has_error: self.error.is_some(),
            has_files: !self.files.is_empty(),
        }
    }

    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes::new()
            .set_if(self.props.disabled, "aria-disabled", true)
            .set_if(self.error.is_some(), "aria-invalid", true)
    }

    pub fn validate(&self, file: &SelectedFile) -> Result<(), FileError> {
        if let Some(max) = self.props.max_size {
            if file.size > max {
                return Err(FileError::TooLarge { max });
            }
        }
        if let Some(accept) = self.props.accept.as_deref() {
            if !accepts(accept, file) {
                return Err(FileError::InvalidType);
            }
        }
        Ok(())
    }

    /// Validates and takes a batch of files.
    ///
    /// The first invalid file rejects the whole batch. Without `multiple`
    /// only the first file is kept and it replaces any previous selection.
    pub fn handle_files(&mut self, batch: Vec<SelectedFile>) {
        if self.props.disabled {
            return;
        }
        self.error = None;

        if let Some(err) = batch.iter().find_map(|f| self.validate(f).err()) {
            tracing::debug!(error = %err, "file rejected");
            self.error = Some(err);
            return;
        }

        if self.props.multiple {
            if let Some(max) = self.props.max_files {
                if self.files.len() + batch.len() > max {
                    self.error = Some(FileError::TooMany { max });
                    return;
                }
            }
            self.files.extend(batch);
        } else {
            self.files = batch.into_iter().take(1).collect();
        }
    }

    pub fn handle_drag_enter(&mut self) {
        if !self.props.disabled {
            self.is_dragging = true;
        }
    }

    pub fn handle_drag_leave(&mut self) {
        self.is_dragging = false;
    }

    pub fn handle_drop(&mut self, batch: Vec<SelectedFile>) {
        self.is_dragging = false;
        self.handle_files(batch);
    }

    /// Removes the file at `index`, if any.
    pub fn remove_file(&mut self, index: usize) -> Option<SelectedFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn clear_files(&mut self) {
        self.files.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str, size: u64) -> SelectedFile {
        SelectedFile::new(name, size, "image/png")
    }

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, 10, "application/pdf")
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512B");
        assert_eq!(format_file_size(1536), "1.5KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.0MB");
    }

    #[test]
    fn test_max_size_message() {
        let mut input = FileInput::new(FileInputProps {
            max_size: Some(1024 * 1024),
            ..Default::default()
        });
        input.handle_files(vec![png("big.png", 2 * 1024 * 1024)]);
        assert_eq!(input.error(), Some(&FileError::TooLarge { max: 1024 * 1024 }));
        assert_eq!(input.error().unwrap().to_string(), "file size exceeds 1.0MB");
        assert!(input.files().is_empty());
        assert!(input.aria().contains("aria-invalid"));
    }

    #[test]
    fn test_accept_patterns() {
        let input = FileInput::new(FileInputProps {
            accept: Some(".PDF, image/*".to_string()),
            ..Default::default()
        });
        assert!(input.validate(&pdf("report.pdf")).is_ok());
        assert!(input.validate(&png("photo.png", 1)).is_ok());
        assert_eq!(
            input.validate(&SelectedFile::new("notes.txt", 1, "text/plain")),
            Err(FileError::InvalidType)
        );
        // "image/*" must not match "imagex/..."
        assert!(input
            .validate(&SelectedFile::new("x.bin", 1, "imagex/raw"))
            .is_err());

        let exact = FileInput::new(FileInputProps {
            accept: Some("application/json".to_string()),
            ..Default::default()
        });
        assert!(exact
            .validate(&SelectedFile::new("a.json", 1, "application/json"))
            .is_ok());
        assert!(exact.validate(&pdf("a.pdf")).is_err());
    }

    #[test]
    fn test_single_replaces_selection() {
        let mut input = FileInput::new(FileInputProps::default());
        input.handle_files(vec![pdf("a.pdf"), pdf("b.pdf")]);
        assert_eq!(input.files().len(), 1);
        input.handle_files(vec![pdf("c.pdf")]);
        assert_eq!(input.files()[0].name, "c.pdf");
    }

    #[test]
    fn test_multiple_respects_max_files() {
        let mut input = FileInput::new(FileInputProps {
            multiple: true,
            max_files: Some(2),
            ..Default::default()
        });
        input.handle_files(vec![pdf("a.pdf")]);
        input.handle_files(vec![pdf("b.pdf"), pdf("c.pdf")]);
        assert_eq!(input.files().len(), 1);
        assert_eq!(input.error().unwrap().to_string(), "you can upload up to 2 files");

        input.handle_files(vec![pdf("b.pdf")]);
        assert_eq!(input.files().len(), 2);
        assert!(input.error().is_none());
    }

    #[test]
    fn test_drag_and_drop() {
        let mut input = FileInput::new(FileInputProps::default());
        input.handle_drag_enter();
        assert!(input.state().is_dragging);
        input.handle_drop(vec![png("a.png", 1)]);
        assert!(!input.is_dragging());
        assert!(input.state().has_files);
        assert!(input.files()[0].has_preview());
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut input = FileInput::new(FileInputProps {
            disabled: true,
            ..Default::default()
        });
        input.handle_drag_enter();
        assert!(!input.is_dragging());
        input.handle_drop(vec![pdf("a.pdf")]);
        assert!(input.files().is_empty());
        assert_eq!(input.aria().get_str("aria-disabled").as_deref(), Some("true"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut input = FileInput::new(FileInputProps {
            multiple: true,
            ..Default::default()
        });
        input.handle_files(vec![pdf("a.pdf"), pdf("b.pdf")]);
        assert_eq!(input.remove_file(0).map(|f| f.name), Some("a.pdf".to_string()));
        assert_eq!(input.remove_file(5), None);
        input.clear_files();
        assert!(!input.state().has_files);
    }
}
