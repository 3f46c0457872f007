use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A file bundled with a notification
///
/// URL attachments are delivered by reference, file attachments are uploaded
/// as the request body. See <https://docs.ntfy.sh/publish/#attachments>.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Url(UrlAttachment),
    File(FileAttachment),
}

impl Attachment {
    /// Attach a file hosted elsewhere
    pub fn url(url: impl Into<String>) -> Self {
        Attachment::Url(UrlAttachment {
            url: url.into(),
            file_name: None,
        })
    }

    /// Attach a file hosted elsewhere under a custom name
    pub fn url_named(url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Attachment::Url(UrlAttachment {
            url: url.into(),
            file_name: Some(file_name.into()),
        })
    }

    /// Upload a local file
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Attachment::File(FileAttachment {
            file: file.into(),
            file_name: None,
        })
    }

    /// Upload a local file under a custom name
    pub fn file_named(file: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Attachment::File(FileAttachment {
            file: file.into(),
            file_name: Some(file_name.into()),
        })
    }

    /// The explicitly configured file name, if any
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Attachment::Url(url) => url.file_name(),
            Attachment::File(file) => file.file_name(),
        }
    }

    /// The name announced to the server in the `Filename` header
    pub fn effective_file_name(&self) -> Option<Cow<'_, str>> {
        match self {
            Attachment::Url(url) => url.file_name().map(Cow::Borrowed),
            Attachment::File(file) => file.effective_file_name(),
        }
    }
}

impl From<UrlAttachment> for Attachment {
    fn from(attachment: UrlAttachment) -> Self {
        Attachment::Url(attachment)
    }
}

impl From<FileAttachment> for Attachment {
    fn from(attachment: FileAttachment) -> Self {
        Attachment::File(attachment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlAttachment {
    url: String,
    file_name: Option<String>,
}

impl UrlAttachment {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    file: PathBuf,
    file_name: Option<String>,
}

impl FileAttachment {
    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// The explicit name, falling back to the base name of the path
    pub fn effective_file_name(&self) -> Option<Cow<'_, str>> {
        match &self.file_name {
            Some(name) => Some(Cow::Borrowed(name.as_str())),
            None => self.file.file_name().map(|name| name.to_string_lossy()),
        }
    }
}
