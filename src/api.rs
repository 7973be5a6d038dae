//! The project API as seen by push and pull. The HTTP client lives outside this crate.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Enabled,
    Completed,
}

/// A file ("page") stored in the remote project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemotePage {
    pub page_id: u64,
    /// Name of the uploaded source file.
    pub name: String,
    pub url: String,
    pub version_tag: Option<String>,
    pub content_type_code: String,
}

impl RemotePage {
    /// `url [tag]` when the page is tagged.
    pub fn display_name(&self) -> String {
        match &self.version_tag {
            Some(tag) => format!("{} [{}]", self.url, tag),
            None => self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadReceipt {
    pub upload_id: String,
    /// Version tags already used by a file with the same name.
    #[serde(default)]
    pub version_tags: Vec<String>,
}

pub trait ProjectApi {
    /// Find a page by its unique name in a language.
    fn find_page(&self, language_id: u64, file_name: &str) -> Result<Option<RemotePage>>;

    fn pages(&self, language_id: u64, statuses: &[PageStatus]) -> Result<Vec<RemotePage>>;

    fn upload(&self, file_name: &str, content_type_code: &str, content: &[u8]) -> Result<UploadReceipt>;

    /// Add an uploaded file to the project.
    fn append(&self, upload_id: &str, file_name: &str, version_tag: Option<&str>) -> Result<()>;

    /// Replace the content of an existing page.
    fn update(&self, page: &RemotePage, file_name: &str, content: &[u8]) -> Result<()>;

    fn download(&self, page: &RemotePage, language_id: u64) -> Result<Vec<u8>>;

    /// Project specific file formats, merged over the built-in table.
    fn content_type_overrides(&self) -> Result<Vec<(String, Vec<String>)>>;
}
