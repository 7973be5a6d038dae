pub mod content_type;
pub mod file;
pub mod walker;

pub use content_type::{ContentTypeTable, CONTENT_TYPE_CODES};
pub use file::{first_dot_extension, last_dot_extension, to_posix, TranslationFile};
pub use walker::{discover_files, files_in_project, PathStyle, ProjectFiles};
