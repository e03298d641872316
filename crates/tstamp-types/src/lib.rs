pub mod error;
pub mod fields;
pub mod line_ending;
pub mod record;
mod util;
pub mod verify;

pub use error::{Error, Result};
pub use fields::FieldSpec;
pub use line_ending::LineEnding;
pub use record::{FIELD_KEYS, FileRecord};
pub use util::opaque_text;
pub use verify::{FileDescriptor, ProviderFiles, VerifyListResponse};
