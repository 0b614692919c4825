pub mod editor;
pub mod error;
pub mod ops;
pub mod preview;

pub use editor::{Command, OptionListEditor};
pub use error::{EditorError, Result};
pub use ops::MoveDirection;
pub use preview::{
    CheckablePreview, Preview, PreviewSection, SelectPreview, checkable_preview, select_preview,
    visible_at,
};
