pub mod columns;
pub mod merge;
pub mod reader;
pub mod separator;
pub mod writer;

pub use columns::ColumnMap;
pub use merge::{MergePolicy, merge};
pub use reader::{
    GROUP_MAX_LEN, HIDE_BOUND_MAX_LEN, ImportBatch, ImportOptions, LABEL_MAX_LEN, MAX_COLUMNS,
    TITLE_MAX_LEN, VALUE_MAX_LEN, parse_options,
};
pub use separator::{MAX_SEPARATOR_LEN, Separator};
pub use writer::{ExportOptions, write_options};
