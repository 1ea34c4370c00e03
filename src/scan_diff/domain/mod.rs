pub mod component;
pub mod component_store;
pub mod format_kind;
pub mod row_pair;

pub use component::{Component, Vulnerability};
pub use component_store::ComponentStore;
pub use format_kind::FormatKind;
pub use row_pair::{DiffSummary, RowPair};
