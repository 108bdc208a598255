//! UI Components

mod sortable_list;

pub use sortable_list::SortableList;
