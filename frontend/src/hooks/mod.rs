pub mod use_entries;
pub mod use_entry_form;

pub use use_entries::use_entries;
pub use use_entry_form::use_entry_form;
