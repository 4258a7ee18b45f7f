pub mod category_chart;
pub mod entry_form;
pub mod entry_list;
pub mod header;
pub mod summary_panel;

pub use category_chart::CategoryChart;
pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use header::Header;
pub use summary_panel::SummaryPanel;
