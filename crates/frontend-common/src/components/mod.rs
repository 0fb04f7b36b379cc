mod data_table;
mod error_message;
mod search_input;
mod spinner;

pub use data_table::DataTable;
pub use error_message::ErrorMessage;
pub use search_input::SearchInput;
pub use spinner::LoadingSpinner;
