mod layout;
mod page;
mod status_changer;

pub use layout::Layout;
pub use page::{ListPage, fetched};
pub use status_changer::StatusChanger;
