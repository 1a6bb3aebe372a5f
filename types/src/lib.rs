mod de;
pub mod dashboard;
mod error;
pub mod format;
mod load;
pub mod profile;
pub mod records;
pub mod view;

pub use dashboard::DashboardState;
pub use error::{Error, Result};
pub use load::{LoadSlot, LoadTicket};
pub use profile::{Profile, Role, Viewer};
pub use view::{MentorView, ParentView, StudentView};
