pub mod playground;
pub mod relay;
pub mod responder;
pub mod stages;

pub use crate::domain::model::{Acknowledgement, ContactSubmission, NotificationMessage};
pub use crate::domain::ports::NotificationSink;
pub use crate::utils::error::Result;
