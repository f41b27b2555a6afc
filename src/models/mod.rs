pub mod activity;
pub mod responses;

pub use activity::{Activity, ActivityCatalog};
pub use responses::{DetailBody, MessageBody};
