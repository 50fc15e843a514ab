pub mod attendee;
pub mod festival;
pub mod user;

pub use attendee::*;
pub use festival::*;
pub use user::*;
