//! Domain types shared across the storefront

mod course;
mod identity;
mod ids;
mod payment;
mod student;

pub use course::Course;
pub use identity::{AuthIdentity, Role};
pub use ids::{CourseId, PaymentId, StudentId, UserId};
pub use payment::Payment;
pub use student::{StudentProfile, StudentSummary};
