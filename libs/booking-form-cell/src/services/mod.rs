pub mod banner;
pub mod submission;
pub mod validation;

pub use banner::SuccessBanner;
pub use submission::{BookingSubmissionService, BUSY_LABEL};
pub use validation::FormValidationService;
