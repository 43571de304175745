//! Review-API domain logic.
//!
//! Everything here is pure: response shape checks, the verdict table and
//! the status message built from a submission record. No I/O happens in
//! this module, so the poll loop can be exercised without a network.

mod response;
mod submission;
mod verdict;

pub use response::{check_response, StatusResponse};
pub use submission::{parse_status, Submission};
pub use verdict::Verdict;
