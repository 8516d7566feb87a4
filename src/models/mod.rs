//! Sequencing domain models.
//!
//! Provides the data types for single-machine sequencing problems and
//! their solutions.
//!
//! # Domain Mappings
//!
//! | u-sequencing | Manufacturing | Computing | Service |
//! |--------------|--------------|-----------|---------|
//! | Job | Order | Batch job | Customer |
//! | JobSet | Order backlog | Run queue | Waiting line |
//! | Schedule | Machine sequence | Execution order | Service order |
//! | Cost | Total flow time | Total turnaround | Total waiting + service |

mod job;
mod schedule;

pub use job::{JobSet, ProcessingTime};
pub use schedule::{Cost, Schedule};
