pub mod aggregate;
pub mod inspector;
pub mod report;
pub mod selector;
pub mod session;
pub mod status;

pub use crate::domain::model::{
    AggregationResult, Board, Candidate, Credential, Epic, StatusKey, Tally, Ticket,
};
pub use crate::domain::ports::{ConfigProvider, Prompt, Transport};
pub use crate::utils::error::Result;
