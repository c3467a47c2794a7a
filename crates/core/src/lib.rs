#![forbid(unsafe_code)]

pub mod model;
pub mod parser;
pub mod session;
pub mod time;

pub use parser::parse_question;
pub use session::{SessionPhase, SessionStateError, StudySession};
pub use time::Clock;
