mod dto;
mod parser;
mod types;

pub use dto::RawMessage;
pub use parser::SmsBackupParser;
pub use types::SmsDate;

pub mod prelude {
    pub use super::{RawMessage, SmsBackupParser, SmsDate};
}
