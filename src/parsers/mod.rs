pub mod smsbackup;
pub mod traits;

pub mod prelude {
    pub use super::smsbackup::prelude::*;
    pub use super::traits::Parser;
}
