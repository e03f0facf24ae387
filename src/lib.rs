pub mod color;
pub mod dispatch;
pub mod error;
pub mod invocation;
pub mod language;
pub mod runner;
pub mod tokenize;

pub use dispatch::{dispatch, Plan};
pub use error::LaunchError;
pub use language::Language;
