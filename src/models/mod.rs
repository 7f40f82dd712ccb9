pub mod keyword;
pub mod analysis;
pub mod advice;

pub use keyword::*;
pub use analysis::*;
pub use advice::*;
