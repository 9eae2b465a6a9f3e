pub mod assessment;
pub mod confidence;
pub mod error;
pub mod level;
pub mod scoring;


pub use assessment::*;
pub use confidence::*;
pub use error::*;
pub use level::*;
pub use scoring::*;
