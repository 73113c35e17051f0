pub mod contribution;
pub mod dates;
pub mod papers;
pub mod session;
pub mod utilities;

pub use contribution::*;
pub use dates::*;
pub use papers::*;
pub use session::*;
