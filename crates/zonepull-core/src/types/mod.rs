mod credentials;
mod de;
mod domain;
mod record;

pub use credentials::*;
pub use domain::*;
pub use record::*;
