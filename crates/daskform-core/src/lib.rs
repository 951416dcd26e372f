pub mod derive;
pub mod error;
pub mod form;
pub mod policy;
pub mod store;

pub mod prelude {
    pub use crate::derive::{derive, finalize};
    pub use crate::error::CoreError;
    pub use crate::form::{DialogOutcome, FormState};
    pub use crate::policy::FormPolicy;
    pub use crate::store::{ConfigStore, MemoryStore};
}
