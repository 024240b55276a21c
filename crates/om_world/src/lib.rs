pub mod definition;
pub mod naming;
pub mod session;

pub use definition::MapDefinition;
pub use naming::{scatter_names, NamePools, PlaceName, NAME_PROBABILITY};
pub use session::{MapSession, SessionError};
