//! The road graph interface: a map-data provider contract, and the turn
//! discovery, vicinity and path reconstruction built over any provider.

pub mod definition;
pub mod impls;
pub mod route;
pub mod traits;
pub mod vicinity;

#[doc(inline)]
pub use definition::{CrossVisitor, RoadNetwork};
#[doc(inline)]
pub use impls::memory::MemoryNetwork;
#[doc(inline)]
pub use route::{Route, RouteSink};
#[doc(inline)]
pub use traits::{Reconstruct, Turns};
#[doc(inline)]
pub use vicinity::{Vicinity, VicinityState};
