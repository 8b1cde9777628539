//! Combining and transforming sequences element by element
//!
//! Every operator in this module forwards elements as they arrive; none of
//! them buffers the source. Each one records the flow returned by its
//! downstream consumer and hands it back from `drive`, so a stop anywhere
//! below unwinds through every layer above.

mod chain;
mod distinct;
mod filter;
mod limit;
mod map;
mod zip;

// Re-export composition operations
pub use chain::{chain, concat, Chain, Concat};
pub use distinct::{distinct_by, Distinct};
pub use filter::{filter, reject, Filter};
pub use limit::{drop_while, skip, take, take_while, DropWhile, Skip, Take, TakeWhile};
pub use map::{
    enumerate, flat_map, flatten, map, map_indexed, peek, Enumerate, FlatMap, Flatten, Map,
    MapIndexed, Peek,
};
pub use zip::{zip, Zip};
