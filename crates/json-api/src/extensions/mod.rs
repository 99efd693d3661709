//! Handler extension traits and request field parsing.

mod depot;
mod result;
mod timestamps;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use timestamps::{PointInTimeExt as _, parse_optional_timestamp, parse_timestamp};
