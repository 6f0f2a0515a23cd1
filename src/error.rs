use crate::Id;
use core::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The identifier is outside `0..capacity`.
    OutOfRange { id: Id, capacity: u32 },
    /// `insert` was called for an identifier that already has an entry.
    AlreadyPresent(Id),
    /// The operation requires an entry for this identifier, and there is none.
    NotPresent(Id),
    /// Re-construction would drop an entry whose identifier does not fit the new capacity.
    CapacityTooSmall { capacity: u32, required: u32 },
    /// A graph edge has an endpoint that is not a vertex of the graph.
    VertexOutOfRange { vert: u32, num_verts: u32 },
    /// Shortest-path search found an edge with a negative (or NaN) weight.
    NegativeWeight { from: u32, to: u32 },
}

impl Error {
    /// Returns true for errors caused by an identifier outside the fixed domain, as opposed to
    /// errors caused by the current contents of the queue.
    pub fn is_domain_error(&self) -> bool {
        match self {
            Error::OutOfRange { .. } | Error::VertexOutOfRange { .. } => true,
            _ => false,
        }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutOfRange { id, capacity } => {
                write!(fmt, "id {} is out of range (capacity {})", id, capacity)
            }
            Error::AlreadyPresent(id) => write!(fmt, "id {} is already present", id),
            Error::NotPresent(id) => write!(fmt, "id {} is not present", id),
            Error::CapacityTooSmall { capacity, required } => write!(
                fmt,
                "capacity {} is too small; at least {} is required",
                capacity, required
            ),
            Error::VertexOutOfRange { vert, num_verts } => {
                write!(fmt, "vertex {} is out of range ({} verts)", vert, num_verts)
            }
            Error::NegativeWeight { from, to } => {
                write!(fmt, "edge v{} --> v{} has a negative weight", from, to)
            }
        }
    }
}

impl std::error::Error for Error {}
