//! Lodestone Runtime
//!
//! Executes memristor in-place logic ("MAGIC" gates) on a single row of a
//! partitioned crossbar array. Gates compute in place on boolean cells;
//! validated operations batch collision-free gates into one physical step;
//! the crossbar row owns the cell state and the step counter.
//!
//! Invert and Nor gates only compute correctly into output cells that were
//! driven to `true` by an InitOne operation in an earlier step. Sequencing
//! that initialization is the caller's responsibility; a missed
//! initialization silently yields `false`, not an error.

pub mod error;
pub mod gate;
pub mod operation;
pub mod row;

pub use error::{Error, Result};
pub use gate::{collides, Gate};
pub use operation::Operation;
pub use row::CrossbarRow;
