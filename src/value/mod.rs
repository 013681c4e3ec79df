//! In-memory representation of read S-exps.

#[macro_use]
mod macros;

pub mod cons;
pub mod cons_list;
pub mod symbol;
pub mod value;


pub use cons::Cons;
pub use cons_list::ConsList;
pub use symbol::Symbol;
pub use value::{HeapValue, Value, ValueIter};
