//! Convenient imports for typical `smartquery` usage.
//!
//! ```
//! use smartquery::prelude::*;
//! ```

pub use crate::{
    Direction, Joiner, Operand, Operator, QueryBuilder, QueryResult, ReasonCode, ValidationError,
};
