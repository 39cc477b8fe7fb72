//! Schedule expansion: pattern evaluation, filtering and naming.
//!
//! Each stage is a pure function of its inputs; `generate_schedule` chains them.

mod evaluator;
mod generate;
mod naming;
mod pipeline;

pub use evaluator::generate;
pub use generate::generate_schedule;
pub use naming::name_all;
pub use pipeline::apply;
