//! Internal test modules - whitebox tests with crate access
//!
//! Tests here cut across module boundaries: property tests over the
//! history and reorder engines, and acceptance scenarios driving a
//! full editing session through the public facade.

mod acceptance_editing;
