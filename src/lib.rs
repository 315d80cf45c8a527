//! Binary search and sorted insertion over ordered, randomly indexable
//! sequences.
//!
//! The searches are generic over a [`predicate::Predicates`] triple
//! (`equals`, `greater_than`, `less_than`) describing each element relative to
//! a target. [`ext`] derives that triple from `Ord` for the common case.
//!
//! Every operation assumes the sequence is already sorted consistently with
//! its predicates. Nothing checks this; violating it gives an unspecified
//! index, never a panic or undefined behaviour.

pub mod binary_search;
pub mod check;
pub mod cli;
pub mod experiment;
pub mod ext;
pub mod math;
pub mod predicate;
pub mod sequence;
pub mod sorted_insert;
