//! Use cases composing the domain with infrastructure ports.

pub mod generation;
