//! Utility functions for the engine module.
//!
//! Sampling primitives shared by the mutation simulator. Every function takes its random
//! source from the caller so runs can be reproduced from a seed.

pub mod sampling;
