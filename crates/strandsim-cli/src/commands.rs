pub mod augment;
pub mod interleave;
pub mod queries;
pub mod simplify;
pub mod simulate;
