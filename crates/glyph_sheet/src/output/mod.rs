pub mod binary;
pub mod naming;
pub mod snapshot;
