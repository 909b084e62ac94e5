pub mod export;
pub mod graphs;
pub mod search;
pub mod utility;
