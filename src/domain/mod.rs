//! Domain types shared by the search layer and its consumers.

pub mod contact;
pub mod criteria;
pub mod results;
