pub mod data_structure;

pub use data_structure::linkedlist::two_way;
