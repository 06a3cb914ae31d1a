//! ## 基础数据结构
pub mod linkedlist;
