//! ## 链表
//! - 双向链表
pub mod two_way;
