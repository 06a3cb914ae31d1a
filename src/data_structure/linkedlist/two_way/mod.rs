//! ## 双向链表
//!
//! #### 算法说明
//! - 具备双向索引能力的链表，两端的插入与删除均为O(1)；
//! - 节点统一存放于连续的存储区(arena)中，前驱与后继均以定长句柄(数组下标)互相引用，
//! 被删除的槽位回收入空闲栈以待复用，无需手动管理内存；
//! - 额外支持有序插入与按值删除，两者均为单趟遍历，O(n)。
//!
//! #### 应用场景
//! - 算法演示；
//! - 实际应用中通常会选用顺序存储结构，如 Vec 等。
//!
//! #### 实现属性
//! - <font color=Red>×</font> 多线程安全
//! - <font color=Green>√</font> 无 unsafe 代码
//!
//! #### Example
//!```
//!    use dll_algo::two_way::TwoWayLinkedList;
//!
//!    fn main() {
//!        let mut list = TwoWayLinkedList::new();
//!
//!        list.insert_back(10);
//!        list.insert_back(20);
//!        list.insert_back(30);
//!        list.insert_front(5);
//!        list.insert_sorted(15);
//!
//!        assert_eq!("5 10 15 20 30", list.stringify());
//!        assert_eq!(5, list.len());
//!
//!        assert_eq!(Some(5), list.pop_front());
//!        assert_eq!(Some(30), list.pop_back());
//!        assert_eq!("10 15 20", list.stringify());
//!
//!        assert_eq!(1, list.remove_by_value(15));
//!        list.clear();
//!        assert!(list.is_empty());
//!    }
//!```


type SizType = u64;
type Value = i64;
type Idx = usize;

/// 链结构。
//- @len: 节点总数，随插入、删除即时更新
//- @head: 首节点句柄
//- @tail: 尾节点句柄
//- @arena: 节点存储区，句柄即此处的下标
//- @idle: 已回收待复用的空闲槽位
pub struct TwoWayLinkedList {
    len: SizType,
    head: Option<Idx>,
    tail: Option<Idx>,
    arena: Vec<Option<Node>>,
    idle: Vec<Idx>,
}

/// 节点结构。
//- @data: 节点承载的值
//- @prev: 前驱节点句柄，首节点为None
//- @back: 后继节点句柄，尾节点为None
#[derive(Clone)]
struct Node {
    data: Value,
    prev: Option<Idx>,
    back: Option<Idx>,
}

impl TwoWayLinkedList {
    ///#### 初始化一个新链表
    #[inline(always)]
    pub fn new() -> TwoWayLinkedList {
        TwoWayLinkedList {
            len: 0,
            head: None,
            tail: None,
            arena: vec![],
            idle: vec![],
        }
    }

    ///#### 销毁
    pub fn destroy(self) {}

    ///#### 获取链表中所有节点的个数
    #[inline(always)]
    pub fn len(&self) -> SizType {
        self.len
    }

    ///#### 通过自前向后的遍历统计节点个数，用于一致性校验
    pub fn len_realtime(&self) -> SizType {
        let mut cnt = 0;
        let mut cur = self.head;
        while let Some(i) = cur {
            cnt += 1;
            cur = self.node(i).back;
        }
        cnt
    }

    ///#### 链表是否为空
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        0 == self.len
    }

    ///- #: 首节点的值
    #[inline(always)]
    pub fn front(&self) -> Option<Value> {
        self.head.map(|i| self.node(i).data)
    }

    ///- #: 尾节点的值
    #[inline(always)]
    pub fn back(&self) -> Option<Value> {
        self.tail.map(|i| self.node(i).data)
    }

    ///#### 前向追加节点
    pub fn insert_front(&mut self, data: Value) {
        let new = self.alloc(Node {
            data,
            prev: None,
            back: self.head,
        });

        if 0 == self.len {
            self.tail = Some(new);
        } else {
            let head = self.head.unwrap();
            self.node_mut(head).prev = Some(new);
        }

        self.head = Some(new);
        self.len += 1;
    }

    ///#### 后向追加节点
    pub fn insert_back(&mut self, data: Value) {
        let new = self.alloc(Node {
            data,
            prev: self.tail,
            back: None,
        });

        if 0 == self.len {
            self.head = Some(new);
        } else {
            let tail = self.tail.unwrap();
            self.node_mut(tail).back = Some(new);
        }

        self.tail = Some(new);
        self.len += 1;
    }

    ///#### 有序插入
    ///- 前提：调用前链表已按升序排列，插入后仍保持升序
    ///- 新值不大于首节点值时置于最前，不小于尾节点值时置于最后，
    ///否则自前向后扫描，插于首个大于新值的节点之前
    pub fn insert_sorted(&mut self, data: Value) {
        if 0 == self.len || data <= self.node(self.head.unwrap()).data {
            self.insert_front(data);
            return;
        }

        if data >= self.node(self.tail.unwrap()).data {
            self.insert_back(data);
            return;
        }

        //此分支下data严格介于首尾值之间，扫描必然停在中间节点上
        let mut cur = self.head.unwrap();
        while self.node(cur).data <= data {
            cur = self.node(cur).back.unwrap();
        }

        let prev = self.node(cur).prev.unwrap();
        let new = self.alloc(Node {
            data,
            prev: Some(prev),
            back: Some(cur),
        });

        self.node_mut(prev).back = Some(new);
        self.node_mut(cur).prev = Some(new);
        self.len += 1;
    }

    ///#### 弹出最前面的节点
    ///- #: 空链表返回None
    pub fn pop_front(&mut self) -> Option<Value> {
        let head = self.head?;

        if 1 == self.len {
            self.head = None;
            self.tail = None;
        } else {
            let next = self.node(head).back.unwrap();
            self.node_mut(next).prev = None;
            self.head = Some(next);
        }

        self.len -= 1;
        Some(self.release(head))
    }

    ///#### 弹出最后面的节点
    ///- #: 空链表返回None
    pub fn pop_back(&mut self) -> Option<Value> {
        let tail = self.tail?;

        if 1 == self.len {
            self.head = None;
            self.tail = None;
        } else {
            let prev = self.node(tail).prev.unwrap();
            self.node_mut(prev).back = None;
            self.tail = Some(prev);
        }

        self.len -= 1;
        Some(self.release(tail))
    }

    ///#### 删除所有值等于data的节点，保持其余节点的相对顺序不变
    ///- #: 被删除的节点个数，无匹配时为0
    pub fn remove_by_value(&mut self, data: Value) -> SizType {
        let mut cnt = 0;
        let mut cur = self.head;

        while let Some(i) = cur {
            cur = self.node(i).back;
            if data == self.node(i).data {
                self.unlink(i);
                cnt += 1;
            }
        }

        cnt
    }

    ///#### 清空链表，重置为初始状态；对空链表调用是安全的
    pub fn clear(&mut self) {
        self.arena.clear();
        self.idle.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    ///#### 自前向后序列化，值之间以单个空格分隔
    pub fn stringify(&self) -> String {
        let mut res = vec![];

        let mut cur = self.head;
        while let Some(i) = cur {
            let node = self.node(i);
            res.push(node.data.to_string());
            cur = node.back;
        }

        res.join(" ")
    }

    ///#### 自后向前序列化，值之间以单个空格分隔
    pub fn stringify_reverse(&self) -> String {
        let mut res = vec![];

        let mut cur = self.tail;
        while let Some(i) = cur {
            let node = self.node(i);
            res.push(node.data.to_string());
            cur = node.prev;
        }

        res.join(" ")
    }

    ///#### 自前向后打印所有节点的值，末尾换行
    pub fn print(&self) {
        println!("{}", self.stringify());
    }

    ///#### 自后向前打印所有节点的值，末尾换行
    pub fn print_reverse(&self) {
        println!("{}", self.stringify_reverse());
    }
}

impl TwoWayLinkedList {
    //#### 分配槽位，优先复用空闲句柄
    fn alloc(&mut self, node: Node) -> Idx {
        if let Some(idx) = self.idle.pop() {
            self.arena[idx] = Some(node);
            idx
        } else {
            self.arena.push(Some(node));
            self.arena.len() - 1
        }
    }

    //#### 回收槽位，句柄放入空闲栈以待复用
    fn release(&mut self, idx: Idx) -> Value {
        let node = self.arena[idx].take().unwrap();
        self.idle.push(idx);
        node.data
    }

    //#### 摘除任意位置的节点，首尾节点分别复用pop_front/pop_back的逻辑，
    //以保证head/tail句柄的一致性
    fn unlink(&mut self, idx: Idx) {
        if Some(idx) == self.head {
            self.pop_front();
        } else if Some(idx) == self.tail {
            self.pop_back();
        } else {
            let prev = self.node(idx).prev;
            let back = self.node(idx).back;
            self.node_mut(prev.unwrap()).back = back;
            self.node_mut(back.unwrap()).prev = prev;
            self.len -= 1;
            self.release(idx);
        }
    }

    #[inline(always)]
    fn node(&self, idx: Idx) -> &Node {
        self.arena[idx].as_ref().unwrap()
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: Idx) -> &mut Node {
        self.arena[idx].as_mut().unwrap()
    }
}
