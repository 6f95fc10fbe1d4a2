//! `lexi_core`：词典存储的纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI/小游戏都通过同一个 `Dictionary` 接口访问
//! - **分层清晰**：alphabet（字符 -> 下标） -> trie（节点树） -> model（词条）
//! - **无全局状态**：词典实例由调用方持有并传递，不存在进程级单例
pub mod alphabet;
pub mod dictionary;
pub mod error;
pub mod model;
pub mod trie;
