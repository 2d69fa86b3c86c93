// ==========================================
// 集装箱船队管理系统 - 序列号分配器
// ==========================================
// 职责: 按集装箱类型独立编号, 生成人类可读序列号
// 说明: 显式持有的分配器对象, 不使用全局可变状态
// 注意: 编号只保证同类型内唯一 (L-1 与 G-1 可并存)
// ==========================================

use crate::domain::types::ContainerTypeTag;
use std::collections::HashMap;

// ==========================================
// SerialAllocator - 序列号分配器
// ==========================================

/// 按类型独立的单调计数器
///
/// 计数器从 0 起, 每次分配先自增再取值, 生成 `"<前缀>-<计数>"`
/// (首个液体集装箱为 "L-1"), 在分配器生命周期内不重置
#[derive(Debug, Default)]
pub struct SerialAllocator {
    counters: HashMap<ContainerTypeTag, u64>,
}

impl SerialAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配一个序列号
    ///
    /// # 参数
    /// - `tag`: 集装箱类型标签
    ///
    /// # 返回
    /// 形如 "L-3" 的序列号字符串
    pub fn allocate(&mut self, tag: ContainerTypeTag) -> String {
        let counter = self.counters.entry(tag).or_insert(0);
        *counter += 1;
        format!("{}-{}", tag.prefix(), counter)
    }

    /// 某类型已分配的数量 (用于诊断)
    pub fn allocated_count(&self, tag: ContainerTypeTag) -> u64 {
        self.counters.get(&tag).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_per_type() {
        let mut allocator = SerialAllocator::new();

        // 不同类型独立编号: 液体与气体都可以是 "-1"
        assert_eq!(allocator.allocate(ContainerTypeTag::Liquid), "L-1");
        assert_eq!(allocator.allocate(ContainerTypeTag::Gas), "G-1");
        assert_eq!(allocator.allocate(ContainerTypeTag::Refrigerated), "C-1");
        assert_eq!(allocator.allocate(ContainerTypeTag::Liquid), "L-2");
    }

    #[test]
    fn test_counter_is_monotonic() {
        let mut allocator = SerialAllocator::new();
        for i in 1..=5 {
            assert_eq!(
                allocator.allocate(ContainerTypeTag::Gas),
                format!("G-{}", i)
            );
        }
        assert_eq!(allocator.allocated_count(ContainerTypeTag::Gas), 5);
        assert_eq!(allocator.allocated_count(ContainerTypeTag::Liquid), 0);
    }
}
