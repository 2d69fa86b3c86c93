// ==========================================
// 集装箱船队管理系统 - 船队操作层
// ==========================================
// 职责: 跨船操作与只读报告投影
// 说明: 组合领域层原语, 不定义新的领域规则
// ==========================================

pub mod report;
pub mod transfer;

// 重导出核心操作与投影
pub use report::{ContainerSummary, VesselSummary};
pub use transfer::transfer;
