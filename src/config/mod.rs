// ==========================================
// 集装箱船队管理系统 - 配置层
// ==========================================
// 职责: 船队配置的加载、校验与实体物化
// 存储: JSON 文件
// ==========================================

pub mod fleet_config;

// 重导出核心配置类型
pub use fleet_config::{ConfigError, ContainerConfig, FleetConfig, VesselConfig};
