// ==========================================
// 集装箱船队管理系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 集装箱/船舶领域模型, 装载规则与运力核算
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与规则
pub mod domain;

// 船队层 - 跨船操作与报告
pub mod fleet;

// 配置层 - 船队配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ContainerTypeTag, ProductType};

// 领域实体
pub use domain::{
    new_handle, Container, ContainerHandle, ContainerKind, ContainerSpec, SerialAllocator, Vessel,
};

// 错误类型
pub use domain::{ContainerError, ContainerResult, FleetError, FleetResult};

// 危险操作通报
pub use domain::{
    HazardNotifier, LogHazardNotifier, NoOpHazardNotifier, OptionalHazardNotifier,
    RecordingHazardNotifier,
};

// 船队操作与投影
pub use fleet::{transfer, ContainerSummary, VesselSummary};

// 配置
pub use config::{ConfigError, ContainerConfig, FleetConfig, VesselConfig};

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
