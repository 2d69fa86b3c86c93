// ==========================================
// 集装箱船队管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、装卸与准入规则
// 红线: 不含 I/O 逻辑, 不含展示逻辑
// ==========================================

pub mod container;
pub mod error;
pub mod hazard;
pub mod serial;
pub mod types;
pub mod vessel;

// 重导出核心类型
pub use container::{Container, ContainerKind, ContainerSpec};
pub use error::{ContainerError, ContainerResult, FleetError, FleetResult};
pub use hazard::{
    HazardNotifier, LogHazardNotifier, NoOpHazardNotifier, OptionalHazardNotifier,
    RecordingHazardNotifier,
};
pub use serial::SerialAllocator;
pub use types::{ContainerTypeTag, ProductType};
pub use vessel::{new_handle, ContainerHandle, Vessel};
