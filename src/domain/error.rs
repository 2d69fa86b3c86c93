// ==========================================
// 集装箱船队管理系统 - 领域错误类型
// ==========================================
// 工具: thiserror 派生宏
// 职责: 集装箱级与船舶级校验失败的错误分类
// 红线: 校验失败即报错, 不做本地恢复与重试
// ==========================================

use crate::domain::types::ProductType;
use thiserror::Error;

// ==========================================
// 集装箱级错误 (Container Error)
// ==========================================

/// 集装箱装卸与构造错误
///
/// 所有错误信息必须包含显式数值 (可解释性)
#[derive(Error, Debug)]
pub enum ContainerError {
    // ===== 绝对容量违反 =====
    /// 装载后超过集装箱绝对容量上限
    #[error("装载超限: serial={serial}, attempted={attempted_kg}kg, capacity={capacity_kg}kg")]
    Overfill {
        serial: String,
        attempted_kg: f64,
        capacity_kg: f64,
    },

    // ===== 危险品安全阈值违反 =====
    /// 液体集装箱安全阈值违反 (危险品 50% / 普通 90%)
    ///
    /// 触发前必定已发出危险操作通报 (HazardNotifier)
    #[error("危险操作: serial={serial}, attempted={attempted_kg}kg 超过 {threshold_pct}% 阈值 (max_allowed={max_allowed_kg}kg)")]
    DangerousOperation {
        serial: String,
        attempted_kg: f64,
        threshold_pct: f64,
        max_allowed_kg: f64,
    },

    // ===== 构造期静态约束违反 =====
    /// 冷藏集装箱温度低于货品最低储藏温度
    ///
    /// 仅在构造时校验; 校验失败的实体不会被创建
    #[error("配置错误: 温度 {temperature_c}°C 低于货品 {product} 要求的最低温度 {required_min_c}°C")]
    Configuration {
        product: ProductType,
        temperature_c: f64,
        required_min_c: f64,
    },
}

// ==========================================
// 船舶级错误 (Fleet Error)
// ==========================================

/// 船舶准入与船队操作错误
#[derive(Error, Debug)]
pub enum FleetError {
    // ===== 运力约束违反 =====
    #[error("集装箱数量超限: vessel={vessel}, max_count={max_count}")]
    ContainerCountExceeded { vessel: String, max_count: usize },

    #[error("总重量超限: vessel={vessel}, projected={projected_t:.2}t, max={max_weight_t}t")]
    WeightLimitExceeded {
        vessel: String,
        projected_t: f64,
        max_weight_t: f64,
    },

    // ===== 成员关系错误 =====
    #[error("集装箱不在船上: serial={serial}, vessel={vessel}")]
    ContainerNotFound { serial: String, vessel: String },

    // ===== 并发访问错误 =====
    #[error("锁获取失败: {0}")]
    Lock(String),

    // ===== 集装箱级错误透传 =====
    #[error(transparent)]
    Container(#[from] ContainerError),
}

impl FleetError {
    /// 是否属于运力约束违反 (数量或重量超限)
    pub fn is_capacity_violation(&self) -> bool {
        matches!(
            self,
            FleetError::ContainerCountExceeded { .. } | FleetError::WeightLimitExceeded { .. }
        )
    }
}

/// Result 类型别名
pub type ContainerResult<T> = Result<T, ContainerError>;
pub type FleetResult<T> = Result<T, FleetError>;
