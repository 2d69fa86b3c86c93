// ==========================================
// 集装箱船队管理系统 - 集装箱实体
// ==========================================
// 职责: 集装箱基础契约与三种变体 (液体/气体/冷藏) 的装卸规则
// 红线: 装载校验失败时货物质量保持不变
// 红线: 变体规则只收紧不放松 (液体阈值 <= 绝对容量)
// ==========================================

use crate::domain::error::{ContainerError, ContainerResult};
use crate::domain::hazard::{HazardNotifier, LogHazardNotifier, OptionalHazardNotifier};
use crate::domain::serial::SerialAllocator;
use crate::domain::types::{ContainerTypeTag, ProductType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ==========================================
// ContainerSpec - 物理规格
// ==========================================

/// 构造时一次性固定的物理规格
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub tare_kg: f64,     // 自重 (kg)
    pub height_cm: f64,   // 高度 (cm)
    pub depth_cm: f64,    // 深度 (cm)
    pub capacity_kg: f64, // 最大载货量 (kg)
}

// ==========================================
// ContainerKind - 变体数据
// ==========================================

/// 集装箱变体 (封闭集合, 按类型分派装卸规则)
#[derive(Debug, Clone)]
pub enum ContainerKind {
    /// 液体集装箱: 危险品 50% / 普通 90% 安全阈值
    Liquid {
        dangerous: bool,
        notifier: OptionalHazardNotifier,
    },
    /// 气体集装箱: 卸载保留 5% 货物; 压力仅登记不校验
    Gas {
        pressure_atm: f64,
        notifier: OptionalHazardNotifier,
    },
    /// 冷藏集装箱: 货品与温度构造时固定, 温度已在构造期校验
    Refrigerated {
        product: ProductType,
        temperature_c: f64,
    },
}

impl ContainerKind {
    /// 变体对应的类型标签
    pub fn type_tag(&self) -> ContainerTypeTag {
        match self {
            ContainerKind::Liquid { .. } => ContainerTypeTag::Liquid,
            ContainerKind::Gas { .. } => ContainerTypeTag::Gas,
            ContainerKind::Refrigerated { .. } => ContainerTypeTag::Refrigerated,
        }
    }
}

// ==========================================
// Container - 集装箱实体
// ==========================================

/// 集装箱实体
///
/// 物理规格与序列号构造后不变; 货物质量只通过 load/unload 变化
/// 从船上移除不销毁实体 (转运期间仍是有效的独立对象)
#[derive(Debug, Clone)]
pub struct Container {
    serial: String,
    cargo_mass_kg: f64,
    tare_kg: f64,
    height_cm: f64,
    depth_cm: f64,
    capacity_kg: f64,
    kind: ContainerKind,
}

impl Container {
    // ==========================================
    // 构造函数
    // ==========================================

    /// 创建液体集装箱 (默认接线: 日志通报者)
    pub fn new_liquid(allocator: &mut SerialAllocator, spec: ContainerSpec, dangerous: bool) -> Self {
        Self::new_liquid_with_notifier(allocator, spec, dangerous, Arc::new(LogHazardNotifier))
    }

    /// 创建液体集装箱, 注入自定义通报者
    pub fn new_liquid_with_notifier(
        allocator: &mut SerialAllocator,
        spec: ContainerSpec,
        dangerous: bool,
        notifier: Arc<dyn HazardNotifier>,
    ) -> Self {
        Self::from_parts(
            allocator.allocate(ContainerTypeTag::Liquid),
            spec,
            ContainerKind::Liquid {
                dangerous,
                notifier: OptionalHazardNotifier::with_notifier(notifier),
            },
        )
    }

    /// 创建气体集装箱 (默认接线: 日志通报者)
    ///
    /// 压力只登记不校验范围; 通报能力保留但当前没有触发它的操作
    pub fn new_gas(allocator: &mut SerialAllocator, spec: ContainerSpec, pressure_atm: f64) -> Self {
        Self::new_gas_with_notifier(allocator, spec, pressure_atm, Arc::new(LogHazardNotifier))
    }

    /// 创建气体集装箱, 注入自定义通报者
    pub fn new_gas_with_notifier(
        allocator: &mut SerialAllocator,
        spec: ContainerSpec,
        pressure_atm: f64,
        notifier: Arc<dyn HazardNotifier>,
    ) -> Self {
        Self::from_parts(
            allocator.allocate(ContainerTypeTag::Gas),
            spec,
            ContainerKind::Gas {
                pressure_atm,
                notifier: OptionalHazardNotifier::with_notifier(notifier),
            },
        )
    }

    /// 创建冷藏集装箱
    ///
    /// 温度必须 >= 货品最低储藏温度 (边界含等于), 否则返回
    /// ContainerError::Configuration 且实体不被创建
    ///
    /// 温度校验先于序列号分配: 构造失败不消耗计数器
    pub fn new_refrigerated(
        allocator: &mut SerialAllocator,
        spec: ContainerSpec,
        product: ProductType,
        temperature_c: f64,
    ) -> ContainerResult<Self> {
        let required_min_c = product.min_temperature_c();
        if temperature_c < required_min_c {
            return Err(ContainerError::Configuration {
                product,
                temperature_c,
                required_min_c,
            });
        }

        Ok(Self::from_parts(
            allocator.allocate(ContainerTypeTag::Refrigerated),
            spec,
            ContainerKind::Refrigerated {
                product,
                temperature_c,
            },
        ))
    }

    fn from_parts(serial: String, spec: ContainerSpec, kind: ContainerKind) -> Self {
        Self {
            serial,
            cargo_mass_kg: 0.0,
            tare_kg: spec.tare_kg,
            height_cm: spec.height_cm,
            depth_cm: spec.depth_cm,
            capacity_kg: spec.capacity_kg,
            kind,
        }
    }

    // ==========================================
    // 装卸操作
    // ==========================================

    /// 装载货物
    ///
    /// 液体集装箱: 先检查安全阈值 (危险品 50% / 普通 90%);
    /// 越过阈值时先发出危险操作通报, 再返回 DangerousOperation;
    /// 阈值内再走基础绝对容量校验 (阈值 <= 容量, 必然通过)
    ///
    /// 气体/冷藏集装箱: 只做基础绝对容量校验
    ///
    /// # 参数
    /// - `mass_kg`: 装载质量 (期望 > 0; 负值不拦截, 会静默减少货物)
    ///
    /// # 返回
    /// - Ok(()): 货物质量已更新
    /// - Err: 校验失败, 货物质量不变
    pub fn load(&mut self, mass_kg: f64) -> ContainerResult<()> {
        if let ContainerKind::Liquid {
            dangerous,
            notifier,
        } = &self.kind
        {
            let threshold_pct = if *dangerous { 50.0 } else { 90.0 };
            let max_allowed_kg = self.capacity_kg * threshold_pct / 100.0;

            if self.cargo_mass_kg + mass_kg > max_allowed_kg {
                notifier.notify(
                    &self.serial,
                    &format!(
                        "尝试装载 {}kg 违反 {}% 阈值 (允许上限 {}kg)",
                        mass_kg, threshold_pct, max_allowed_kg
                    ),
                );
                return Err(ContainerError::DangerousOperation {
                    serial: self.serial.clone(),
                    attempted_kg: mass_kg,
                    threshold_pct,
                    max_allowed_kg,
                });
            }
        }

        self.load_base(mass_kg)
    }

    /// 基础装载规则: 绝对容量校验
    fn load_base(&mut self, mass_kg: f64) -> ContainerResult<()> {
        let candidate_kg = self.cargo_mass_kg + mass_kg;
        if candidate_kg > self.capacity_kg {
            return Err(ContainerError::Overfill {
                serial: self.serial.clone(),
                attempted_kg: mass_kg,
                capacity_kg: self.capacity_kg,
            });
        }

        self.cargo_mass_kg = candidate_kg;
        Ok(())
    }

    /// 卸载货物
    ///
    /// 基础规则: 清空; 气体集装箱保留卸载前质量的 5%
    pub fn unload(&mut self) {
        match self.kind {
            ContainerKind::Gas { .. } => {
                self.cargo_mass_kg *= 0.05;
            }
            _ => {
                self.cargo_mass_kg = 0.0;
            }
        }
    }

    // ==========================================
    // 只读查询
    // ==========================================

    /// 总重量 = 自重 + 货物质量 (kg)
    pub fn total_weight_kg(&self) -> f64 {
        self.tare_kg + self.cargo_mass_kg
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    pub fn cargo_mass_kg(&self) -> f64 {
        self.cargo_mass_kg
    }

    pub fn tare_kg(&self) -> f64 {
        self.tare_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn depth_cm(&self) -> f64 {
        self.depth_cm
    }

    pub fn capacity_kg(&self) -> f64 {
        self.capacity_kg
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn type_tag(&self) -> ContainerTypeTag {
        self.kind.type_tag()
    }
}
