// ==========================================
// 集装箱船队管理系统 - 船舶报告投影
// ==========================================
// 职责: 船舶与集装箱状态的只读投影, 供外部协作方展示
// 红线: 纯读取, 不改变任何状态
// ==========================================

use crate::domain::error::FleetResult;
use crate::domain::types::ContainerTypeTag;
use crate::domain::vessel::{lock_container, Vessel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// ContainerSummary - 单箱投影
// ==========================================

/// 单个集装箱的报告行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub serial: String,
    pub container_type: ContainerTypeTag,
    pub cargo_mass_kg: f64,
    pub total_weight_kg: f64,
}

// ==========================================
// VesselSummary - 船舶投影
// ==========================================

/// 船舶状态快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselSummary {
    pub vessel_name: String,
    pub max_speed_knots: f64,
    pub max_container_count: usize,
    pub max_total_weight_t: f64,
    pub container_count: usize,
    pub total_weight_kg: f64,
    pub containers: Vec<ContainerSummary>,
    pub generated_at: DateTime<Utc>,
}

impl VesselSummary {
    /// 捕获船舶当前状态 (只读)
    pub fn capture(vessel: &Vessel) -> FleetResult<Self> {
        let mut containers = Vec::with_capacity(vessel.container_count());
        let mut total_weight_kg = 0.0;

        for handle in vessel.containers() {
            let container = lock_container(handle)?;
            total_weight_kg += container.total_weight_kg();
            containers.push(ContainerSummary {
                serial: container.serial().to_string(),
                container_type: container.type_tag(),
                cargo_mass_kg: container.cargo_mass_kg(),
                total_weight_kg: container.total_weight_kg(),
            });
        }

        Ok(Self {
            vessel_name: vessel.name().to_string(),
            max_speed_knots: vessel.max_speed_knots(),
            max_container_count: vessel.max_container_count(),
            max_total_weight_t: vessel.max_total_weight_t(),
            container_count: containers.len(),
            total_weight_kg,
            containers,
            generated_at: Utc::now(),
        })
    }
}

impl fmt::Display for VesselSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- 船舶: {} ---", self.vessel_name)?;
        writeln!(f, "最大速度 (节): {}", self.max_speed_knots)?;
        writeln!(
            f,
            "运力上限: {} 箱, {} 吨",
            self.max_container_count, self.max_total_weight_t
        )?;
        writeln!(
            f,
            "当前集装箱数: {}, 总重量: {} kg",
            self.container_count, self.total_weight_kg
        )?;
        writeln!(f, "集装箱清单:")?;
        for item in &self.containers {
            writeln!(
                f,
                "  - {} [{}], 货物质量: {} kg, 总重量: {} kg",
                item.serial, item.container_type, item.cargo_mass_kg, item.total_weight_kg
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::container::{Container, ContainerSpec};
    use crate::domain::serial::SerialAllocator;
    use crate::domain::vessel::new_handle;

    #[test]
    fn test_capture_is_pure_projection() {
        let mut allocator = SerialAllocator::new();
        let mut vessel = Vessel::new("Poseidon", 25.0, 5, 100.0);

        let gas = new_handle(Container::new_gas(
            &mut allocator,
            ContainerSpec {
                tare_kg: 800.0,
                height_cm: 200.0,
                depth_cm: 200.0,
                capacity_kg: 3000.0,
            },
            10.5,
        ));
        gas.lock().unwrap().load(2500.0).unwrap();
        vessel.load(gas.clone()).unwrap();

        let summary = VesselSummary::capture(&vessel).unwrap();
        assert_eq!(summary.vessel_name, "Poseidon");
        assert_eq!(summary.container_count, 1);
        assert_eq!(summary.total_weight_kg, 3300.0);
        assert_eq!(summary.containers[0].serial, "G-1");
        assert_eq!(summary.containers[0].cargo_mass_kg, 2500.0);

        // 捕获不改变船舶与集装箱状态
        assert_eq!(vessel.container_count(), 1);
        assert_eq!(gas.lock().unwrap().cargo_mass_kg(), 2500.0);

        // 报告可渲染且含关键字段
        let rendered = summary.to_string();
        assert!(rendered.contains("Poseidon"));
        assert!(rendered.contains("G-1"));
    }
}
