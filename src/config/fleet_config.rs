// ==========================================
// 集装箱船队管理系统 - 船队配置
// ==========================================
// 职责: 配置加载、校验、实体物化
// 存储: JSON 文件 (serde_json)
// ==========================================

use crate::domain::container::{Container, ContainerSpec};
use crate::domain::error::ContainerResult;
use crate::domain::serial::SerialAllocator;
use crate::domain::types::ProductType;
use crate::domain::vessel::Vessel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ==========================================
// 配置错误
// ==========================================

/// 配置加载与校验错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置校验失败: {0}")]
    Invalid(String),
}

// ==========================================
// VesselConfig - 船舶配置
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselConfig {
    pub name: String,
    pub max_speed_knots: f64,
    pub max_container_count: usize,
    pub max_total_weight_t: f64,
}

impl VesselConfig {
    /// 物化为船舶实体
    pub fn build(&self) -> Vessel {
        Vessel::new(
            self.name.clone(),
            self.max_speed_knots,
            self.max_container_count,
            self.max_total_weight_t,
        )
    }
}

// ==========================================
// ContainerConfig - 集装箱配置
// ==========================================

/// 集装箱配置 (按 container_type 标签区分变体)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "container_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerConfig {
    Liquid {
        #[serde(flatten)]
        spec: ContainerSpec,
        dangerous: bool,
    },
    Gas {
        #[serde(flatten)]
        spec: ContainerSpec,
        pressure_atm: f64,
    },
    Refrigerated {
        #[serde(flatten)]
        spec: ContainerSpec,
        product: ProductType,
        temperature_c: f64,
    },
}

impl ContainerConfig {
    fn spec(&self) -> &ContainerSpec {
        match self {
            ContainerConfig::Liquid { spec, .. } => spec,
            ContainerConfig::Gas { spec, .. } => spec,
            ContainerConfig::Refrigerated { spec, .. } => spec,
        }
    }

    /// 物化为集装箱实体 (默认日志通报者接线)
    ///
    /// 冷藏配置的温度校验在此处生效 (构造期校验)
    pub fn build(&self, allocator: &mut SerialAllocator) -> ContainerResult<Container> {
        match self {
            ContainerConfig::Liquid { spec, dangerous } => {
                Ok(Container::new_liquid(allocator, *spec, *dangerous))
            }
            ContainerConfig::Gas { spec, pressure_atm } => {
                Ok(Container::new_gas(allocator, *spec, *pressure_atm))
            }
            ContainerConfig::Refrigerated {
                spec,
                product,
                temperature_c,
            } => Container::new_refrigerated(allocator, *spec, *product, *temperature_c),
        }
    }
}

// ==========================================
// FleetConfig - 船队配置
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    pub vessels: Vec<VesselConfig>,
    pub containers: Vec<ContainerConfig>,
}

impl FleetConfig {
    /// 从 JSON 文件加载并校验
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: FleetConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 静态校验 (数值为正、名称非空)
    ///
    /// 冷藏温度约束不在这里重复: 它属于领域构造期校验
    pub fn validate(&self) -> Result<(), ConfigError> {
        for vessel in &self.vessels {
            if vessel.name.trim().is_empty() {
                return Err(ConfigError::Invalid("船舶名称不能为空".to_string()));
            }
            if vessel.max_container_count == 0 {
                return Err(ConfigError::Invalid(format!(
                    "船舶 {} 的集装箱数量上限必须 > 0",
                    vessel.name
                )));
            }
            if vessel.max_total_weight_t <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "船舶 {} 的总重量上限必须 > 0",
                    vessel.name
                )));
            }
        }

        for (index, container) in self.containers.iter().enumerate() {
            let spec = container.spec();
            if spec.capacity_kg <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "第 {} 个集装箱的最大载货量必须 > 0",
                    index + 1
                )));
            }
            if spec.tare_kg < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "第 {} 个集装箱的自重不能为负",
                    index + 1
                )));
            }
        }

        Ok(())
    }

    /// 演示场景配置 (驱动程序缺省输入)
    pub fn demo() -> Self {
        Self {
            vessels: vec![
                VesselConfig {
                    name: "Poseidon".to_string(),
                    max_speed_knots: 25.0,
                    max_container_count: 5,
                    max_total_weight_t: 100.0,
                },
                VesselConfig {
                    name: "Neptune".to_string(),
                    max_speed_knots: 20.0,
                    max_container_count: 3,
                    max_total_weight_t: 50.0,
                },
            ],
            containers: vec![
                // 牛奶 (普通液体)
                ContainerConfig::Liquid {
                    spec: ContainerSpec {
                        tare_kg: 1000.0,
                        height_cm: 200.0,
                        depth_cm: 300.0,
                        capacity_kg: 5000.0,
                    },
                    dangerous: false,
                },
                // 燃料 (危险液体)
                ContainerConfig::Liquid {
                    spec: ContainerSpec {
                        tare_kg: 1200.0,
                        height_cm: 220.0,
                        depth_cm: 300.0,
                        capacity_kg: 8000.0,
                    },
                    dangerous: true,
                },
                // 氦气
                ContainerConfig::Gas {
                    spec: ContainerSpec {
                        tare_kg: 800.0,
                        height_cm: 200.0,
                        depth_cm: 200.0,
                        capacity_kg: 3000.0,
                    },
                    pressure_atm: 10.5,
                },
                // 香蕉
                ContainerConfig::Refrigerated {
                    spec: ContainerSpec {
                        tare_kg: 1500.0,
                        height_cm: 250.0,
                        depth_cm: 400.0,
                        capacity_kg: 6000.0,
                    },
                    product: ProductType::Banana,
                    temperature_c: 15.0,
                },
                // 冰淇淋 (恰好在最低温度边界)
                ContainerConfig::Refrigerated {
                    spec: ContainerSpec {
                        tare_kg: 2000.0,
                        height_cm: 250.0,
                        depth_cm: 400.0,
                        capacity_kg: 7000.0,
                    },
                    product: ProductType::IceCream,
                    temperature_c: -18.0,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_config_is_valid() {
        let config = FleetConfig::demo();
        assert!(config.validate().is_ok());
        assert_eq!(config.vessels.len(), 2);
        assert_eq!(config.containers.len(), 5);
    }

    #[test]
    fn test_validation_rejects_zero_capacity_vessel() {
        let mut config = FleetConfig::demo();
        config.vessels[0].max_container_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_container_config_roundtrip() {
        // 标签格式: container_type = SCREAMING_SNAKE_CASE
        let config = FleetConfig::demo();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"container_type\": \"LIQUID\""));
        assert!(json.contains("\"REFRIGERATED\""));

        let back: FleetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.containers.len(), config.containers.len());
    }

    #[test]
    fn test_build_materializes_entities() {
        let mut allocator = SerialAllocator::new();
        let config = FleetConfig::demo();

        let vessels: Vec<_> = config.vessels.iter().map(|v| v.build()).collect();
        assert_eq!(vessels[0].name(), "Poseidon");
        assert_eq!(vessels[1].max_container_count(), 3);

        let containers: Result<Vec<_>, _> = config
            .containers
            .iter()
            .map(|c| c.build(&mut allocator))
            .collect();
        let containers = containers.unwrap();
        assert_eq!(containers[0].serial(), "L-1");
        assert_eq!(containers[2].serial(), "G-1");
        assert_eq!(containers[3].serial(), "C-1");
    }
}
