// ==========================================
// 集装箱船队管理系统 - 领域类型定义
// ==========================================
// 职责: 集装箱类型标签、冷藏货品枚举与最低温度表
// 红线: 温度校验只在构造时执行一次
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 集装箱类型标签 (Container Type Tag)
// ==========================================
// 用途: 序列号分配器按类型独立编号
// 注意: 序列号只保证同类型内唯一, 不保证全局唯一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerTypeTag {
    Liquid,       // 液体集装箱
    Gas,          // 气体集装箱
    Refrigerated, // 冷藏集装箱
}

impl ContainerTypeTag {
    /// 序列号前缀 (L / G / C)
    pub fn prefix(&self) -> &'static str {
        match self {
            ContainerTypeTag::Liquid => "L",
            ContainerTypeTag::Gas => "G",
            ContainerTypeTag::Refrigerated => "C",
        }
    }
}

impl fmt::Display for ContainerTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerTypeTag::Liquid => write!(f, "LIQUID"),
            ContainerTypeTag::Gas => write!(f, "GAS"),
            ContainerTypeTag::Refrigerated => write!(f, "REFRIGERATED"),
        }
    }
}

// ==========================================
// 冷藏货品 (Product Type)
// ==========================================
// 每种货品有固定的最低储藏温度, 见 min_temperature_c()
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Banana,      // 香蕉
    Chocolate,   // 巧克力
    Fish,        // 鱼类
    Meat,        // 肉类
    IceCream,    // 冰淇淋
    FrozenPizza, // 冷冻比萨
    Cheese,      // 奶酪
    Sausage,     // 香肠
    Butter,      // 黄油
    Eggs,        // 鸡蛋
}

impl ProductType {
    /// 货品的最低储藏温度 (°C)
    ///
    /// 冷藏集装箱构造时校验: 指定温度必须 >= 该最低值 (边界含等于)
    pub fn min_temperature_c(&self) -> f64 {
        match self {
            ProductType::Banana => 13.3,
            ProductType::Chocolate => 18.0,
            ProductType::Fish => 2.0,
            ProductType::Meat => -15.0,
            ProductType::IceCream => -18.0,
            ProductType::FrozenPizza => -30.0,
            ProductType::Cheese => 7.2,
            ProductType::Sausage => 5.0,
            ProductType::Butter => 20.5,
            ProductType::Eggs => 19.0,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Banana => write!(f, "BANANA"),
            ProductType::Chocolate => write!(f, "CHOCOLATE"),
            ProductType::Fish => write!(f, "FISH"),
            ProductType::Meat => write!(f, "MEAT"),
            ProductType::IceCream => write!(f, "ICE_CREAM"),
            ProductType::FrozenPizza => write!(f, "FROZEN_PIZZA"),
            ProductType::Cheese => write!(f, "CHEESE"),
            ProductType::Sausage => write!(f, "SAUSAGE"),
            ProductType::Butter => write!(f, "BUTTER"),
            ProductType::Eggs => write!(f, "EGGS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_temperature_table() {
        // 抽查温度表关键条目
        assert_eq!(ProductType::Banana.min_temperature_c(), 13.3);
        assert_eq!(ProductType::IceCream.min_temperature_c(), -18.0);
        assert_eq!(ProductType::FrozenPizza.min_temperature_c(), -30.0);
        assert_eq!(ProductType::Butter.min_temperature_c(), 20.5);
    }

    #[test]
    fn test_type_tag_prefix() {
        assert_eq!(ContainerTypeTag::Liquid.prefix(), "L");
        assert_eq!(ContainerTypeTag::Gas.prefix(), "G");
        assert_eq!(ContainerTypeTag::Refrigerated.prefix(), "C");
    }

    #[test]
    fn test_product_serde_format() {
        // 序列化格式: SCREAMING_SNAKE_CASE (与配置文件一致)
        let json = serde_json::to_string(&ProductType::FrozenPizza).unwrap();
        assert_eq!(json, "\"FROZEN_PIZZA\"");
        let back: ProductType = serde_json::from_str("\"ICE_CREAM\"").unwrap();
        assert_eq!(back, ProductType::IceCream);
    }
}
