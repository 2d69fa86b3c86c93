// ==========================================
// 集装箱船队管理系统 - 演示驱动程序
// ==========================================
// 职责: 薄调用方, 构造实体、依次调用装卸/替换/转运并渲染报告
// 说明: 领域规则全部在库内, 这里只消费操作集
// ==========================================

use anyhow::Context;
use container_fleet_aps::{
    fleet, logging, Container, ContainerSpec, FleetConfig, ProductType, SerialAllocator,
    VesselSummary,
};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("集装箱船队管理系统 - 装载与运力核算核心");
    tracing::info!("系统版本: {}", container_fleet_aps::VERSION);
    tracing::info!("==================================================");

    // 配置: 命令行给出路径则从 JSON 加载, 否则使用内置演示场景
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("从配置文件加载船队: {}", path);
            FleetConfig::load_from_file(&path).with_context(|| format!("加载配置失败: {}", path))?
        }
        None => {
            tracing::info!("使用内置演示场景");
            FleetConfig::demo()
        }
    };

    let mut allocator = SerialAllocator::new();

    // 物化船舶
    let mut vessels: Vec<_> = config.vessels.iter().map(|v| v.build()).collect();
    anyhow::ensure!(vessels.len() >= 2, "演示场景需要至少两艘船");

    // 物化集装箱并装载货物 (容器级规则在此生效)
    let mut containers = Vec::new();
    for container_config in &config.containers {
        containers.push(container_config.build(&mut allocator)?);
    }
    anyhow::ensure!(containers.len() >= 5, "演示场景需要至少五个集装箱");

    // 演示装载: 普通液体 90% 阈值内 / 危险液体恰好 50% / 气体按绝对容量
    containers[0].load(4000.0)?; // 牛奶: 限 4500 (90% x 5000)
    containers[1].load(4000.0)?; // 燃料: 限 4000 (50% x 8000), 边界含等于
    containers[2].load(2500.0)?; // 氦气: 绝对容量校验

    let handles: Vec<_> = containers
        .into_iter()
        .map(container_fleet_aps::new_handle)
        .collect();
    let (milk, fuel, helium, bananas, ice_cream) = (
        handles[0].clone(),
        handles[1].clone(),
        handles[2].clone(),
        handles[3].clone(),
        handles[4].clone(),
    );

    // 装载到首船: 单箱 + 批量
    {
        let vessel_a = &mut vessels[0];
        vessel_a.load(milk)?;
        vessel_a.load(fuel.clone())?;
        vessel_a.load(helium.clone())?;
        vessel_a.load_many(vec![bananas.clone(), ice_cream])?;
    }

    tracing::info!("\n{}", VesselSummary::capture(&vessels[0])?);

    // 跨船转运氦气集装箱
    {
        let (left, right) = vessels.split_at_mut(1);
        fleet::transfer(&helium, &mut left[0], &mut right[0])?;
    }
    tracing::info!("氦气集装箱转运完成:");
    tracing::info!("\n{}", VesselSummary::capture(&vessels[0])?);
    tracing::info!("\n{}", VesselSummary::capture(&vessels[1])?);

    // 用新建的奶酪集装箱替换香蕉集装箱 (两阶段替换)
    let cheese = container_fleet_aps::new_handle(Container::new_refrigerated(
        &mut allocator,
        ContainerSpec {
            tare_kg: 1800.0,
            height_cm: 250.0,
            depth_cm: 400.0,
            capacity_kg: 6500.0,
        },
        ProductType::Cheese,
        8.0,
    )?);
    vessels[0].replace(&bananas, cheese)?;
    tracing::info!("香蕉集装箱已替换为奶酪集装箱:");
    tracing::info!("\n{}", VesselSummary::capture(&vessels[0])?);

    // 卸载: 燃料清空, 氦气保留 5%
    vessels[0].unload(&fuel)?;
    vessels[1].unload(&helium)?;

    let remaining_kg = helium
        .lock()
        .map_err(|e| anyhow::anyhow!("锁获取失败: {}", e))?
        .cargo_mass_kg();
    tracing::info!("氦气集装箱卸载后剩余 (保留 5%): {} kg", remaining_kg);

    tracing::info!("\n{}", VesselSummary::capture(&vessels[0])?);
    tracing::info!("\n{}", VesselSummary::capture(&vessels[1])?);

    Ok(())
}
