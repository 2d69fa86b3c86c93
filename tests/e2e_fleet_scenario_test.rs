// ==========================================
// 船队全流程端到端测试
// ==========================================
// 测试目标: 按演示场景串联 装载 -> 上船 -> 转运 -> 替换 -> 卸载
// 覆盖范围: 容器级与船舶级规则在完整流程中的协同
// ==========================================

use container_fleet_aps::{
    fleet, new_handle, Container, ContainerSpec, ProductType, RecordingHazardNotifier,
    SerialAllocator, Vessel, VesselSummary,
};
use std::sync::Arc;

#[test]
fn test_full_fleet_scenario() {
    let mut allocator = SerialAllocator::new();
    let hazard_log = Arc::new(RecordingHazardNotifier::new());

    // 两艘船: Poseidon (5 箱 / 100 吨), Neptune (3 箱 / 50 吨)
    let mut poseidon = Vessel::new("Poseidon", 25.0, 5, 100.0);
    let mut neptune = Vessel::new("Neptune", 20.0, 3, 50.0);

    // 五个集装箱
    let mut milk = Container::new_liquid_with_notifier(
        &mut allocator,
        ContainerSpec {
            tare_kg: 1000.0,
            height_cm: 200.0,
            depth_cm: 300.0,
            capacity_kg: 5000.0,
        },
        false,
        hazard_log.clone(),
    );
    let mut fuel = Container::new_liquid_with_notifier(
        &mut allocator,
        ContainerSpec {
            tare_kg: 1200.0,
            height_cm: 220.0,
            depth_cm: 300.0,
            capacity_kg: 8000.0,
        },
        true,
        hazard_log.clone(),
    );
    let mut helium = Container::new_gas(
        &mut allocator,
        ContainerSpec {
            tare_kg: 800.0,
            height_cm: 200.0,
            depth_cm: 200.0,
            capacity_kg: 3000.0,
        },
        10.5,
    );
    let bananas = Container::new_refrigerated(
        &mut allocator,
        ContainerSpec {
            tare_kg: 1500.0,
            height_cm: 250.0,
            depth_cm: 400.0,
            capacity_kg: 6000.0,
        },
        ProductType::Banana,
        15.0,
    )
    .unwrap();
    let ice_cream = Container::new_refrigerated(
        &mut allocator,
        ContainerSpec {
            tare_kg: 2000.0,
            height_cm: 250.0,
            depth_cm: 400.0,
            capacity_kg: 7000.0,
        },
        ProductType::IceCream,
        -18.0,
    )
    .unwrap();

    // 装货: 全部在规则允许范围内
    milk.load(4000.0).unwrap(); // 90% x 5000 = 4500
    fuel.load(4000.0).unwrap(); // 50% x 8000 = 4000 (边界)
    helium.load(2500.0).unwrap();

    // 危险装载尝试: 通报 + 拒绝, 不影响后续流程
    assert!(fuel.load(1.0).is_err());
    assert_eq!(hazard_log.count(), 1);
    assert_eq!(hazard_log.records()[0].0, "L-2");

    let milk = new_handle(milk);
    let fuel = new_handle(fuel);
    let helium = new_handle(helium);
    let bananas = new_handle(bananas);
    let ice_cream = new_handle(ice_cream);

    // 上船: 三箱单独 + 两箱批量
    poseidon.load(milk.clone()).unwrap();
    poseidon.load(fuel.clone()).unwrap();
    poseidon.load(helium.clone()).unwrap();
    poseidon
        .load_many(vec![bananas.clone(), ice_cream.clone()])
        .unwrap();
    assert_eq!(poseidon.container_count(), 5);

    // 聚合重量: 自重合计 6500 + 货物合计 10500 = 17000 kg
    assert_eq!(poseidon.total_weight_kg().unwrap(), 17_000.0);

    // 转运氦气到 Neptune
    fleet::transfer(&helium, &mut poseidon, &mut neptune).unwrap();
    assert_eq!(poseidon.container_count(), 4);
    assert_eq!(neptune.container_count(), 1);

    // 替换: 香蕉 -> 新建奶酪箱
    let cheese = new_handle(
        Container::new_refrigerated(
            &mut allocator,
            ContainerSpec {
                tare_kg: 1800.0,
                height_cm: 250.0,
                depth_cm: 400.0,
                capacity_kg: 6500.0,
            },
            ProductType::Cheese,
            8.0,
        )
        .unwrap(),
    );
    poseidon.replace(&bananas, cheese.clone()).unwrap();
    assert!(!poseidon.contains(&bananas));
    assert!(poseidon.contains(&cheese));
    assert_eq!(poseidon.container_count(), 4);

    // 卸载: 燃料清空, 氦气保留 5%
    poseidon.unload(&fuel).unwrap();
    neptune.unload(&helium).unwrap();
    assert_eq!(fuel.lock().unwrap().cargo_mass_kg(), 0.0);
    assert_eq!(helium.lock().unwrap().cargo_mass_kg(), 125.0);

    // 报告投影: 两船状态与序列号
    let poseidon_summary = VesselSummary::capture(&poseidon).unwrap();
    assert_eq!(poseidon_summary.container_count, 4);
    let serials: Vec<_> = poseidon_summary
        .containers
        .iter()
        .map(|c| c.serial.as_str())
        .collect();
    assert_eq!(serials, vec!["L-1", "L-2", "C-2", "C-3"]);

    let neptune_summary = VesselSummary::capture(&neptune).unwrap();
    assert_eq!(neptune_summary.containers[0].serial, "G-1");
    assert_eq!(neptune_summary.total_weight_kg, 925.0); // 800 自重 + 125 剩余

    // 整个流程只产生一条危险通报
    assert_eq!(hazard_log.count(), 1);
}
