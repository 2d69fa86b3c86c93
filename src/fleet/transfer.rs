// ==========================================
// 集装箱船队管理系统 - 跨船转运
// ==========================================
// 职责: 船队级操作, 组合单船原语 (移除 + 装载)
// 红线: 两阶段语义, 目的船准入校验先于源船移除
// ==========================================

use crate::domain::error::{FleetError, FleetResult};
use crate::domain::vessel::{lock_container, ContainerHandle, Vessel};
use tracing::instrument;

/// 把集装箱从源船转运到目的船
///
/// # 语义
/// 1. 集装箱不在源船上: ContainerNotFound, 无任何变更
/// 2. 目的船准入校验失败 (数量/重量): 集装箱保留在源船上
///    (字面原始行为是先移除后装载, 失败时两船都不持有;
///    此处按推荐改为先验后换, 见 DESIGN.md)
/// 3. 校验通过: 从源船移除, 追加到目的船
///
/// # 参数
/// - `handle`: 待转运集装箱
/// - `source`: 源船
/// - `destination`: 目的船
#[instrument(skip_all, fields(
    source = %source.name(),
    destination = %destination.name()
))]
pub fn transfer(
    handle: &ContainerHandle,
    source: &mut Vessel,
    destination: &mut Vessel,
) -> FleetResult<()> {
    if !source.contains(handle) {
        let serial = lock_container(handle)?.serial().to_string();
        return Err(FleetError::ContainerNotFound {
            serial,
            vessel: source.name().to_string(),
        });
    }

    // 先验目的船准入, 再动源船
    destination.can_admit(handle)?;

    source.remove(handle);
    destination.load(handle.clone())?;

    tracing::info!("集装箱转运完成");
    Ok(())
}
