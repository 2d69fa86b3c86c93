// ==========================================
// 集装箱船队管理系统 - 船舶实体
// ==========================================
// 职责: 集装箱集合的准入控制与聚合核算
// 红线: 运力校验 (数量/总重量) 先于任何状态变更
// 红线: 同一集装箱同时最多属于一艘船 (领域约定, 由操作维护)
// ==========================================

use crate::domain::container::Container;
use crate::domain::error::{FleetError, FleetResult};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::instrument;

// ==========================================
// ContainerHandle - 共享句柄
// ==========================================

/// 集装箱共享句柄
///
/// 集装箱从船上移除后仍是有效实体 (转运期间独立存在),
/// 成员判定与移除按引用同一性 (Arc::ptr_eq) 进行
pub type ContainerHandle = Arc<Mutex<Container>>;

/// 把集装箱包进共享句柄
pub fn new_handle(container: Container) -> ContainerHandle {
    Arc::new(Mutex::new(container))
}

/// 获取集装箱锁, 锁中毒映射为 FleetError::Lock
pub(crate) fn lock_container(handle: &ContainerHandle) -> FleetResult<MutexGuard<'_, Container>> {
    handle
        .lock()
        .map_err(|e| FleetError::Lock(format!("container lock: {}", e)))
}

// ==========================================
// Vessel - 船舶
// ==========================================

/// 船舶实体
///
/// 唯一的可变状态是持有的集装箱集合 (保持插入顺序);
/// 数量上限与总重量上限 (吨) 在每次准入前校验
#[derive(Debug)]
pub struct Vessel {
    name: String,
    max_speed_knots: f64,
    max_container_count: usize,
    max_total_weight_t: f64,
    containers: Vec<ContainerHandle>,
}

impl Vessel {
    pub fn new(
        name: impl Into<String>,
        max_speed_knots: f64,
        max_container_count: usize,
        max_total_weight_t: f64,
    ) -> Self {
        Self {
            name: name.into(),
            max_speed_knots,
            max_container_count,
            max_total_weight_t,
            containers: Vec::new(),
        }
    }

    // ==========================================
    // 准入校验
    // ==========================================

    /// 校验装载一个集装箱是否可行 (不改变任何状态)
    ///
    /// # 参数
    /// - `additional_kg`: 待装载集装箱的总重量 (kg)
    /// - `excluded`: 校验时视为已移除的集装箱 (replace 场景)
    fn check_admission(
        &self,
        additional_kg: f64,
        excluded: Option<&ContainerHandle>,
    ) -> FleetResult<()> {
        let held_count = match excluded {
            Some(handle) if self.contains(handle) => self.containers.len() - 1,
            _ => self.containers.len(),
        };
        if held_count >= self.max_container_count {
            return Err(FleetError::ContainerCountExceeded {
                vessel: self.name.clone(),
                max_count: self.max_container_count,
            });
        }

        let mut current_kg = 0.0;
        for handle in &self.containers {
            if let Some(ex) = excluded {
                if Arc::ptr_eq(handle, ex) {
                    continue;
                }
            }
            current_kg += lock_container(handle)?.total_weight_kg();
        }

        let projected_t = (current_kg + additional_kg) / 1000.0;
        if projected_t > self.max_total_weight_t {
            return Err(FleetError::WeightLimitExceeded {
                vessel: self.name.clone(),
                projected_t,
                max_weight_t: self.max_total_weight_t,
            });
        }

        Ok(())
    }

    /// 校验装载可行性 (供船队级操作在移除源船之前预检)
    pub fn can_admit(&self, handle: &ContainerHandle) -> FleetResult<()> {
        let additional_kg = lock_container(handle)?.total_weight_kg();
        self.check_admission(additional_kg, None)
    }

    // ==========================================
    // 装卸操作
    // ==========================================

    /// 装载一个集装箱
    ///
    /// 先查数量上限, 再查总重量上限; 任一违反则拒绝且集合不变
    #[instrument(skip_all, fields(vessel = %self.name))]
    pub fn load(&mut self, handle: ContainerHandle) -> FleetResult<()> {
        self.can_admit(&handle)?;
        self.containers.push(handle);
        tracing::debug!(
            count = self.containers.len(),
            "集装箱已装载"
        );
        Ok(())
    }

    /// 按给定顺序装载一批集装箱
    ///
    /// 首个失败即中止剩余装载; 本批已装载的集装箱保留在船上
    /// (无批量回滚, 与单次装载语义一致)
    pub fn load_many(&mut self, handles: Vec<ContainerHandle>) -> FleetResult<()> {
        for handle in handles {
            self.load(handle)?;
        }
        Ok(())
    }

    /// 按引用同一性移除集装箱; 不在船上时为静默无操作
    ///
    /// 移除不销毁实体
    pub fn remove(&mut self, handle: &ContainerHandle) {
        self.containers.retain(|held| !Arc::ptr_eq(held, handle));
    }

    /// 卸载某个集装箱的货物 (委托给集装箱自身规则)
    ///
    /// 不影响船舶级成员关系
    pub fn unload(&self, handle: &ContainerHandle) -> FleetResult<()> {
        lock_container(handle)?.unload();
        Ok(())
    }

    /// 用新集装箱替换旧集装箱
    ///
    /// 旧集装箱不在船上时返回 ContainerNotFound
    ///
    /// 两阶段语义: 先按 "旧箱已移除" 口径校验新箱准入,
    /// 校验失败时旧箱保留在船上 (区别于字面原始行为, 见 DESIGN.md)
    #[instrument(skip_all, fields(vessel = %self.name))]
    pub fn replace(&mut self, old: &ContainerHandle, new: ContainerHandle) -> FleetResult<()> {
        if !self.contains(old) {
            let serial = lock_container(old)?.serial().to_string();
            return Err(FleetError::ContainerNotFound {
                serial,
                vessel: self.name.clone(),
            });
        }

        let additional_kg = lock_container(&new)?.total_weight_kg();
        self.check_admission(additional_kg, Some(old))?;

        self.remove(old);
        self.containers.push(new);
        Ok(())
    }

    // ==========================================
    // 只读查询
    // ==========================================

    /// 是否持有该集装箱 (引用同一性)
    pub fn contains(&self, handle: &ContainerHandle) -> bool {
        self.containers
            .iter()
            .any(|held| Arc::ptr_eq(held, handle))
    }

    /// 当前持有的集装箱总重量 (kg)
    pub fn total_weight_kg(&self) -> FleetResult<f64> {
        let mut sum_kg = 0.0;
        for handle in &self.containers {
            sum_kg += lock_container(handle)?.total_weight_kg();
        }
        Ok(sum_kg)
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn containers(&self) -> &[ContainerHandle] {
        &self.containers
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_speed_knots(&self) -> f64 {
        self.max_speed_knots
    }

    pub fn max_container_count(&self) -> usize {
        self.max_container_count
    }

    pub fn max_total_weight_t(&self) -> f64 {
        self.max_total_weight_t
    }
}
