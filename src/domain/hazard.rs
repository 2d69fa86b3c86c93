// ==========================================
// 集装箱船队管理系统 - 危险操作通报
// ==========================================
// 职责: 定义危险操作通报 trait, 实现依赖倒置
// 说明: 领域层定义 trait, 调用方 (驱动程序/测试) 实现适配器
// 红线: 通报先于错误返回 (先通报, 后失败)
// ==========================================

use std::fmt;
use std::sync::{Arc, Mutex};

// ==========================================
// 通报 Trait
// ==========================================

/// 危险操作通报者 Trait
///
/// 领域层定义, 由外部协作方实现
/// 液体与气体集装箱持有该能力; 冷藏集装箱不持有
///
/// # 说明
/// - 气体集装箱当前没有触发通报的操作, 能力保留
///   (与液体对称, 为未来的压力阈值检查预留)
pub trait HazardNotifier: Send + Sync {
    /// 发出危险操作通报
    ///
    /// # 参数
    /// - `serial`: 集装箱序列号
    /// - `message`: 通报内容 (含尝试装载量、阈值、允许上限)
    fn notify_hazard(&self, serial: &str, message: &str);
}

// ==========================================
// 内置实现
// ==========================================

/// 日志通报者
///
/// 通过 tracing::warn! 输出, 默认接线
#[derive(Debug, Clone, Default)]
pub struct LogHazardNotifier;

impl HazardNotifier for LogHazardNotifier {
    fn notify_hazard(&self, serial: &str, message: &str) {
        tracing::warn!("[ALERT] 集装箱 {}: {}", serial, message);
    }
}

/// 空操作通报者
///
/// 用于不需要通报的场景 (如单元测试)
#[derive(Debug, Clone, Default)]
pub struct NoOpHazardNotifier;

impl HazardNotifier for NoOpHazardNotifier {
    fn notify_hazard(&self, serial: &str, message: &str) {
        tracing::debug!(
            "NoOpHazardNotifier: 跳过通报 - serial={}, message={}",
            serial,
            message
        );
    }
}

/// 记录式通报者
///
/// 把通报内容累积在内部缓冲, 供测试断言或驱动程序展示
#[derive(Debug, Default)]
pub struct RecordingHazardNotifier {
    records: Mutex<Vec<(String, String)>>,
}

impl RecordingHazardNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的通报 (serial, message) 快照
    pub fn records(&self) -> Vec<(String, String)> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// 已记录的通报条数
    pub fn count(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl HazardNotifier for RecordingHazardNotifier {
    fn notify_hazard(&self, serial: &str, message: &str) {
        if let Ok(mut guard) = self.records.lock() {
            guard.push((serial.to_string(), message.to_string()));
        }
    }
}

// ==========================================
// 可选通报者包装
// ==========================================

/// 可选的通报者包装
///
/// 简化 Option<Arc<dyn HazardNotifier>> 的使用
#[derive(Clone)]
pub struct OptionalHazardNotifier {
    inner: Option<Arc<dyn HazardNotifier>>,
}

impl OptionalHazardNotifier {
    /// 创建带通报者的实例
    pub fn with_notifier(notifier: Arc<dyn HazardNotifier>) -> Self {
        Self {
            inner: Some(notifier),
        }
    }

    /// 创建空实例 (不通报)
    pub fn none() -> Self {
        Self { inner: None }
    }

    /// 发出通报 (如果配置了通报者)
    pub fn notify(&self, serial: &str, message: &str) {
        match &self.inner {
            Some(notifier) => notifier.notify_hazard(serial, message),
            None => {
                tracing::debug!(
                    "OptionalHazardNotifier: 未配置通报者, 跳过 - serial={}",
                    serial
                );
            }
        }
    }

    /// 检查是否配置了通报者
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for OptionalHazardNotifier {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for OptionalHazardNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalHazardNotifier")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_accumulates() {
        let notifier = RecordingHazardNotifier::new();
        notifier.notify_hazard("L-1", "阈值超限");
        notifier.notify_hazard("L-2", "阈值超限");

        assert_eq!(notifier.count(), 2);
        let records = notifier.records();
        assert_eq!(records[0].0, "L-1");
        assert_eq!(records[1].0, "L-2");
    }

    #[test]
    fn test_optional_notifier_none_is_silent() {
        let optional = OptionalHazardNotifier::none();
        assert!(!optional.is_configured());
        // 不应 panic
        optional.notify("L-1", "测试");
    }

    #[test]
    fn test_optional_notifier_delegates() {
        let recording = Arc::new(RecordingHazardNotifier::new());
        let optional = OptionalHazardNotifier::with_notifier(recording.clone());
        assert!(optional.is_configured());

        optional.notify("G-1", "测试通报");
        assert_eq!(recording.count(), 1);
    }
}
