//! # 生成报告
//!
//! 每类素材是独立的工作单元，各自记录成功写入的路径或失败原因，
//! 单项失败不会中断其余素材。

use std::path::PathBuf;

use super::AssetKind;

/// 单类素材的处理结果。
#[derive(Debug, Clone)]
pub struct AssetOutcome {
    pub kind: AssetKind,
    /// 成功时为已写入路径，失败时为错误描述。
    pub result: Result<Vec<PathBuf>, String>,
}

impl AssetOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// 一次完整生成的汇总报告。
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl GenerationReport {
    pub(crate) fn push(&mut self, kind: AssetKind, result: Result<Vec<PathBuf>, String>) {
        self.outcomes.push(AssetOutcome { kind, result });
    }

    /// 全部素材均成功。
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(AssetOutcome::is_success)
    }

    /// 所有成功写入的文件。
    pub fn written_files(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .flatten()
            .collect()
    }

    /// 失败的素材及原因。
    pub fn failures(&self) -> Vec<(AssetKind, &str)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match &outcome.result {
                Err(message) => Some((outcome.kind, message.as_str())),
                Ok(_) => None,
            })
            .collect()
    }

    pub fn outcome(&self, kind: AssetKind) -> Option<&AssetOutcome> {
        self.outcomes.iter().find(|outcome| outcome.kind == kind)
    }
}
