//! Progress notifications for a single generation request.

use rust_metagen_types::metadata::MetadataRecord;
use tokio::sync::mpsc;

use crate::error::Result;

/// 生成流程的阶段，按顺序推进。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GenerationStage {
    Started,
    FileLoaded,
    PayloadReady,
    RequestSent,
    ResponseParsed,
}

impl GenerationStage {
    /// 进度百分比。
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Started => 0,
            Self::FileLoaded => 25,
            Self::PayloadReady => 50,
            Self::RequestSent => 75,
            Self::ResponseParsed => 100,
        }
    }
}

/// 进度事件。
///
/// 阶段事件单调不减，最后以 `Completed` 或 `Failed` 结束。
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationProgress {
    Stage(GenerationStage),
    Completed(MetadataRecord),
    Failed(String),
}

impl GenerationProgress {
    /// 终止事件（成功或失败）。
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Failed(_))
    }
}

/// 进度发送端的轻量包装；没有接收方时所有事件都被丢弃。
#[derive(Clone, Copy)]
pub(crate) struct ProgressReporter<'a> {
    sender: Option<&'a mpsc::UnboundedSender<GenerationProgress>>,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) const fn new(
        sender: Option<&'a mpsc::UnboundedSender<GenerationProgress>>,
    ) -> Self {
        Self { sender }
    }

    pub(crate) const fn silent() -> Self {
        Self { sender: None }
    }

    pub(crate) fn stage(&self, stage: GenerationStage) {
        self.emit(GenerationProgress::Stage(stage));
    }

    pub(crate) fn finish(&self, result: &Result<MetadataRecord>) {
        let event = match result {
            Ok(record) => GenerationProgress::Completed(record.clone()),
            Err(err) => GenerationProgress::Failed(err.to_string()),
        };
        self.emit(event);
    }

    fn emit(&self, event: GenerationProgress) {
        if let Some(sender) = self.sender {
            // A dropped receiver only means nobody is watching.
            let _ = sender.send(event);
        }
    }
}
