//! The DeviceInfo application object.
//!
//! Ties one host environment, page and console together and runs the nine
//! read → classify → format → present steps. Nothing is cached between steps: every step
//! re-reads the host, and a failed write never stops the ones after it.

use chrono::{DateTime, Utc};
use deviceinfo_classifier::{
    screen_position, screen_role, window_state, Classification, ClassifierThresholds,
    ScreenPosition, ScreenRole, WindowState,
};
use deviceinfo_core_types::TargetId;
use deviceinfo_diagnostics::{DiagnosticLogger, HostConsole};
use deviceinfo_metric_reader::{HostEnvironment, MetricReader};
use deviceinfo_presenter::{format, Content, HostPage, Presenter, SlotStatus};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};
use uuid::Uuid;

/// Result of one step of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOutcome {
    pub target: TargetId,
    pub text: String,
    pub status: SlotStatus,
    /// Whether the page had the target and received the text.
    pub written: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub run_id: Uuid,
    pub captured_at: DateTime<Utc>,
    pub outcomes: Vec<TargetOutcome>,
}

impl ExecutionReport {
    pub fn outcome(&self, target: TargetId) -> Option<&TargetOutcome> {
        self.outcomes.iter().find(|outcome| outcome.target == target)
    }

    pub fn written_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.written).count()
    }

    pub fn all_written(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.written)
    }
}

pub struct DeviceInfo<E, P, C> {
    env: E,
    page: P,
    console: C,
    thresholds: ClassifierThresholds,
}

impl<E, P, C> DeviceInfo<E, P, C>
where
    E: HostEnvironment,
    P: HostPage,
    C: HostConsole,
{
    pub fn new(env: E, page: P, console: C) -> Self {
        Self {
            env,
            page,
            console,
            thresholds: ClassifierThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: ClassifierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (E, P, C) {
        (self.env, self.page, self.console)
    }

    pub fn logger(&self) -> DiagnosticLogger<'_, C> {
        DiagnosticLogger::new(&self.console)
    }

    pub fn log(&self, level: &str, values: &[&str]) -> bool {
        self.logger().log(level, values)
    }

    pub fn reader(&self) -> MetricReader<'_, E, C> {
        MetricReader::new(&self.env, self.logger())
    }

    pub fn window_size(&self) -> WindowState {
        window_state(&self.reader().read_size_geometry(), &self.thresholds)
    }

    pub fn screen_type(&self) -> ScreenRole {
        screen_role(&self.reader().read_position_geometry())
    }

    pub fn screen_position(&self) -> ScreenPosition {
        screen_position(&self.reader().read_position_geometry())
    }

    pub fn classification(&self) -> Classification {
        Classification::of(&self.reader().read_geometry(), &self.thresholds)
    }

    /// Write arbitrary content into a page target.
    pub fn inject(&mut self, target_id: &str, content: impl Into<Content>) -> bool {
        let logger = DiagnosticLogger::new(&self.console);
        Presenter::new(&mut self.page, logger).present(target_id, content)
    }

    /// Formatted content for `target`, read fresh from the host.
    pub fn content_for(&self, target: TargetId) -> Content {
        let reader = self.reader();
        match target {
            TargetId::WindowInnerDimension => {
                format::dimension(reader.inner_width(), reader.inner_height())
            }
            TargetId::WindowOuterDimension => {
                format::dimension(reader.outer_width(), reader.outer_height())
            }
            TargetId::WindowMaxDimension => {
                format::dimension(reader.max_width(), reader.max_height())
            }
            TargetId::WindowSize => format::label(self.window_size()),
            TargetId::ScreenDimension => {
                format::dimension(reader.screen_width(), reader.screen_height())
            }
            TargetId::ScreenPixelRatio => format::pixel_ratio(reader.pixel_ratio()),
            TargetId::ScreenColorDepth => format::color_depth(reader.color_depth()),
            TargetId::ScreenType => format::screen_type(self.screen_type()),
            TargetId::ScreenPosition => format::label(self.screen_position()),
        }
    }

    fn apply(&mut self, target: TargetId) -> TargetOutcome {
        let content = self.content_for(target);
        let text = content.text().to_string();
        let status = content.status();
        let written = self.inject(target.as_str(), content);
        TargetOutcome {
            target,
            text,
            status,
            written,
        }
    }

    pub fn set_window_inner_dimension(&mut self) -> bool {
        self.apply(TargetId::WindowInnerDimension).written
    }

    pub fn set_window_outer_dimension(&mut self) -> bool {
        self.apply(TargetId::WindowOuterDimension).written
    }

    pub fn set_window_max_dimension(&mut self) -> bool {
        self.apply(TargetId::WindowMaxDimension).written
    }

    pub fn set_window_size(&mut self) -> bool {
        self.apply(TargetId::WindowSize).written
    }

    pub fn set_screen_dimension(&mut self) -> bool {
        self.apply(TargetId::ScreenDimension).written
    }

    pub fn set_screen_pixel_ratio(&mut self) -> bool {
        self.apply(TargetId::ScreenPixelRatio).written
    }

    pub fn set_screen_color_depth(&mut self) -> bool {
        self.apply(TargetId::ScreenColorDepth).written
    }

    pub fn set_screen_type(&mut self) -> bool {
        self.apply(TargetId::ScreenType).written
    }

    pub fn set_screen_position(&mut self) -> bool {
        self.apply(TargetId::ScreenPosition).written
    }

    /// Run every step once, in page order.
    pub fn execute(&mut self) -> ExecutionReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("deviceinfo.execute", %run_id);
        let _enter = span.enter();

        let captured_at = Utc::now();
        let outcomes: Vec<TargetOutcome> = TargetId::ALL
            .iter()
            .map(|target| self.apply(*target))
            .collect();

        let report = ExecutionReport {
            run_id,
            captured_at,
            outcomes,
        };
        let written = report.written_count();
        if report.all_written() {
            info!(written, "device info injected");
        } else {
            warn!(
                written,
                skipped = report.outcomes.len() - written,
                "device info injected with missing targets"
            );
        }
        report
    }
}
