use crate::codegen::{generate_with_options, CodegenOptions};
use crate::sequence::StatementList;
use crate::validate::{ValidationReport, Validator};
use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub debounce: Duration,
    pub codegen: CodegenOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            codegen: CodegenOptions::default(),
        }
    }
}

/// A cancelable delayed task. Each `schedule` replaces the pending deadline; the caller
/// drives time by passing `Instant`s in.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the pending deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptSource {
    Generated,
    /// Direct text edit in progress; `committed` once the user saves it.
    Edited { text: String, committed: bool },
}

/// Binds a statement list to its generated script and the latest validation report.
pub struct EditSession {
    statements: StatementList,
    config: SessionConfig,
    validator: Validator,
    generated: String,
    generated_version: Option<u64>,
    source: ScriptSource,
    report: ValidationReport,
    debounce: Debounce,
}

impl EditSession {
    pub fn new(statements: StatementList, config: SessionConfig) -> Result<Self> {
        let validator = Validator::new()?;
        let debounce = Debounce::new(config.debounce);
        let mut session = Self {
            statements,
            config,
            validator,
            generated: String::new(),
            generated_version: None,
            source: ScriptSource::Generated,
            report: ValidationReport {
                is_valid: true,
                errors: Vec::new(),
            },
            debounce,
        };
        session.refresh();
        Ok(session)
    }

    pub fn statements(&self) -> &StatementList {
        &self.statements
    }

    /// Mutable access for editor actions; call [`EditSession::refresh`] afterwards.
    pub fn statements_mut(&mut self) -> &mut StatementList {
        &mut self.statements
    }

    /// The current artifact: edited text when the user has taken over, otherwise the generated
    /// program.
    pub fn script(&self) -> &str {
        match &self.source {
            ScriptSource::Edited { text, .. } => text,
            ScriptSource::Generated => &self.generated,
        }
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn is_text_edited(&self) -> bool {
        matches!(self.source, ScriptSource::Edited { .. })
    }

    /// Regenerates when the statement list changed and re-validates right away.
    pub fn refresh(&mut self) {
        let version = self.statements.version();
        if self.generated_version != Some(version) {
            self.generated =
                generate_with_options(self.statements.statements(), self.config.codegen);
            self.generated_version = Some(version);
            debug!(version, "regenerated script");
        }
        if !self.is_text_edited() {
            self.debounce.cancel();
            self.revalidate();
        }
    }

    pub fn begin_text_edit(&mut self) {
        if !self.is_text_edited() {
            self.source = ScriptSource::Edited {
                text: self.generated.clone(),
                committed: false,
            };
        }
    }

    /// A keystroke: replaces the edited text and restarts the debounce.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.source = ScriptSource::Edited {
            text: text.into(),
            committed: false,
        };
        self.debounce.schedule(now);
    }

    /// Re-validates if the debounce fired. Returns the fresh report when it did.
    pub fn tick(&mut self, now: Instant) -> Option<&ValidationReport> {
        if self.debounce.fire_if_due(now) {
            self.revalidate();
            Some(&self.report)
        } else {
            None
        }
    }

    pub fn has_pending_validation(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Keeps the edited text as the artifact, validating it immediately.
    pub fn commit_text_edit(&mut self) {
        if let ScriptSource::Edited { committed, .. } = &mut self.source {
            *committed = true;
        }
        self.debounce.cancel();
        self.revalidate();
    }

    pub fn is_committed(&self) -> bool {
        matches!(self.source, ScriptSource::Edited { committed: true, .. })
    }

    /// Drops the edited text and returns to the generated program.
    pub fn discard_text_edit(&mut self) {
        self.source = ScriptSource::Generated;
        self.debounce.cancel();
        self.revalidate();
    }

    pub fn teardown(&mut self) {
        self.debounce.cancel();
    }

    fn revalidate(&mut self) {
        self.report = self.validator.validate(self.script());
        if !self.report.is_valid {
            warn!(errors = self.report.errors.len(), "script has structural errors");
        }
    }
}
