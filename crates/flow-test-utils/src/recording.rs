//! A [`GitOperations`] implementation that records calls instead of running git.

use std::cell::RefCell;
use std::path::Path;

use flow_git::{Error, GitOperations, Result};

/// Which operation a call was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpName {
    Stage,
    Stash,
    Commit,
    Push,
}

/// A recorded call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpCall {
    Stage {
        pathspec: String,
    },
    Stash {
        message: String,
        keep_index: bool,
    },
    Commit {
        message: String,
        allow_empty: bool,
    },
    Push {
        remote: String,
        branch: String,
        set_upstream: bool,
    },
}

impl OpCall {
    /// The operation this call invoked.
    pub fn name(&self) -> OpName {
        match self {
            OpCall::Stage { .. } => OpName::Stage,
            OpCall::Stash { .. } => OpName::Stash,
            OpCall::Commit { .. } => OpName::Commit,
            OpCall::Push { .. } => OpName::Push,
        }
    }
}

/// Records every call; optionally fails one kind of operation.
///
/// A failing call is still recorded, so tests can assert that nothing ran
/// after it.
#[derive(Debug, Default)]
pub struct RecordingOps {
    calls: RefCell<Vec<OpCall>>,
    fail_on: Option<OpName>,
}

impl RecordingOps {
    /// Recorder where every operation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder where `op` returns an error.
    pub fn failing_on(op: OpName) -> Self {
        Self {
            calls: RefCell::default(),
            fail_on: Some(op),
        }
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<OpCall> {
        self.calls.borrow().clone()
    }

    /// Names of the calls recorded so far, in order.
    pub fn names(&self) -> Vec<OpName> {
        self.calls.borrow().iter().map(OpCall::name).collect()
    }

    fn record(&self, call: OpCall) -> Result<()> {
        let name = call.name();
        self.calls.borrow_mut().push(call);
        if self.fail_on == Some(name) {
            return Err(Error::CommandFailed {
                command: format!("git {name:?}").to_lowercase(),
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl GitOperations for RecordingOps {
    fn stage(&self, _cwd: &Path, pathspec: &str) -> Result<()> {
        self.record(OpCall::Stage {
            pathspec: pathspec.to_string(),
        })
    }

    fn stash(&self, _cwd: &Path, message: &str, keep_index: bool) -> Result<()> {
        self.record(OpCall::Stash {
            message: message.to_string(),
            keep_index,
        })
    }

    fn commit(&self, _cwd: &Path, message: &str, allow_empty: bool) -> Result<()> {
        self.record(OpCall::Commit {
            message: message.to_string(),
            allow_empty,
        })
    }

    fn push(&self, _cwd: &Path, remote: &str, branch: &str, set_upstream: bool) -> Result<()> {
        self.record(OpCall::Push {
            remote: remote.to_string(),
            branch: branch.to_string(),
            set_upstream,
        })
    }
}
