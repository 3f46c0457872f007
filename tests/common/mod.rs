//! Common test utilities and helpers
//!
//! This module provides a recording transport for library tests and a
//! command builder for binary tests.

#![allow(dead_code)]

use assert_cmd::Command;
use async_trait::async_trait;
use ntfy_publish::{
    NtfyError, NtfyResult, PreparedBody, PublishRequest, RawResponse, Topic, TopicBuilder,
    Transport,
};
use predicates::prelude::*;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const SUCCESS_BODY: &str =
    r#"{"id":"sPs71M8A2T","time":1704067200,"expires":1704110400,"event":"message","topic":"alerts"}"#;

/// A request as seen by [`RecordingTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request: PublishRequest,
    pub body: Vec<u8>,
}

/// Transport returning canned responses and recording every request
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response; without queued responses every call succeeds
    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(RawResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: &PublishRequest, body: PreparedBody) -> NtfyResult<RawResponse> {
        let body = body.into_bytes().await?;
        self.requests.lock().unwrap().push(RecordedRequest {
            request: request.clone(),
            body,
        });
        let response = self.responses.lock().unwrap().pop_front();
        Ok(response.unwrap_or_else(|| RawResponse::new(200, SUCCESS_BODY)))
    }
}

/// Transport failing every call as if the server were unreachable
pub struct UnreachableTransport;

#[async_trait]
impl Transport for UnreachableTransport {
    async fn execute(&self, request: &PublishRequest, _: PreparedBody) -> NtfyResult<RawResponse> {
        Err(NtfyError::Timeout {
            url: request.url().to_string(),
        })
    }
}

/// Builder for topic `name` sending through `transport`
pub fn topic_builder(name: &str, transport: &Arc<RecordingTransport>) -> TopicBuilder {
    Topic::builder(name).shared_transport(transport.clone())
}

/// Test command builder for the ntfy-publish binary
pub struct TestCommand {
    cmd: Command,
}

impl TestCommand {
    pub fn new() -> Self {
        let mut cmd = Command::cargo_bin("ntfy-publish").expect("Failed to find ntfy-publish binary");
        cmd.env_remove("NTFY_HOST")
            .env_remove("NTFY_TOKEN")
            .env_remove("NTFY_PUBLISH_CONFIG")
            .env_remove("RUST_LOG");
        Self { cmd }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.cmd.arg(arg.as_ref());
        }
        self
    }

    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg.as_ref());
        self
    }

    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.cmd.env(key.as_ref(), val.as_ref());
        self
    }

    /// Execute and expect success
    pub fn expect_success(mut self) -> TestAssertion {
        let assert = self.cmd.assert().success();
        TestAssertion { assert }
    }

    /// Execute and expect failure
    pub fn expect_failure(mut self) -> TestAssertion {
        let assert = self.cmd.assert().failure();
        TestAssertion { assert }
    }
}

impl Default for TestCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Test assertion wrapper with convenient methods
pub struct TestAssertion {
    assert: assert_cmd::assert::Assert,
}

impl TestAssertion {
    pub fn stdout_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stdout(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    pub fn stdout_contains_all<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.assert = self.assert.stdout(predicate::str::contains(pattern.as_ref()));
        }
        self
    }

    pub fn stdout_excludes<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self
            .assert
            .stdout(predicate::str::contains(text.as_ref()).not());
        Self { assert }
    }

    pub fn stderr_contains<S: AsRef<str>>(self, text: S) -> Self {
        let assert = self.assert.stderr(predicate::str::contains(text.as_ref()));
        Self { assert }
    }

    pub fn done(self) -> assert_cmd::assert::Assert {
        self.assert
    }
}

/// Temporary directory holding a configuration file
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("ntfy-publish").join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write `content` as the configuration file
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.config_path.parent().unwrap()).unwrap();
        std::fs::write(&self.config_path, content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this environment
    pub fn command(&self) -> TestCommand {
        TestCommand::new()
            .arg("--config")
            .arg(self.config_path.to_string_lossy())
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
