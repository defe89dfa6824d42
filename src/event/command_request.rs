// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outgoing command channel.

use tokio::sync::broadcast;

use crate::command::Command;
use crate::types::ControlUuid;

/// Default channel capacity for the command sink.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A command addressed to a control's action identifier.
///
/// This is the payload entities publish on the send channel; the
/// (out-of-scope) transport layer encrypts and forwards it to the
/// Miniserver.
///
/// # Examples
///
/// ```
/// use loxr_lib::command::ClimateCommand;
/// use loxr_lib::event::CommandRequest;
/// use loxr_lib::types::ControlUuid;
///
/// let request = CommandRequest::for_command(
///     ControlUuid::new("action-1"),
///     &ClimateCommand::operating_mode(4),
/// );
/// assert_eq!(request.command(), "setOperatingMode/4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    target: ControlUuid,
    command: String,
}

impl CommandRequest {
    /// Creates a request from an already-encoded command string.
    #[must_use]
    pub fn new(target: ControlUuid, command: impl Into<String>) -> Self {
        Self {
            target,
            command: command.into(),
        }
    }

    /// Creates a request by encoding a typed command.
    #[must_use]
    pub fn for_command(target: ControlUuid, command: &impl Command) -> Self {
        Self {
            target,
            command: command.encode(),
        }
    }

    /// Returns the action identifier the command is addressed to.
    #[must_use]
    pub fn target(&self) -> &ControlUuid {
        &self.target
    }

    /// Returns the encoded command string.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// Send channel for outgoing command requests.
///
/// Command emission is fire-and-forget: entities publish and move on,
/// without waiting for acknowledgment. The transport subscribes on one
/// end; tests can subscribe alongside it to observe what was sent.
///
/// # Examples
///
/// ```
/// use loxr_lib::event::{CommandRequest, CommandSink};
/// use loxr_lib::types::ControlUuid;
///
/// let sink = CommandSink::new();
/// let mut rx = sink.subscribe();
///
/// sink.send(CommandRequest::new(ControlUuid::new("action-1"), "override/2"));
/// assert_eq!(rx.try_recv().unwrap().command(), "override/2");
/// ```
#[derive(Debug)]
pub struct CommandSink {
    sender: broadcast::Sender<CommandRequest>,
}

impl CommandSink {
    /// Creates a new command sink with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new command sink with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to outgoing command requests.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CommandRequest> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes a command request.
    ///
    /// If no transport is subscribed, the request is silently discarded.
    pub fn send(&self, request: CommandRequest) {
        // Ignore errors (no subscribers or channel closed)
        let _ = self.sender.send(request);
    }
}

impl Default for CommandSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CommandSink {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
