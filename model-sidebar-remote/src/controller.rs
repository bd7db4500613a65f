use crate::command::RemoteCommand;

/// Backend session accepting raw command input.
pub trait ClientSession {
    /// Feed one raw command buffer into the session.
    fn handle_input(&mut self, buffer: &[u8]);
}

/// Fire-and-forget command channel towards the document backend.
///
/// The return value only says whether the command was handed over. There is
/// no acknowledgement, correlation id, timeout or retry.
pub trait RemoteController {
    /// Send a plain text command.
    fn send_command(&mut self, command: &str) -> bool;

    /// Send a command object.
    fn send_command_object(&mut self, command: Box<dyn RemoteCommand>) -> bool;
}

/// Remote controller forwarding commands into an attached client session.
pub struct RController<S> {
    session: Option<S>,
}

impl<S: ClientSession> RController<S> {
    pub fn new(session: S) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Build a controller with no session; every send is refused.
    pub fn detached() -> Self {
        Self { session: None }
    }

    /// Return the attached session, if any.
    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    /// Detach and return the session.
    pub fn take_session(&mut self) -> Option<S> {
        self.session.take()
    }

    /// Forward a raw buffer to the session.
    ///
    /// Returns `false` for an empty buffer or when no session is attached.
    pub fn execute_command(&mut self, buffer: &[u8]) -> bool {
        if buffer.is_empty() {
            return false;
        }
        match self.session.as_mut() {
            Some(session) => {
                session.handle_input(buffer);
                true
            },
            None => {
                log::debug!("remote command dropped: no session attached");
                false
            },
        }
    }
}

impl<S: ClientSession> RemoteController for RController<S> {
    fn send_command(&mut self, command: &str) -> bool {
        self.execute_command(command.as_bytes())
    }

    fn send_command_object(&mut self, command: Box<dyn RemoteCommand>) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                command.execute(session);
                true
            },
            None => false,
        }
    }
}
