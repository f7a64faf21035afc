//! Server-side call metadata.

/// What is known about the server end of a call: the host name and port the
/// request is directed at, the transport-observed address, and the agent
/// string the server reports about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    name: Option<String>,
    port: Option<u16>,
    address: Option<String>,
    agent: Option<String>,
}

impl ServerInfo {
    /// Creates an empty server info.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the server host name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the explicit port, if one was set.
    ///
    /// An unset port means default-port semantics apply at the transport
    /// level; it is not defaulted here.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the transport-observed address, if captured.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the server agent string, if reported.
    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }

    /// Sets the server host name.
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    /// Sets the explicit port.
    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    /// Stores the transport-observed address.
    pub fn set_address<S: Into<String>>(&mut self, address: S) {
        self.address = Some(address.into());
    }

    /// Stores the server agent string.
    pub fn set_agent<S: Into<String>>(&mut self, agent: S) {
        self.agent = Some(agent.into());
    }
}
