//! Events delivered to the single UI loop.
//!
//! All mutation happens on the thread draining these events; the stdin
//! reader thread and the fact timer only ever send.

/// One discrete external event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A line typed on stdin
    Line(String),
    /// The rotation timer picked a new fact
    Fact(&'static str),
    /// stdin closed; shut down
    Eof,
}
