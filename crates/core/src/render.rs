//! Render seam between the computational core and any frontend

use emc2_types::Comparison;

/// Callback interface a frontend implements to receive core output.
///
/// The core never draws anything itself; it hands formatted text and
/// comparison rows to whatever sink the presentation layer registered.
pub trait RenderSink {
    /// A new primary result is ready, e.g. "8.987552 × 10¹⁶ J"
    fn on_result(&mut self, text: &str);

    /// The comparison table was recomputed
    fn on_comparison(&mut self, items: &[Comparison]);

    /// The fact rotator picked a new fact
    fn on_fact(&mut self, text: &str);
}

/// Type-erased render sink for dynamic dispatch
pub type BoxedRenderSink = Box<dyn RenderSink>;
