//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und der Darstellung geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{BoundaryMarker, CandidateView, CopyPreviewView, RenderScene};
