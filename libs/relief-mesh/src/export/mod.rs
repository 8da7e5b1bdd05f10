//! # Export
//!
//! Writes an assembled [`CylinderMesh`](crate::CylinderMesh) to disk as a
//! Wavefront OBJ file, plus a companion metrics report.
//!
//! All I/O of the pipeline lives here and in the image loader; the projector
//! and topology builder never touch the filesystem.

pub mod metrics;
pub mod obj;

pub use metrics::{export_metrics, MeshMetrics, MetricsFormat};
pub use obj::{export_obj, write_obj};
