//! Core-Domänentypen: Vektor, Handles, Anker, SplineChain, Bézier-Sampling.
//!
//! Keine Abhängigkeit auf UI, Rendering oder IO.

pub mod anchor;
pub mod bezier;
pub mod chain;
mod error;
pub mod handle;
pub mod vector;

pub use anchor::{Anchor, AnchorId, PointRef, ANCHOR_COLOR, DEFAULT_HANDLE_OFFSET};
pub use bezier::{
    cubic_bezier, segment_windows, BezierSampler, SampleForm, Samples, DEFAULT_BEZIER_SEGMENTS,
};
pub use chain::{PointHit, SplineChain};
pub use error::SplineError;
pub use handle::{Handle, HandleId, HandleKey, HandlePair, HandleSide};
pub use vector::{Color, Vector2};
