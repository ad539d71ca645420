//! Spline Editor Library.
//! Kurvenmodell, Editier-Sitzung und Rendering als Library exportiert für Tests
//! und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    Anchor, AnchorId, BezierSampler, Handle, HandleId, HandleKey, HandlePair, HandleSide,
    PointRef, SampleForm, Samples, SplineChain, SplineError, Vector2,
};
pub use shared::{EditorOptions, GuideLine, RenderScene};
