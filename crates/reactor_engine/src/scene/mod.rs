//! Scene composition
//!
//! Builds each frame by traversing an ordered list of scene nodes. Every node
//! receives the current animation time and an explicit [`TransformStack`], and
//! issues draws through the [`Renderer`](crate::render::Renderer) trait with the
//! cumulative model transform attached to each call.
//!
//! ## Architecture
//!
//! ```text
//! AnimationClock (t)
//!      ↓
//! SceneRenderer (camera, lighting, frame balance)
//!      ↓
//! SceneGraph (ordered SceneNodes)
//!      ↓
//! Renderer (device)
//! ```
//!
//! Nothing in the scene is retained between frames; the whole tree is recomputed
//! from `t` on every traversal.

mod controls;
pub mod nodes;
mod scene_graph;
mod scene_renderer;
mod transform_stack;

#[cfg(test)]
mod tests;

pub use controls::SceneControls;
pub use scene_graph::{FrameContext, SceneGraph, SceneNode};
pub use scene_renderer::{FrameReport, SceneRenderer};
pub use transform_stack::TransformStack;

use thiserror::Error;

/// Scene composition errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// `pop` was called with no saved transform
    #[error("Transform stack underflow: pop with nothing saved ({pushes} pushes, {pops} pops so far)")]
    StackUnderflow {
        /// Pushes performed since the last reset
        pushes: u64,
        /// Successful pops performed since the last reset
        pops: u64,
    },

    /// Saved transforms were left on the stack at the end of a frame
    #[error("Transform stack left unbalanced at depth {depth}")]
    UnbalancedFrame {
        /// Depth found at the end of the frame
        depth: usize,
    },
}
