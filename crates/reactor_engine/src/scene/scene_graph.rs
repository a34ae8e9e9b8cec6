//! Scene graph trait and the ordered node list
//!
//! Draw order is a property of the data: the graph is a `Vec` of nodes traversed
//! front to back. Opaque elements come first so translucent ones composite against
//! them.

use crate::render::{RenderResult, Renderer};
use crate::scene::nodes::{
    CeilingLightsNode, ContainmentNode, CoreNode, FloorLightsNode, FloorNode, HologramsNode,
    MachinesNode, ParticlesNode, PeopleNode, RingsNode, WallsNode,
};
use crate::scene::{SceneControls, TransformStack};

/// Per-frame inputs shared by every node
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Animation time
    pub time: f32,
    /// Runtime toggles
    pub controls: &'a SceneControls,
}

impl<'a> FrameContext<'a> {
    /// Bundle time and controls
    pub fn new(time: f32, controls: &'a SceneControls) -> Self {
        Self { time, controls }
    }
}

/// A unit of the composition tree
///
/// `draw` may freely transform `stack` and change renderer state; the graph wraps
/// each node in its own pushed frame. Nodes that leave lighting or blending
/// altered must restore them before returning.
pub trait SceneNode {
    /// Stable name used in logs and tests
    fn name(&self) -> &'static str;

    /// Issue this node's draws for the given frame
    fn draw(&self, ctx: &FrameContext<'_>, stack: &mut TransformStack, renderer: &mut dyn Renderer) -> RenderResult<()>;
}

/// Ordered list of top-level nodes
#[derive(Default)]
pub struct SceneGraph {
    nodes: Vec<Box<dyn SceneNode>>,
}

impl SceneGraph {
    /// Empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph drawing `nodes` in the given order
    pub fn with_nodes(nodes: Vec<Box<dyn SceneNode>>) -> Self {
        Self { nodes }
    }

    /// The reactor room: floor, floor lights, containment, core, rings,
    /// holograms, particles, walls, ceiling lights, people, machines
    pub fn reactor_room() -> Self {
        Self::with_nodes(vec![
            Box::new(FloorNode),
            Box::new(FloorLightsNode),
            Box::new(ContainmentNode),
            Box::new(CoreNode),
            Box::new(RingsNode),
            Box::new(HologramsNode),
            Box::new(ParticlesNode),
            Box::new(WallsNode),
            Box::new(CeilingLightsNode),
            Box::new(PeopleNode),
            Box::new(MachinesNode),
        ])
    }

    /// Node names in draw order
    pub fn node_names(&self) -> Vec<&'static str> {
        self.nodes.iter().map(|node| node.name()).collect()
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Draw every node in order
    ///
    /// Each node runs in its own pushed frame, so siblings never see each other's
    /// transforms. A renderer error stops the traversal after the failing node's
    /// frame has been popped.
    pub fn traverse(
        &self,
        ctx: &FrameContext<'_>,
        stack: &mut TransformStack,
        renderer: &mut dyn Renderer,
    ) -> RenderResult<()> {
        for node in &self.nodes {
            log::trace!("Drawing node '{}' at t={:.2}", node.name(), ctx.time);
            let depth = stack.depth();
            let result = stack.with_pushed(|stack| node.draw(ctx, stack, renderer));

            if stack.depth() != depth {
                log::warn!(
                    "Node '{}' changed stack depth from {} to {}",
                    node.name(),
                    depth,
                    stack.depth()
                );
                stack.unwind_to(depth);
            }

            if let Err(err) = result {
                log::error!("Node '{}' failed: {}", node.name(), err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for SceneGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneGraph").field("nodes", &self.node_names()).finish()
    }
}
