use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::{eval::evaluator::SegmentOutput, foundation::core::Vec2};

/// Single-writer handle shared between the director and readers of a render node.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap `value` in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Applies one segment's per-frame outputs to a concrete render node.
///
/// Implementations write numbers straight into their node; they never re-evaluate.
pub trait RenderTarget {
    /// Write this frame's outputs into the node.
    fn apply(&mut self, output: &SegmentOutput);
}

/// Style state of a DOM-like element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical translation in pixels.
    pub translate_y: f64,
    /// Text content, when driven by a reveal.
    pub text: Option<String>,
    /// Whether the element accepts pointer input.
    pub pointer_events: bool,
}

impl ElementStyle {
    /// Value for the CSS `opacity` property.
    pub fn css_opacity(&self) -> String {
        self.opacity.to_string()
    }

    /// Value for the CSS `transform` property.
    pub fn css_transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// Writes opacity, vertical translation and text content into an [`ElementStyle`].
pub struct StyleTarget {
    style: Shared<ElementStyle>,
    /// Opacity above which the element accepts pointer events. `None` keeps them off.
    interactive_above: Option<f64>,
}

impl StyleTarget {
    /// Target writing into `style`; pointer events stay off.
    pub fn new(style: Shared<ElementStyle>) -> Self {
        Self {
            style,
            interactive_above: None,
        }
    }

    /// Enable pointer events while opacity exceeds `threshold`.
    pub fn interactive(mut self, threshold: f64) -> Self {
        self.interactive_above = Some(threshold);
        self
    }
}

impl RenderTarget for StyleTarget {
    fn apply(&mut self, output: &SegmentOutput) {
        let mut style = self.style.borrow_mut();
        if let Some(opacity) = output.opacity().or_else(|| output.curve()) {
            style.opacity = opacity.max(0.0);
        }
        if let Some(y) = output.offset().or_else(|| output.parallax()) {
            style.translate_y = y;
        }
        if let Some(text) = output.text()
            && style.text.as_deref() != Some(text)
        {
            style.text = Some(text.to_string());
        }
        style.pointer_events = self
            .interactive_above
            .is_some_and(|threshold| style.opacity > threshold);
    }
}

/// Transform and material state of a 3D scene-graph node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneNode {
    /// Material opacity in `[0, 1]`.
    pub opacity: f64,
    /// Rendered at all.
    pub visible: bool,
    /// Position in the scene plane.
    pub position: Vec2,
    /// Rotation around the vertical axis, radians.
    pub rotation_y: f64,
}

/// Which node channel a parallax output drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParallaxChannel {
    /// Horizontal position.
    #[default]
    PositionX,
    /// Rotation around the vertical axis.
    RotationY,
}

/// Writes opacity, visibility and transform into a [`SceneNode`].
pub struct NodeTarget {
    node: Shared<SceneNode>,
    parallax: ParallaxChannel,
}

impl NodeTarget {
    /// Target writing into `node`, parallax on `PositionX`.
    pub fn new(node: Shared<SceneNode>) -> Self {
        Self {
            node,
            parallax: ParallaxChannel::PositionX,
        }
    }

    /// Route parallax output to `channel`.
    pub fn with_parallax(mut self, channel: ParallaxChannel) -> Self {
        self.parallax = channel;
        self
    }
}

impl RenderTarget for NodeTarget {
    fn apply(&mut self, output: &SegmentOutput) {
        let mut node = self.node.borrow_mut();
        if let Some(opacity) = output.opacity().or_else(|| output.curve()) {
            node.opacity = opacity.clamp(0.0, 1.0);
            node.visible = node.opacity > 0.0;
        }
        if let Some(y) = output.offset() {
            node.position.y = y;
        }
        if let Some(v) = output.parallax() {
            match self.parallax {
                ParallaxChannel::PositionX => node.position.x = v,
                ParallaxChannel::RotationY => node.rotation_y = v,
            }
        }
    }
}

/// Segment id to the render targets it drives.
#[derive(Default)]
pub struct TargetRegistry {
    targets: BTreeMap<String, Vec<Box<dyn RenderTarget>>>,
}

impl TargetRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target for `id`. Several targets may share an id.
    pub fn bind(&mut self, id: impl Into<String>, target: Box<dyn RenderTarget>) {
        self.targets.entry(id.into()).or_default().push(target);
    }

    /// Drop every target bound to `id`; returns how many were removed.
    pub fn unbind(&mut self, id: &str) -> usize {
        self.targets.remove(id).map_or(0, |v| v.len())
    }

    /// Return `true` when `id` has at least one target.
    pub fn is_bound(&self, id: &str) -> bool {
        self.targets.get(id).is_some_and(|v| !v.is_empty())
    }

    /// Apply `output` to every target bound to `id`. Returns false when none is bound.
    pub fn apply(&mut self, id: &str, output: &SegmentOutput) -> bool {
        match self.targets.get_mut(id) {
            Some(list) if !list.is_empty() => {
                for target in list.iter_mut() {
                    target.apply(output);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/target.rs"]
mod tests;
