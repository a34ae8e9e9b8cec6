//! Cumulative transform with save/restore
//!
//! Holds the current model transform and a LIFO of saved ones, in the manner of a
//! fixed-function matrix stack. Local transforms right-multiply into the current
//! one, so `translate` then `rotate` rotates about the translated origin.

use crate::foundation::math::Transform;
use crate::scene::SceneError;

/// Current cumulative transform plus saved copies
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
    pushes: u64,
    pops: u64,
    underflows: u64,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Empty stack with an identity current transform
    pub fn new() -> Self {
        Self::with_base(Transform::identity())
    }

    /// Empty stack starting from `base`
    pub fn with_base(base: Transform) -> Self {
        Self {
            current: base,
            saved: Vec::new(),
            pushes: 0,
            pops: 0,
            underflows: 0,
        }
    }

    /// The active cumulative transform
    pub fn current(&self) -> &Transform {
        &self.current
    }

    /// Right-multiply `local` into the active transform
    pub fn multiply(&mut self, local: &Transform) {
        self.current = self.current.compose(local);
    }

    /// Translate in the current local frame
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.multiply(&Transform::translation(x, y, z));
    }

    /// Rotate `angle_degrees` about `(x, y, z)` in the current local frame
    pub fn rotate(&mut self, angle_degrees: f32, x: f32, y: f32, z: f32) {
        self.multiply(&Transform::rotation(angle_degrees, x, y, z));
    }

    /// Scale in the current local frame
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.multiply(&Transform::scale(x, y, z));
    }

    /// Save a copy of the active transform
    pub fn push(&mut self) {
        self.saved.push(self.current);
        self.pushes += 1;
    }

    /// Restore the most recently saved transform
    ///
    /// On an empty stack this reports [`SceneError::StackUnderflow`], logs it, and
    /// leaves the active transform untouched.
    pub fn pop(&mut self) -> Result<(), SceneError> {
        match self.saved.pop() {
            Some(previous) => {
                self.current = previous;
                self.pops += 1;
                Ok(())
            }
            None => {
                self.underflows += 1;
                let err = SceneError::StackUnderflow {
                    pushes: self.pushes,
                    pops: self.pops,
                };
                log::error!("{err}");
                Err(err)
            }
        }
    }

    /// Number of saved transforms
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Whether nothing is saved
    pub fn is_balanced(&self) -> bool {
        self.saved.is_empty()
    }

    /// Pushes since the last reset
    pub fn push_count(&self) -> u64 {
        self.pushes
    }

    /// Successful pops since the last reset
    pub fn pop_count(&self) -> u64 {
        self.pops
    }

    /// Rejected pops since the last reset
    pub fn underflow_count(&self) -> u64 {
        self.underflows
    }

    /// Drop everything saved, load `base` and zero the counters
    pub fn reset(&mut self, base: Transform) {
        self.current = base;
        self.saved.clear();
        self.pushes = 0;
        self.pops = 0;
        self.underflows = 0;
    }

    /// Discard saved transforms above `depth`, restoring the one at `depth`
    ///
    /// Used to recover from leaked pushes. Discarded entries are not counted as
    /// pops. Returns how many entries were discarded.
    pub fn unwind_to(&mut self, depth: usize) -> usize {
        if self.saved.len() <= depth {
            return 0;
        }
        let discarded = self.saved.len() - depth;
        self.current = self.saved[depth];
        self.saved.truncate(depth);
        discarded
    }

    /// Run `f` inside a pushed frame, popping afterwards on every path
    ///
    /// Pushes left behind by `f` are unwound before the matching pop, so the
    /// caller always gets its own transform back.
    pub fn with_pushed<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.depth();
        self.push();
        let result = f(self);

        if self.depth() > depth + 1 {
            let leaked = self.unwind_to(depth + 1);
            log::warn!("Discarded {leaked} leaked transform(s) at depth {}", depth + 1);
        }
        // Underflow is already logged by pop
        let _ = self.pop();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_push_pop_restores() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 2.0, 3.0);
        let before = *stack.current();

        stack.push();
        stack.rotate(90.0, 0.0, 1.0, 0.0);
        stack.scale(2.0, 2.0, 2.0);
        assert_ne!(*stack.current(), before);
        stack.pop().unwrap();

        assert_eq!(*stack.current(), before);
        assert!(stack.is_balanced());
        assert_eq!(stack.push_count(), 1);
        assert_eq!(stack.pop_count(), 1);
    }

    #[test]
    fn test_underflow_is_a_no_op() {
        let mut stack = TransformStack::new();
        stack.translate(4.0, 5.0, 6.0);
        let before = *stack.current();

        let err = stack.pop().unwrap_err();
        assert_eq!(err, SceneError::StackUnderflow { pushes: 0, pops: 0 });
        assert_eq!(*stack.current(), before);
        assert_eq!(stack.underflow_count(), 1);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_rotate_then_translate_orbits() {
        let mut stack = TransformStack::new();
        stack.rotate(90.0, 0.0, 0.0, 1.0);
        stack.translate(6.5, 0.0, 0.0);
        let p = stack.current().transform_point(Vec3::zeros());
        assert_relative_eq!(p, Vec3::new(0.0, 6.5, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_with_pushed_returns_value_and_balances() {
        let mut stack = TransformStack::new();
        let inner = stack.with_pushed(|stack| {
            stack.translate(1.0, 0.0, 0.0);
            stack.current().translation_part()
        });
        assert_eq!(inner, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(*stack.current(), Transform::identity());
        assert!(stack.is_balanced());
    }

    #[test]
    fn test_with_pushed_pops_on_early_error() {
        let mut stack = TransformStack::new();
        let result: Result<(), &str> = stack.with_pushed(|stack| {
            stack.translate(0.0, 9.0, 0.0);
            if stack.depth() == 1 {
                return Err("failed mid-node");
            }
            stack.translate(0.0, 1.0, 0.0);
            Ok(())
        });
        assert!(result.is_err());
        assert!(stack.is_balanced());
        assert_eq!(*stack.current(), Transform::identity());
    }

    #[test]
    fn test_with_pushed_unwinds_leaked_pushes() {
        let mut stack = TransformStack::new();
        stack.translate(2.0, 0.0, 0.0);
        let before = *stack.current();

        stack.with_pushed(|stack| {
            stack.push();
            stack.translate(0.0, 3.0, 0.0);
            stack.push();
            stack.scale(5.0, 5.0, 5.0);
        });

        assert_eq!(*stack.current(), before);
        assert!(stack.is_balanced());
    }

    #[test]
    fn test_unwind_and_reset() {
        let mut stack = TransformStack::new();
        stack.push();
        stack.translate(1.0, 0.0, 0.0);
        stack.push();
        stack.translate(1.0, 0.0, 0.0);
        stack.push();

        assert_eq!(stack.unwind_to(1), 2);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current().translation_part(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(stack.unwind_to(5), 0);

        stack.reset(Transform::translation(0.0, 0.0, -1.0));
        assert!(stack.is_balanced());
        assert_eq!(stack.push_count(), 0);
        assert_eq!(stack.current().translation_part(), Vec3::new(0.0, 0.0, -1.0));
    }
}
