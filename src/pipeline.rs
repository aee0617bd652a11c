// src/pipeline.rs
use crate::{context::Context, sub::Sub};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// An ordered sequence of substitution steps. Each step consumes the
/// previous step's full output; there is no streaming.
pub struct Pipeline {
    steps: SmallVec<[Arc<dyn Sub>; 8]>,
}

impl Pipeline {
    pub fn new(steps: SmallVec<[Arc<dyn Sub>; 8]>) -> Self {
        Self { steps }
    }

    pub fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let mut current = text;

        for step in &self.steps {
            // Fast path: skip if no substitution can occur
            if !step.needs_apply(&current, ctx) {
                continue;
            }
            current = step.apply(current, ctx);
        }

        current
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|s| s.name()))
            .finish()
    }
}
