use crate::{
    context::Context,
    lang::{DEFAULT_LANG, Lang},
    pipeline::Pipeline,
    sub::Sub,
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

/// A configured romanizer: one target language plus an ordered sequence of
/// substitution steps. Build once, share freely.
pub struct Romy {
    ctx: Context,
    pipeline: Pipeline,
}

impl Romy {
    pub fn builder() -> RomyBuilder {
        RomyBuilder::default()
    }

    /// Run the pipeline. Total over all inputs; text nothing matches comes
    /// back unchanged and unallocated.
    pub fn romanize<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.pipeline.process(text.into(), &self.ctx)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }
}

pub struct RomyBuilder {
    lang: Lang,
    steps: SmallVec<[Arc<dyn Sub>; 8]>,
}

impl Default for RomyBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            steps: Default::default(),
        }
    }
}

impl RomyBuilder {
    /// Casing locale for the whole pipeline.
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn add_sub<T: Sub + 'static>(mut self, sub: T) -> Self {
        self.steps.push(Arc::new(sub));
        self
    }

    pub fn build(self) -> Romy {
        Romy {
            ctx: Context::new(self.lang),
            pipeline: Pipeline::new(self.steps),
        }
    }
}
