pub mod casing;
pub mod chart;
pub mod context;
pub mod lang;
pub mod pipeline;
pub mod romy;
pub mod sub;
pub mod system;
pub mod template;

pub use lang::Lang;
pub use lang::data::{AZE, DEU, ELL, ENG, RUS, TUR};

pub use casing::CasingMode;
pub use chart::{Chart, ChartBuilder, ChartError};
pub use context::Context;
pub use romy::Romy;
pub use sub::Sub;
pub use sub::longest_match::{ChartSub, substitute_from_chart};
pub use sub::pattern::{PatternRule, RuleError};
pub use template::{Template, TemplateError};
