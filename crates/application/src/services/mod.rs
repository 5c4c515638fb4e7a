mod answer_policy;
mod answer_synthesizer;
mod zone_router;

pub use answer_policy::{AnswerPolicy, ReplyRole, Side, ValueSource, FLIP_TTL, LONG_TTL};
pub use answer_synthesizer::AnswerSynthesizer;
pub use zone_router::ZoneRouter;
