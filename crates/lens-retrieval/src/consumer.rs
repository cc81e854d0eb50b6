use lens_core::errors::LensResult;

use crate::assembler::AuthorityResult;

/// Outbound collaborator: the answer synthesizer that receives the
/// bucketed result. The core never produces the answer itself.
pub trait ISynthesisConsumer: Send + Sync {
    fn consume(&self, result: &AuthorityResult) -> LensResult<()>;
}
