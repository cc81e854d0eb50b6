use crate::errors::LensResult;
use crate::model::{Chunk, Node};

/// Document & embedding provider: supplies every chunk currently known.
pub trait IChunkProvider: Send + Sync {
    fn chunks(&self) -> LensResult<Vec<Chunk>>;
}

/// Entity workflow providers: decisions, questions, roadmap items,
/// assessments, and gaps as typed nodes.
pub trait IEntityProvider: Send + Sync {
    fn entities(&self) -> LensResult<Vec<Node>>;
}

impl IChunkProvider for Vec<Chunk> {
    fn chunks(&self) -> LensResult<Vec<Chunk>> {
        Ok(self.clone())
    }
}

impl IEntityProvider for Vec<Node> {
    fn entities(&self) -> LensResult<Vec<Node>> {
        Ok(self.clone())
    }
}
