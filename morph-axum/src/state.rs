use std::sync::Arc;

use morph_core::Resizer;

#[derive(Clone)]
pub struct MorphAxumState {
    pub resizer: Arc<Resizer>,
}

impl MorphAxumState {
    pub fn new(resizer: Resizer) -> Self {
        Self {
            resizer: Arc::new(resizer),
        }
    }
}
