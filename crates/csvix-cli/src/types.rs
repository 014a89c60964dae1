use csvix_model::IndexSchema;
use csvix_search::ProvisionOutcome;

#[derive(Debug)]
pub struct LoadResult {
    pub index: String,
    pub rows: usize,
    pub batches: usize,
    pub batch_size: usize,
    pub provision: ProvisionOutcome,
    pub schema: IndexSchema,
    pub indexed_count: u64,
}
