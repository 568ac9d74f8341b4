#[derive(Debug, Clone)]
pub struct ReloadSlotInput {
    pub slot: String,
    pub exclude_ids: Vec<String>,
}
