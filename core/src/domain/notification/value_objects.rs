/// Caller-supplied fields of a notification. The actor is always the caller.
#[derive(Debug, Clone, Default)]
pub struct CreateNotificationInput {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub food_id: Option<String>,
}
